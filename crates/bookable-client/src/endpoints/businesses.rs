//! Business Endpoints

use super::segment;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Business, OpeningHours, RatingSummary, Review, Service};
use crate::transport::Transport;

pub async fn list_businesses<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Business>> {
    api.get_list("/businesses/").await
}

pub async fn top_rated_businesses<T: Transport>(api: &ApiClient<T>, limit: u32) -> ApiResult<Vec<Business>> {
    api.get_list(&format!("/businesses/top-rated?limit={}", limit)).await
}

/// `Ok(None)` when the backend answers with an empty body
pub async fn get_business<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<Option<Business>> {
    api.get(&format!("/businesses/{}", segment(business_id))).await
}

pub async fn list_business_services<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<Vec<Service>> {
    api.get_list(&format!("/businesses/{}/services", segment(business_id))).await
}

pub async fn list_business_reviews<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<Vec<Review>> {
    api.get_list(&format!("/businesses/{}/reviews", segment(business_id))).await
}

pub async fn list_opening_hours<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<Vec<OpeningHours>> {
    api.get_list(&format!("/businesses/{}/opening-hours", segment(business_id))).await
}

pub async fn get_business_rating<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<Option<RatingSummary>> {
    api.get(&format!("/businesses/{}/rating", segment(business_id))).await
}
