//! Customer Booking Endpoints

use super::segment;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::Booking;
use crate::transport::Transport;

pub async fn upcoming_bookings<T: Transport>(api: &ApiClient<T>, customer_id: &str) -> ApiResult<Vec<Booking>> {
    api.get_list(&format!("/customers/{}/bookings/upcoming", segment(customer_id))).await
}

pub async fn past_bookings<T: Transport>(api: &ApiClient<T>, customer_id: &str) -> ApiResult<Vec<Booking>> {
    api.get_list(&format!("/customers/{}/bookings/past", segment(customer_id))).await
}
