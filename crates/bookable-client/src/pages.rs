//! Page Loaders
//!
//! What each routed page fetches. Multi-resource pages fan out with
//! `try_join!`: all calls go out together, the first failure wins, and
//! partial results never leave this module.

use futures::try_join;

use crate::client::ApiClient;
use crate::endpoints::{
    category_tree, get_business, get_business_rating, get_category, list_business_reviews,
    list_business_services, list_businesses, list_categories, list_category_services,
    list_opening_hours, past_bookings, top_rated_businesses, upcoming_bookings,
};
use crate::error::ApiResult;
use crate::models::{Booking, Business, Category, OpeningHours, RatingSummary, Review, Service};
use crate::transport::Transport;
use crate::tree::{prune_category_tree, CategoryBranch};

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessDetailData {
    /// `None` when the business call succeeded with an empty body
    pub business: Option<Business>,
    pub services: Vec<Service>,
    pub reviews: Vec<Review>,
    pub opening_hours: Vec<OpeningHours>,
    pub rating: Option<RatingSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoriesData {
    pub categories: Vec<Category>,
    /// Tree already pruned for rendering
    pub tree: Vec<CategoryBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetailData {
    pub category: Option<Category>,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingsData {
    pub upcoming: Vec<Booking>,
    pub past: Vec<Booking>,
}

/// Home: top-rated panel
pub async fn load_home<T: Transport>(api: &ApiClient<T>, limit: u32) -> ApiResult<Vec<Business>> {
    top_rated_businesses(api, limit).await
}

pub async fn load_businesses<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Business>> {
    list_businesses(api).await
}

pub async fn load_business_detail<T: Transport>(api: &ApiClient<T>, business_id: &str) -> ApiResult<BusinessDetailData> {
    let (business, services, reviews, opening_hours, rating) = try_join!(
        get_business(api, business_id),
        list_business_services(api, business_id),
        list_business_reviews(api, business_id),
        list_opening_hours(api, business_id),
        get_business_rating(api, business_id),
    )?;
    Ok(BusinessDetailData { business, services, reviews, opening_hours, rating })
}

pub async fn load_categories<T: Transport>(api: &ApiClient<T>) -> ApiResult<CategoriesData> {
    let (categories, tree) = try_join!(list_categories(api), category_tree(api))?;
    Ok(CategoriesData { categories, tree: prune_category_tree(&tree) })
}

pub async fn load_category_detail<T: Transport>(api: &ApiClient<T>, category_id: &str) -> ApiResult<CategoryDetailData> {
    let (category, services) = try_join!(get_category(api, category_id), list_category_services(api, category_id))?;
    Ok(CategoryDetailData { category, services })
}

pub async fn load_bookings<T: Transport>(api: &ApiClient<T>, customer_id: &str) -> ApiResult<BookingsData> {
    let (upcoming, past) = try_join!(upcoming_bookings(api, customer_id), past_bookings(api, customer_id))?;
    Ok(BookingsData { upcoming, past })
}
