//! Bookable Client
//!
//! Platform-independent half of the storefront:
//! - transport / client: typed REST access over a pluggable transport
//! - endpoints: one function per backend resource the pages read
//! - load / pages: per-page load cycles and all-or-nothing joins
//! - tree / present / routes: pure helpers the components render from

mod error;
mod transport;
mod client;
mod models;
mod endpoints;
mod load;
mod pages;
mod tree;
mod present;
mod routes;

#[cfg(test)]
mod mock;

pub use error::{ApiError, ApiResult};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use client::{ApiClient, RequestOptions};
pub use models::{Booking, Business, Category, OpeningHours, RatingSummary, Review, Service};
pub use endpoints::*;
pub use load::{LoadCycle, LoadState, LoadTicket};
pub use pages::{
    load_bookings, load_business_detail, load_businesses, load_categories, load_category_detail,
    load_home, BookingsData, BusinessDetailData, CategoriesData, CategoryDetailData,
};
pub use tree::{prune_category_tree, tree_depth, CategoryBranch, MAX_TREE_DEPTH};
pub use present::{
    business_meta, format_rating, opening_hours_label, review_author, service_meta, BusinessCardModel,
};
pub use routes::AppRoute;
