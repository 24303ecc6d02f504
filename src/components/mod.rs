//! UI Components
//!
//! Stateless Leptos components, parameterized purely by props.

mod layout;
mod business_card;
mod service_card;
mod rating_stars;
mod category_tree;
mod status;

pub use layout::Layout;
pub use business_card::BusinessCard;
pub use service_card::ServiceCard;
pub use rating_stars::RatingStars;
pub use category_tree::CategoryTree;
pub use status::{ErrorLine, LoadingLine};
