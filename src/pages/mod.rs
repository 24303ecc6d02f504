//! Routed Pages
//!
//! One component per route. Each page owns its load state; nothing is shared
//! between pages.

mod home;
mod businesses;
mod business_detail;
mod categories;
mod category_detail;
mod bookings;
mod not_found;

pub use home::HomePage;
pub use businesses::BusinessesPage;
pub use business_detail::BusinessDetailPage;
pub use categories::CategoriesPage;
pub use category_detail::CategoryDetailPage;
pub use bookings::BookingsPage;
pub use not_found::NotFoundPage;
