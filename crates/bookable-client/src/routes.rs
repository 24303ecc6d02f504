//! Client-side routes, for building links.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Businesses,
    BusinessDetail(String),
    Categories,
    CategoryDetail(String),
    CustomerBookings(String),
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Businesses => "/businesses".to_string(),
            AppRoute::BusinessDetail(id) => format!("/businesses/{}", id),
            AppRoute::Categories => "/categories".to_string(),
            AppRoute::CategoryDetail(id) => format!("/categories/{}", id),
            AppRoute::CustomerBookings(id) => format!("/customers/{}/bookings", id),
        }
    }
}
