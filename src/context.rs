//! Application Context
//!
//! Shared, read-only values provided via Leptos Context API.

use leptos::prelude::*;
use bookable_client::{ApiClient, AppRoute};

use crate::config::AppConfig;
use crate::fetch::FetchTransport;

pub type Api = ApiClient<FetchTransport>;

/// Who the storefront is acting for.
///
/// There is no sign-in yet: the customer comes from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    customer_id: Option<String>,
}

impl Session {
    pub fn from_config(config: &AppConfig) -> Self {
        Self { customer_id: config.demo_customer_id.clone() }
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Link to the current customer's bookings, if anyone is "signed in"
    pub fn bookings_href(&self) -> Option<String> {
        self.customer_id
            .as_ref()
            .map(|id| AppRoute::CustomerBookings(id.clone()).href())
    }
}

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    /// REST access layer
    pub api: Api,
    /// Injected customer identity
    pub session: Session,
    /// Size of the home page's top-rated panel
    pub top_rated_limit: u32,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(config.api_url.clone(), FetchTransport),
            session: Session::from_config(config),
            top_rated_limit: config.top_rated_limit,
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
