//! App Configuration
//!
//! Read at compile time from the environment (or `.env`, see `build.rs`).

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_CUSTOMER_ID: &str = "1";
const DEFAULT_TOP_RATED_LIMIT: u32 = 4;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    /// Stand-in identity for the bookings link; `None` hides it
    pub demo_customer_id: Option<String>,
    pub top_rated_limit: u32,
    pub enable_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            demo_customer_id: Some(
                option_env!("DEMO_CUSTOMER_ID")
                    .unwrap_or(DEFAULT_CUSTOMER_ID)
                    .trim()
                    .to_string(),
            ),
            top_rated_limit: option_env!("TOP_RATED_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOP_RATED_LIMIT),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.demo_customer_id = self.demo_customer_id.filter(|id| !id.is_empty());
        self
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
