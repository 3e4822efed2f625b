//! API Configuration
//!
//! Base address of the catalog service. Set at build time through the
//! `ZOMBIELAND_API_URL` environment variable.

/// Used when `ZOMBIELAND_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Catalog service endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Activities,
    Categories,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Activities => "activities",
            Endpoint::Categories => "category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("ZOMBIELAND_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
