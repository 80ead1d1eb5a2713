//! API configuration for frontend-backend communication
//!
//! The base URL is taken from the `UPLOAD_API_URL` environment variable at
//! build time. When it is missing or blank, requests go to the same origin
//! the page was served from.

/// Build-time base URL of the upload API
const API_URL_ENV: Option<&str> = option_env!("UPLOAD_API_URL");

/// Base URL used to construct request URLs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config from a base URL; surrounding whitespace and trailing
    /// slashes are dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the config captured from the build environment
    pub fn from_env() -> Self {
        let config = Self::new(API_URL_ENV.unwrap_or_default());
        if config.base_url.is_empty() {
            log::info!("UPLOAD_API_URL is not set, using same-origin requests");
        } else {
            log::info!("Upload API base URL: {}", config.base_url);
        }
        config
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::ApiConfig;
    ///
    /// let config = ApiConfig::new("http://localhost:8000/");
    /// assert_eq!(config.url("/upload"), "http://localhost:8000/upload");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
