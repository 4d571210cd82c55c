/// Where the banking API lives.
///
/// Every endpoint path handed to [`crate::AuthenticatedClient`] is resolved against
/// [`BusinessConfig::api_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Versioned API root, e.g. `http://localhost:8080/v1`.
    pub fn api_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            "/v1".to_owned()
        } else {
            format!("{base}/v1")
        }
    }

    /// Full URL for an endpoint path such as `/users/get`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_url())
        } else {
            format!("{}/{path}", self.api_url())
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
