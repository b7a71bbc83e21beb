use std::time::Duration;

use tickerdash_core::DashError;

use crate::{CONNECTOR_NAME, YahooConnector};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; tickerdash/0.1)";

/// Builder for [`YahooConnector`].
///
/// The base URL override exists so tests can point the connector at a local
/// HTTP mock; production code uses the default.
pub struct YahooBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for YahooBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooBuilder {
    /// Create a builder with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the API base URL (scheme + host, no trailing path).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the whole-request HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparseable base URL and `Connector` if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YahooConnector, DashError> {
        let base_url = url::Url::parse(&self.base_url)
            .map_err(|e| DashError::InvalidArg(format!("base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| DashError::connector(CONNECTOR_NAME, e.to_string()))?;
        Ok(YahooConnector { http, base_url })
    }
}
