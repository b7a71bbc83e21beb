use async_trait::async_trait;

use tickerdash_types::{CompanyInfo, DashError, NewsArticle, NewsRequest, PriceSeries, Query};

/// Typed key for identifying connectors in priority configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ConnectorKey> for &'static str {
    fn from(k: ConnectorKey) -> Self {
        k.0
    }
}

/// Focused role trait for connectors that provide OHLC history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the daily OHLC series for the query's ticker and date range.
    ///
    /// An empty range yields an empty series, not an error; the renderer
    /// decides how to present the absence of data.
    async fn history(&self, query: &Query) -> Result<PriceSeries, DashError>;
}

/// Focused role trait for connectors that provide company fundamentals.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the eight-field fundamentals record for a ticker.
    ///
    /// Connectors must return `DashError::Data` when any required field is
    /// absent upstream; no fallback value is substituted.
    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo, DashError>;
}

/// Focused role trait for connectors that provide news with sentiment scores.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `req.count` recent articles for a ticker, newest first.
    ///
    /// Each article carries precomputed title and summary sentiment scores.
    async fn news(&self, ticker: &str, req: NewsRequest) -> Result<Vec<NewsArticle>, DashError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait DashConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g. "tickerdash-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for company fundamentals.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }

    /// If implemented, returns a trait object for news articles.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
