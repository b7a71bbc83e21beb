//! tickerdash-yahoo
//!
//! Connector that implements the `tickerdash_core` contracts on top of the
//! public Yahoo Finance endpoints: the chart API for OHLC history, the
//! quote-summary API for company fundamentals, and the search feed for news.
//!
//! News sentiment is scored at fetch time with a small lexicon, so articles
//! enter the pipeline with precomputed title and summary scores.
#![warn(missing_docs)]

mod builder;
mod history;
mod profile;
mod news;
/// Lexicon-based sentiment scoring for headlines and summaries.
pub mod sentiment;

use async_trait::async_trait;
use tickerdash_core::connector::{DashConnector, HistoryProvider, NewsProvider, ProfileProvider};
use tickerdash_core::{CompanyInfo, DashError, NewsArticle, NewsRequest, PriceSeries, Query};

pub use builder::YahooBuilder;

pub(crate) const CONNECTOR_NAME: &str = "tickerdash-yahoo";

/// Connector backed by the public Yahoo Finance endpoints.
pub struct YahooConnector {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: url::Url,
}

impl YahooConnector {
    /// Returns a builder with the production base URL and default HTTP settings.
    #[must_use]
    pub fn builder() -> YahooBuilder {
        YahooBuilder::new()
    }

    /// Build a connector with all defaults.
    ///
    /// # Errors
    /// Returns `Connector` if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, DashError> {
        Self::builder().build()
    }

    pub(crate) fn wire_err(e: &reqwest::Error) -> DashError {
        DashError::connector(CONNECTOR_NAME, e.to_string())
    }
}

impl DashConnector for YahooConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    async fn history(&self, query: &Query) -> Result<PriceSeries, DashError> {
        history::fetch(self, query).await
    }
}

#[async_trait]
impl ProfileProvider for YahooConnector {
    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo, DashError> {
        profile::fetch(self, ticker).await
    }
}

#[async_trait]
impl NewsProvider for YahooConnector {
    async fn news(&self, ticker: &str, req: NewsRequest) -> Result<Vec<NewsArticle>, DashError> {
        news::fetch(self, ticker, req).await
    }
}
