//! Tickerdash orchestrates one dashboard render pass across pluggable data providers.
//!
//! Overview
//! - Routes history, fundamentals, and news requests to connectors that
//!   implement the `tickerdash_core` contracts, in registration order with
//!   per-provider timeouts and fallback.
//! - Builds exactly one chart per pass from the fetched series for the
//!   selected `ChartKind` (candlestick, OHLC, low line, high line).
//! - Renders fundamentals as eight fixed labeled lines and news as indexed
//!   cards with sign-based sentiment labels.
//! - A render pass is strictly sequential: history, then chart, then
//!   fundamentals, then news. Nothing is cached between passes; rerunning
//!   with the same query against unchanged providers yields an identical
//!   snapshot.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerdash::{ChartKind, Dashboard, Query};
//!
//! let dash = Dashboard::builder()
//!     .with_connector(Arc::new(tickerdash_yahoo::YahooConnector::new()))
//!     .build()?;
//!
//! let snapshot = dash.snapshot(&Query::default(), ChartKind::Candlestick).await?;
//! for line in snapshot.fundamentals.lines() {
//!     println!("{}: {}", line.label, line.value);
//! }
//! ```
#![warn(missing_docs)]

/// One chart per pass: the exhaustive builder over the four chart kinds.
pub mod chart;
pub(crate) mod core;
/// Fundamentals and news rendering into display-ready reports.
pub mod report;
mod router;
mod snapshot;

pub use core::{Dashboard, DashboardBuilder};
pub use report::{FundamentalsReport, LabeledLine, NewsCard, NewsReport};
pub use snapshot::DashboardSnapshot;

// Re-export core types for convenience
pub use tickerdash_core::{
    Candle, ChartKind, ChartSpec, CompanyInfo, ConnectorKey, DashConnector, DashError,
    DashboardConfig, LabelColor, NewsArticle, NewsRequest, PriceSeries, Query, SentimentLabel,
    Trace,
};
