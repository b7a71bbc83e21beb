//! tickerdash-core
//!
//! Connector contracts shared across the tickerdash ecosystem.
//!
//! - `connector`: the `DashConnector` trait and capability provider traits.
//! - `series`: sanity helpers for candle data arriving from providers.
//!
//! Domain types live in `tickerdash-types` and are re-exported here so
//! connector crates can depend on `tickerdash-core` only.
#![warn(missing_docs)]

/// Connector capability traits and the primary `DashConnector` interface.
pub mod connector;
/// Sanity helpers for provider-supplied candle data.
pub mod series;

pub use connector::{
    ConnectorKey, DashConnector, HistoryProvider, NewsProvider, ProfileProvider,
};
pub use series::ensure_candle_bounds;
pub use tickerdash_types::{
    Candle, ChartKind, ChartSpec, CompanyInfo, DashError, DashboardConfig, LabelColor,
    NewsArticle, NewsRequest, PriceSeries, Query, SentimentLabel, Trace,
};
