//! Domain types, chart model, and configuration shared across the tickerdash workspace.
#![warn(missing_docs)]

mod chart;
mod company;
mod config;
mod error;
mod market;
mod news;

pub use chart::{ChartKind, ChartSpec, LabelColor, Trace};
pub use company::CompanyInfo;
pub use config::DashboardConfig;
pub use error::DashError;
pub use market::{Candle, PriceSeries, Query};
pub use news::{NewsArticle, NewsRequest, SentimentLabel};
