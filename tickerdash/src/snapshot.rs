use tickerdash_core::{ChartKind, ChartSpec, DashError, PriceSeries, Query};

use crate::report::{FundamentalsReport, NewsReport};
use crate::{Dashboard, chart};

/// Everything one render pass produces: the raw series, the chart, and the
/// two text reports.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// The query this pass ran with.
    pub query: Query,
    /// Chart kind selected for this pass.
    pub kind: ChartKind,
    /// Raw price table shown on the Pricing tab.
    pub series: PriceSeries,
    /// The built chart, or `None` when the range held no candles.
    pub chart: Option<ChartSpec>,
    /// Fundamentals tab content.
    pub fundamentals: FundamentalsReport,
    /// News tab content.
    pub news: NewsReport,
}

impl Dashboard {
    /// Run one full render pass: history, chart, fundamentals, news — in
    /// that order, sequentially.
    ///
    /// Nothing is cached between passes. Against unchanged providers, two
    /// passes with the same query and kind produce equal snapshots.
    ///
    /// # Errors
    /// Any fetcher failure aborts the pass; an empty price range does not
    /// (the snapshot carries `chart: None` instead).
    pub async fn snapshot(
        &self,
        query: &Query,
        kind: ChartKind,
    ) -> Result<DashboardSnapshot, DashError> {
        tracing::info!(ticker = query.ticker(), kind = kind.label(), "render pass");

        let series = self.history(query).await?;
        let chart = if series.is_empty() {
            None
        } else {
            Some(chart::build(kind, &series, query.ticker())?)
        };
        let info = self.company_info(query.ticker()).await?;
        let articles = self.news(query.ticker()).await?;

        Ok(DashboardSnapshot {
            query: query.clone(),
            kind,
            series,
            chart,
            fundamentals: FundamentalsReport::new(&info),
            news: NewsReport::build(&articles),
        })
    }
}
