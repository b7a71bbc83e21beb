use tickerdash_core::series::ensure_candle_bounds;
use tickerdash_core::{DashError, PriceSeries, Query};

use crate::Dashboard;

impl Dashboard {
    /// Fetch the OHLC series for a query from the first capable provider.
    ///
    /// Candles arrive ascending by timestamp (the series constructor sorts)
    /// and are sanity-checked per provider, so a connector returning a broken
    /// payload falls back to the next one. An empty range is a valid result:
    /// the chart layer decides how to present the absence of data.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support history.
    pub async fn history(&self, query: &Query) -> Result<PriceSeries, DashError> {
        let q = query.clone();
        self.fetch_single(
            "history",
            &format!("history for {}", query.ticker()),
            move |c| {
                c.as_history_provider()?;
                let q2 = q.clone();
                Some(async move {
                    let Some(p) = c.as_history_provider() else {
                        return Err(DashError::connector(
                            c.name(),
                            "missing history capability during call",
                        ));
                    };
                    let series = p.history(&q2).await?;
                    for candle in series.candles() {
                        ensure_candle_bounds(candle)?;
                    }
                    Ok(series)
                })
            },
        )
        .await
    }
}
