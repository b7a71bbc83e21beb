//! Chart construction: one `ChartSpec` per render pass.

use tickerdash_core::{ChartKind, ChartSpec, DashError, LabelColor, PriceSeries, Trace};

/// Build the chart for a series and selection.
///
/// The match over [`ChartKind`] is exhaustive, so an unsupported selection
/// cannot occur: every selector value yields exactly one trace, titled with
/// the ticker.
///
/// # Errors
/// Returns `DashError::NoData` for an empty series; the caller presents an
/// explicit "no data" state instead of an empty chart.
pub fn build(kind: ChartKind, series: &PriceSeries, ticker: &str) -> Result<ChartSpec, DashError> {
    if series.is_empty() {
        return Err(DashError::no_data(format!("candles for {ticker}")));
    }

    let candles = series.candles();
    let x: Vec<_> = candles.iter().map(|c| c.ts).collect();

    let trace = match kind {
        ChartKind::Candlestick => Trace::Candlestick {
            x,
            open: candles.iter().map(|c| c.open).collect(),
            high: candles.iter().map(|c| c.high).collect(),
            low: candles.iter().map(|c| c.low).collect(),
            close: candles.iter().map(|c| c.close).collect(),
            increasing: LabelColor::Green,
            decreasing: LabelColor::Red,
        },
        ChartKind::Ohlc => Trace::Ohlc {
            x,
            open: candles.iter().map(|c| c.open).collect(),
            high: candles.iter().map(|c| c.high).collect(),
            low: candles.iter().map(|c| c.low).collect(),
            close: candles.iter().map(|c| c.close).collect(),
        },
        ChartKind::Low => Trace::Line {
            name: "Low".to_string(),
            x,
            y: candles.iter().map(|c| c.low).collect(),
        },
        ChartKind::High => Trace::Line {
            name: "High".to_string(),
            x,
            y: candles.iter().map(|c| c.high).collect(),
        },
    };

    Ok(ChartSpec {
        title: ticker.to_string(),
        trace,
    })
}
