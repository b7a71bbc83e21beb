mod helpers;

use tickerdash::{ChartKind, DashError, LabelColor, PriceSeries, Trace, chart};

use helpers::mock_connector::{candle, series_with};

fn sample_series() -> tickerdash::PriceSeries {
    PriceSeries::new(vec![candle(2, 100, 105), candle(3, 105, 103), candle(4, 103, 110)])
}

#[test]
fn candlestick_has_direction_colors_and_title() {
    let spec = chart::build(ChartKind::Candlestick, &sample_series(), "AAPL").unwrap();
    assert_eq!(spec.title, "AAPL");
    match spec.trace {
        Trace::Candlestick {
            x,
            open,
            close,
            increasing,
            decreasing,
            ..
        } => {
            assert_eq!(x.len(), 3);
            assert_eq!(open.len(), 3);
            assert_eq!(close.len(), 3);
            assert_eq!(increasing, LabelColor::Green);
            assert_eq!(decreasing, LabelColor::Red);
        }
        other => panic!("expected candlestick trace, got {other:?}"),
    }
}

#[test]
fn ohlc_keeps_all_four_columns() {
    let spec = chart::build(ChartKind::Ohlc, &sample_series(), "MSFT").unwrap();
    match spec.trace {
        Trace::Ohlc {
            x,
            open,
            high,
            low,
            close,
        } => {
            assert_eq!(x.len(), 3);
            assert_eq!(open.len(), 3);
            assert_eq!(high.len(), 3);
            assert_eq!(low.len(), 3);
            assert_eq!(close.len(), 3);
        }
        other => panic!("expected ohlc trace, got {other:?}"),
    }
}

#[test]
fn low_selection_yields_the_low_column() {
    let series = sample_series();
    let lows: Vec<_> = series.candles().iter().map(|c| c.low).collect();
    let spec = chart::build(ChartKind::Low, &series, "GOOG").unwrap();
    match spec.trace {
        Trace::Line { name, y, .. } => {
            assert_eq!(name, "Low");
            assert_eq!(y, lows);
        }
        other => panic!("expected line trace, got {other:?}"),
    }
}

#[test]
fn high_selection_yields_the_high_column() {
    let series = sample_series();
    let highs: Vec<_> = series.candles().iter().map(|c| c.high).collect();
    let spec = chart::build(ChartKind::High, &series, "GOOG").unwrap();
    match spec.trace {
        Trace::Line { name, y, .. } => {
            assert_eq!(name, "High");
            assert_eq!(y, highs);
        }
        other => panic!("expected line trace, got {other:?}"),
    }
}

#[test]
fn every_kind_builds_exactly_one_trace() {
    let series = series_with(2, 10, 11);
    for kind in ChartKind::ALL {
        let spec = chart::build(kind, &series, "TSLA").unwrap();
        assert_eq!(spec.title, "TSLA");
        assert_eq!(spec.trace.len(), 1);
    }
}

#[test]
fn empty_series_is_an_explicit_no_data_state() {
    let err = chart::build(ChartKind::Candlestick, &PriceSeries::default(), "ZZZZ").unwrap_err();
    assert!(matches!(err, DashError::NoData { .. }));
}
