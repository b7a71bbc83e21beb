use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use tickerdash_types::{Candle, DashError, PriceSeries, Query};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn candle(day: u32, open: i64, close: i64) -> Candle {
    Candle {
        ts: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        open: Decimal::from(open),
        high: Decimal::from(open.max(close) + 1),
        low: Decimal::from(open.min(close) - 1),
        close: Decimal::from(close),
        volume: Some(1_000),
    }
}

#[test]
fn query_uppercases_and_trims_ticker() {
    let q = Query::new(" aapl ", date(2024, 1, 1), date(2024, 2, 1)).unwrap();
    assert_eq!(q.ticker(), "AAPL");
}

#[test]
fn query_rejects_empty_ticker() {
    let err = Query::new("   ", date(2024, 1, 1), date(2024, 2, 1)).unwrap_err();
    assert!(matches!(err, DashError::InvalidArg(_)));
}

#[test]
fn query_rejects_inverted_range() {
    let err = Query::new("AAPL", date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, DashError::InvalidArg(_)));
}

#[test]
fn default_query_is_aapl_from_2024() {
    let q = Query::default();
    assert_eq!(q.ticker(), "AAPL");
    assert_eq!(q.start(), date(2024, 1, 1));
    assert!(q.end() >= q.start());
}

#[test]
fn series_sorts_ascending() {
    let series = PriceSeries::new(vec![candle(3, 10, 11), candle(1, 9, 10), candle(2, 10, 9)]);
    let ts: Vec<_> = series.candles().iter().map(|c| c.ts).collect();
    let mut sorted = ts.clone();
    sorted.sort();
    assert_eq!(ts, sorted);
    assert_eq!(series.len(), 3);
}

#[test]
fn candle_direction() {
    assert!(candle(1, 10, 12).is_up());
    assert!(candle(1, 10, 10).is_up());
    assert!(!candle(1, 12, 10).is_up());
}
