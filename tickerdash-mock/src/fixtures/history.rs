use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tickerdash_core::{Candle, PriceSeries, Query};

/// Deterministic daily series for the known symbols, clipped to the query range.
///
/// Prices follow a fixed per-symbol walk seeded by the day ordinal, so two
/// runs over the same range always return identical candles. `EMPTY`
/// resolves with zero candles; unknown symbols resolve to `None`.
pub fn by_query(query: &Query) -> Option<PriceSeries> {
    let base = match query.ticker() {
        "AAPL" => 185,
        "MSFT" => 390,
        "GOOG" => 140,
        "TSLA" => 240,
        "EMPTY" | "THIN" | "TIMEOUT" => return Some(PriceSeries::new(vec![])),
        _ => return None,
    };
    Some(build(base, query.start(), query.end()))
}

fn build(base: i64, start: NaiveDate, end: NaiveDate) -> PriceSeries {
    let mut candles = Vec::new();
    let mut day = start;
    while day <= end {
        // Weekdays only, like an exchange calendar.
        if day.weekday().number_from_monday() <= 5 {
            candles.push(candle_for(base, day));
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    PriceSeries::new(candles)
}

fn candle_for(base: i64, day: NaiveDate) -> Candle {
    let wobble = i64::from(day.ordinal() % 7) - 3;
    let open = base + wobble;
    let close = base + i64::from((day.ordinal() + 3) % 7) - 3;
    Candle {
        ts: day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
        open: Decimal::from(open),
        high: Decimal::from(open.max(close) + 2),
        low: Decimal::from(open.min(close) - 2),
        close: Decimal::from(close),
        volume: Some(1_000_000 + u64::from(day.ordinal()) * 1_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tickerdash_core::Query;

    fn query(ticker: &str) -> Query {
        Query::new(
            ticker,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn known_symbol_fills_the_range_with_weekdays() {
        let series = by_query(&query("AAPL")).unwrap();
        assert!(!series.is_empty());
        assert!(series.candles().iter().all(|c| c.high >= c.low));
    }

    #[test]
    fn two_runs_are_identical() {
        assert_eq!(by_query(&query("MSFT")), by_query(&query("MSFT")));
    }

    #[test]
    fn empty_symbol_has_no_candles() {
        assert!(by_query(&query("EMPTY")).unwrap().is_empty());
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert!(by_query(&query("ZZZZ")).is_none());
    }
}
