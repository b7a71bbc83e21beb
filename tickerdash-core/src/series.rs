//! Shared helpers for candle sanity checks at the connector boundary.

use tickerdash_types::{Candle, DashError};

/// Ensure a candle's high/low bracket is coherent.
///
/// Providers occasionally emit rows where the reported high sits below the
/// low; such rows indicate a broken upstream payload rather than a quirk
/// worth passing through.
///
/// # Errors
/// Returns `Err(DashError::Data)` when `high < low`.
pub fn ensure_candle_bounds(c: &Candle) -> Result<(), DashError> {
    if c.high < c.low {
        return Err(DashError::Data(format!(
            "candle at {} has high {} below low {}",
            c.ts, c.high, c.low
        )));
    }
    Ok(())
}
