use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company fundamentals for a ticker.
///
/// Every field is required: connectors must fail with `DashError::Data` when
/// the upstream mapping lacks one of them, rather than substituting a
/// default. A constructed value therefore always renders a complete report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Full company name.
    pub name: String,
    /// GICS-style sector, e.g. "Technology".
    pub sector: String,
    /// Industry within the sector.
    pub industry: String,
    /// Country of incorporation.
    pub country: String,
    /// Market capitalization in the listing currency.
    pub market_cap: u64,
    /// Forward price-to-earnings ratio.
    pub forward_pe: Decimal,
    /// Trailing twelve-month earnings per share.
    pub trailing_eps: Decimal,
    /// Dividend yield as a fraction (0.0044 for 0.44%).
    pub dividend_yield: Decimal,
}
