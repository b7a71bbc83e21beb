use rust_decimal::Decimal;
use tickerdash_core::CompanyInfo;

pub fn by_symbol(s: &str) -> Option<CompanyInfo> {
    let (name, sector, industry, country, market_cap) = match s {
        "AAPL" => (
            "Apple Inc.",
            "Technology",
            "Consumer Electronics",
            "United States",
            2_900_000_000_000,
        ),
        "MSFT" => (
            "Microsoft Corporation",
            "Technology",
            "Software - Infrastructure",
            "United States",
            3_100_000_000_000,
        ),
        "FAIL" | "TIMEOUT" => ("Unreachable Corp", "Test", "Test", "Nowhere", 0),
        _ => (
            "Generic Corp",
            "Technology",
            "Software",
            "United States",
            10_000_000_000,
        ),
    };
    Some(CompanyInfo {
        name: name.to_string(),
        sector: sector.to_string(),
        industry: industry.to_string(),
        country: country.to_string(),
        market_cap,
        forward_pe: Decimal::new(2750, 2),
        trailing_eps: Decimal::new(641, 2),
        dividend_yield: Decimal::new(44, 4),
    })
}
