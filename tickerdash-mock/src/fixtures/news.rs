use chrono::{Duration, TimeZone, Utc};
use tickerdash_core::{NewsArticle, NewsRequest};

/// Scripted headlines with a spread of positive, negative, and zero scores.
const STORIES: &[(&str, &str, f64, f64)] = &[
    ("{S} beats quarterly estimates", "Strong demand lifts revenue above forecasts.", 0.6, 0.5),
    ("{S} shares slide on guidance cut", "Weak outlook disappoints investors.", -0.4, -0.5),
    ("{S} announces annual developer event", "Dates and venue confirmed for the conference.", 0.0, 0.0),
    ("{S} unveils new product line", "Analysts praise the upgraded lineup.", 0.5, 0.4),
    ("Regulators open inquiry into {S}", "Probe adds uncertainty for the stock.", -0.3, -0.6),
    ("{S} expands into new markets", "Growth plan targets three regions.", 0.3, 0.2),
    ("{S} supplier reports delays", "Component shortage may hit shipments.", -0.2, -0.3),
    ("{S} declares quarterly dividend", "Payout unchanged from last quarter.", 0.0, 0.1),
    ("{S} buyback program extended", "Board authorizes additional repurchases.", 0.4, 0.3),
    ("Lawsuit filed against {S}", "Plaintiffs allege patent infringement.", -0.5, -0.4),
    ("{S} hires new chief financial officer", "Appointment effective next month.", 0.0, 0.0),
    ("{S} tops analyst price targets", "Upgrades follow the earnings beat.", 0.7, 0.6),
];

/// Deterministic article list for a symbol, newest first, bounded by `req.count`.
///
/// `THIN` returns only three articles regardless of the requested count.
pub fn by_symbol(s: &str, req: &NewsRequest) -> Vec<NewsArticle> {
    let available = if s == "THIN" { 3 } else { STORIES.len() };
    let newest = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
    STORIES
        .iter()
        .take(available.min(req.count))
        .enumerate()
        .map(|(i, (title, summary, st, ss))| NewsArticle {
            published: newest - Duration::hours(6 * i as i64),
            title: title.replace("{S}", s),
            summary: (*summary).to_string(),
            sentiment_title: *st,
            sentiment_summary: *ss,
        })
        .collect()
}
