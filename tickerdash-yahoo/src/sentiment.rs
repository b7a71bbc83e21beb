//! Word-list sentiment scoring.
//!
//! Scores are the net count of positive minus negative words, normalized by
//! the token count, so they land in `[-1.0, 1.0]`. Zero means no sentiment
//! words matched (or empty text). The pipeline only ever inspects the sign.

const POSITIVE: &[&str] = &[
    "beat", "beats", "boost", "boosts", "bullish", "buyback", "climb", "climbs", "exceed",
    "exceeds", "gain", "gains", "growth", "jump", "jumps", "outperform", "outperforms", "praise",
    "profit", "rallies", "rally", "record", "rise", "rises", "soar", "soars", "strong", "surge",
    "surges", "tops", "upbeat", "upgrade", "upgrades", "win", "wins",
];

const NEGATIVE: &[&str] = &[
    "bearish", "concern", "concerns", "cut", "cuts", "decline", "declines", "delay", "delays",
    "disappoint", "disappoints", "downgrade", "downgrades", "drop", "drops", "fall", "falls",
    "fear", "fears", "inquiry", "lawsuit", "loss", "losses", "miss", "misses", "plunge",
    "plunges", "probe", "recall", "risk", "risks", "shortage", "sink", "sinks", "slide",
    "slides", "slump", "slumps", "tumble", "tumbles", "uncertainty", "weak", "worry",
];

/// Score a piece of text.
#[must_use]
pub fn score(text: &str) -> f64 {
    let mut tokens = 0usize;
    let mut net = 0i64;
    for token in text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        tokens += 1;
        let lower = token.to_ascii_lowercase();
        if POSITIVE.binary_search(&lower.as_str()).is_ok() {
            net += 1;
        } else if NEGATIVE.binary_search(&lower.as_str()).is_ok() {
            net -= 1;
        }
    }
    if tokens == 0 {
        0.0
    } else {
        net as f64 / tokens as f64
    }
}
