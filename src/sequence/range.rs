use crate::error::RangeError;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

/// One range token: a bare page number (`7`) or an inclusive span (`3-9`).
static RANGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:-[0-9]+)?$").expect("valid range token regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(u32),
    Span { start: u32, end: u32 },
}

impl RangeToken {
    /// Parse a single trimmed token like "5" or "1-5"
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        if !RANGE_TOKEN.is_match(s) {
            return Err(RangeError::Format(s.to_string()));
        }

        match s.split_once('-') {
            Some((start, end)) => {
                // Overflowing bounds are treated like any other unusable span.
                let start: u32 = start
                    .parse()
                    .map_err(|_| RangeError::Order(s.to_string()))?;
                let end: u32 = end.parse().map_err(|_| RangeError::Order(s.to_string()))?;

                if start > end {
                    return Err(RangeError::Order(s.to_string()));
                }

                Ok(RangeToken::Span { start, end })
            }
            None => s
                .parse()
                .map(RangeToken::Single)
                .map_err(|_| RangeError::Format(s.to_string())),
        }
    }

    /// Expand into page numbers in ascending order
    pub fn expand(&self) -> Vec<u32> {
        match *self {
            RangeToken::Single(page) => vec![page],
            RangeToken::Span { start, end } => (start..=end).collect(),
        }
    }

    /// Largest page of this token not in `excluded`. Walks down from the top,
    /// so a wide span costs at most `excluded.len() + 1` steps.
    pub fn highest_excluding(&self, excluded: &BTreeSet<u32>) -> Option<u32> {
        match *self {
            RangeToken::Single(page) => (!excluded.contains(&page)).then_some(page),
            RangeToken::Span { start, end } => {
                (start..=end).rev().find(|page| !excluded.contains(page))
            }
        }
    }
}

/// Split a range list into parsed tokens without expanding any span
pub fn parse_range_tokens(s: &str) -> Result<Vec<RangeToken>, RangeError> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(RangeToken::parse)
        .collect()
}

/// Parse a comma-separated range list like "1-5,8,10-12" into page numbers.
///
/// Tokens are expanded in the order written. A number that already appeared
/// earlier is dropped, so `"3,1-3,5"` gives `[3, 1, 2, 5]`. Blank input gives
/// an empty sequence; rejecting that is the validator's job.
pub fn parse_ranges(s: &str) -> Result<Vec<u32>, RangeError> {
    let mut seen = HashSet::new();
    let mut pages = Vec::new();

    for token in parse_range_tokens(s)? {
        for page in token.expand() {
            if seen.insert(page) {
                pages.push(page);
            }
        }
    }

    Ok(pages)
}
