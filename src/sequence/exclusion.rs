use std::collections::BTreeSet;

/// Parse a comma-separated exclusion list like "2, 4,9".
///
/// Never fails. Each token is read as a leading integer, so `"4a"` counts as 4;
/// tokens without leading digits are skipped. Negative values are skipped too,
/// since no page can carry them.
pub fn parse_exclusions(s: &str) -> BTreeSet<u32> {
    s.split(',').filter_map(|t| leading_integer(t.trim())).collect()
}

fn leading_integer(token: &str) -> Option<u32> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value: u64 = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    u32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_garbage_and_duplicates() {
        let set = parse_exclusions("2, x, 4,4");
        assert_eq!(set, BTreeSet::from([2, 4]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_exclusions("").is_empty());
        assert!(parse_exclusions("   ").is_empty());
        assert!(parse_exclusions(",,").is_empty());
    }

    #[test]
    fn test_leading_integer_prefix() {
        assert_eq!(parse_exclusions("4a, 7 "), BTreeSet::from([4, 7]));
        assert_eq!(parse_exclusions("+3"), BTreeSet::from([3]));
    }

    #[test]
    fn test_no_range_syntax() {
        // "2-4" reads as 2, not as a span
        assert_eq!(parse_exclusions("2-4"), BTreeSet::from([2]));
    }

    #[test]
    fn test_negative_and_huge_values_dropped() {
        assert!(parse_exclusions("-3, 99999999999").is_empty());
    }
}
