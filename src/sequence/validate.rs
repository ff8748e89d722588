use crate::config::SplitConfig;
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// A whole range list with whitespace already stripped: one or more
/// `N` / `N-M` tokens joined by single commas. Empty tokens, dangling dashes
/// (`"01-"`) and trailing commas do not match.
static RANGE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:-[0-9]+)?(?:,[0-9]+(?:-[0-9]+)?)*$").expect("valid range list regex")
});

/// Pre-flight check of a run's input, stopping at the first problem.
///
/// This is only a shape check. `start <= end` and friends are left to
/// [`parse_ranges`](super::parse_ranges).
pub fn validate(config: &SplitConfig) -> Result<(), ValidationError> {
    let has_file = config
        .file
        .as_ref()
        .is_some_and(|path| !path.as_os_str().is_empty());
    if !has_file {
        return Err(ValidationError::MissingFile);
    }

    if config.ranges.trim().is_empty() {
        return Err(ValidationError::MissingRanges);
    }

    let compact: String = config
        .ranges
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !RANGE_LIST.is_match(&compact) {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(())
}
