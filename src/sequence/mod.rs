//! Turns the user's range, exclusion and naming text into the ordered list of
//! pages to extract and the file name each one gets.

pub mod exclusion;
pub mod filename;
pub mod padding;
pub mod range;
pub mod validate;

pub use exclusion::parse_exclusions;
pub use filename::{build_file_name, NamingConfig};
pub use padding::padding_length;
pub use range::{parse_range_tokens, parse_ranges};
pub use validate::validate;

use crate::error::RangeError;

/// Pages from `ranges` minus those listed in `exclusions`, in range order
pub fn build_sequence(ranges: &str, exclusions: &str) -> Result<Vec<u32>, RangeError> {
    let excluded = parse_exclusions(exclusions);
    let mut sequence = parse_ranges(ranges)?;
    sequence.retain(|page| !excluded.contains(page));
    Ok(sequence)
}

/// Largest page [`build_sequence`] would return, found without expanding any span.
/// `None` when exclusions leave nothing.
pub fn highest_page(ranges: &str, exclusions: &str) -> Result<Option<u32>, RangeError> {
    let excluded = parse_exclusions(exclusions);
    Ok(parse_range_tokens(ranges)?
        .iter()
        .filter_map(|token| token.highest_excluding(&excluded))
        .max())
}
