/// Zero-padding width for every file name in a run.
///
/// The first token of the range string sets the requested width as typed, so
/// `"01-05"` asks for two digits even though every value fits in one. The
/// widest value in `sequence` is never truncated.
pub fn padding_length(sequence: &[u32], ranges: &str) -> usize {
    let first = ranges.split(',').next().unwrap_or("").trim();

    let requested = if first.is_empty() {
        1
    } else if let Some((start, _)) = first.split_once('-') {
        start.trim().chars().count()
    } else {
        first.chars().count()
    };

    let max_digits = sequence
        .iter()
        .max()
        .map(|&n| digit_count(n))
        .unwrap_or(0);

    requested.max(max_digits).max(1)
}

fn digit_count(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
