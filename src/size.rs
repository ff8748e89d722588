use crate::error::SplitError;

/// Largest PDF accepted as input.
pub const MAX_FILE_SIZE_BYTES: u64 = 500 * 1024 * 1024;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte count, e.g. "1.50 KB". Plain bytes have no decimals.
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

pub fn check_file_size(bytes: u64) -> Result<(), SplitError> {
    if bytes > MAX_FILE_SIZE_BYTES {
        return Err(SplitError::FileTooLarge {
            size: bytes,
            limit: format_file_size(MAX_FILE_SIZE_BYTES),
        });
    }
    Ok(())
}
