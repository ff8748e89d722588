/// Free-form text placed around the page number in every output name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub prefix: String,
    pub suffix: String,
}

/// Left-pad `value` with zeros to at least `width` characters
pub fn pad_number(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// `{prefix}{padded number}{suffix}.pdf`, with prefix and suffix trimmed
pub fn build_file_name(naming: &NamingConfig, sequence_number: u32, padding: usize) -> String {
    format!(
        "{}{}{}.pdf",
        naming.prefix.trim(),
        pad_number(sequence_number, padding),
        naming.suffix.trim()
    )
}
