use crate::sequence::NamingConfig;
use std::path::PathBuf;

pub const DEFAULT_ZIP_NAME: &str = "split_files";

/// Everything the user supplies for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub file: Option<PathBuf>,
    pub ranges: String,
    pub exclusions: String,
    pub naming: NamingConfig,
    pub zip_name: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            file: None,
            ranges: String::new(),
            exclusions: String::new(),
            naming: NamingConfig::default(),
            zip_name: DEFAULT_ZIP_NAME.to_string(),
        }
    }
}

impl SplitConfig {
    /// Archive file name, falling back to the default when the base name is blank
    pub fn archive_file_name(&self) -> String {
        let base = self.zip_name.trim();
        let base = if base.is_empty() { DEFAULT_ZIP_NAME } else { base };
        format!("{}.zip", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_name() {
        let mut config = SplitConfig::default();
        assert_eq!(config.archive_file_name(), "split_files.zip");

        config.zip_name = "  chapters ".to_string();
        assert_eq!(config.archive_file_name(), "chapters.zip");

        config.zip_name = "   ".to_string();
        assert_eq!(config.archive_file_name(), "split_files.zip");
    }
}
