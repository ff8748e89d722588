/// Rejections raised before any parsing starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a PDF file")]
    MissingFile,

    #[error("Please enter page ranges")]
    MissingRanges,

    #[error("Invalid range format. Use values like '1-5,8,10-12'")]
    InvalidFormat,
}

/// Failures of the range token parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Invalid range segment: {0}")]
    Format(String),

    #[error("Invalid range: {0}")]
    Order(String),
}

/// A single page that could not be extracted. Recorded in the manifest, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page {page} does not exist (document has {page_count} pages)")]
    OutOfBounds { page: u32, page_count: u32 },

    #[error("failed to write page {page}: {source}")]
    Save {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}

/// Anything that aborts a whole run.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("No valid pages to process after applying ranges and exclusions")]
    EmptySequence,

    #[error(
        "Not enough pages. The highest page requested is {highest}, but PDF has only {page_count} pages."
    )]
    InsufficientPages { highest: u32, page_count: u32 },

    #[error("PDF is too large ({size} bytes); the limit is {limit}")]
    FileTooLarge { size: u64, limit: String },

    #[error("failed to load PDF: {0}")]
    Load(#[source] lopdf::Error),

    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
