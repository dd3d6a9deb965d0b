use thiserror::Error;

/// The result type for the `jltags` crate.
pub type Result<T> = std::result::Result<T, JlTagsError>;

/// The error type for the `jltags` crate.
///
/// Scanning itself never fails. Errors only come from the collaborators around the scanner,
/// i.e. the line source and the configuration loader.
#[derive(Error, Debug)]
pub struct JlTagsError {
    /// The source of the error.
    pub source: Box<JlTagsErrorKind>,
}

impl JlTagsError {
    /// Create a new `JlTagsError`.
    pub fn new(kind: JlTagsErrorKind) -> Self {
        JlTagsError {
            source: Box::new(kind),
        }
    }
}

impl std::fmt::Display for JlTagsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum JlTagsErrorKind {
    /// A std::io error occurred while reading lines.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A scanner configuration could not be deserialized.
    #[cfg(feature = "serde")]
    #[error("Invalid scanner configuration: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<std::io::Error> for JlTagsError {
    fn from(error: std::io::Error) -> Self {
        JlTagsError::new(JlTagsErrorKind::IoError(error))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for JlTagsError {
    fn from(error: serde_json::Error) -> Self {
        JlTagsError::new(JlTagsErrorKind::JsonError(error))
    }
}
