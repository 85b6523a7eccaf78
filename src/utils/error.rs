use std::io;
use thiserror::Error;

/// Common result type for quillpress operations
pub type QuillResult<T> = Result<T, QuillError>;

/// Error types for quillpress operations
#[derive(Debug, Error)]
pub enum QuillError {
    /// Filename does not look like `YYYY-MM-DD-slug.ext`
    #[error("Invalid post filename: {name}")]
    InvalidFilename { name: String },

    /// Date in a filename or in front matter is not a calendar date
    #[error("Post {file} does not have a valid date: {value}")]
    InvalidDate { file: String, value: String },

    /// Front matter could not be parsed
    #[error("Front matter error in {file}: {message}")]
    FrontMatter { file: String, message: String },

    /// Template processing error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl QuillError {
    pub(crate) fn invalid_date(file: impl Into<String>, value: impl Into<String>) -> Self {
        QuillError::InvalidDate {
            file: file.into(),
            value: value.into(),
        }
    }
}
