//! Layered error types
//!
//! Read failures are recoverable and never escape the iterator as errors.
//! Reader construction, annotation and lock failures are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failure while reading the next document
#[derive(Error, Debug)]
pub enum ReadError {
    /// The reader ran out of documents
    #[error("no more documents to read")]
    Exhausted,

    /// The document could not be read from disk
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document bytes are not valid in the configured encoding
    #[error("{path} is not valid {encoding}")]
    Decode {
        /// Path of the document
        path: PathBuf,
        /// Encoding label the reader was configured with
        encoding: String,
    },
}

/// Failure to build a document reader from its source
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The corpus root does not exist
    #[error("corpus root not found: {0}")]
    NotFound(PathBuf),

    /// The corpus root could not be listed
    #[error("failed to list {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Encoding label not known to the decoder
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// File-name filter is not a valid glob
    #[error("invalid file pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Why the pattern was rejected
        reason: String,
    },
}

/// Fatal failure inside the annotation pipeline
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// An annotator needs a layer that no earlier annotator produced
    #[error("annotator '{annotator}' requires the {layer} layer")]
    MissingLayer {
        /// Name of the annotator that failed
        annotator: &'static str,
        /// Name of the missing layer
        layer: &'static str,
    },

    /// A span does not address valid text in the document
    #[error("span {start}..{end} is outside the document text (length {len})")]
    InvalidSpan {
        /// Span start byte
        start: usize,
        /// Span end byte
        end: usize,
        /// Document length in bytes
        len: usize,
    },

    /// Annotator specific failure
    #[error("annotator '{annotator}' failed: {reason}")]
    Failed {
        /// Name of the annotator that failed
        annotator: &'static str,
        /// Failure description
        reason: String,
    },
}

/// Errors surfaced by sentence iterators
#[derive(Error, Debug)]
pub enum IteratorError {
    /// The document reader could not be (re)built
    #[error("document reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Annotation or sentence extraction failed
    #[error("annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// A thread panicked while holding the engine lock
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    /// The builder was missing a required part
    #[error("invalid iterator configuration: {0}")]
    Builder(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// Configuration path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed into a configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Parsed configuration failed validation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for iterator operations
pub type Result<T> = std::result::Result<T, IteratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = ReadError::Decode {
            path: PathBuf::from("doc.txt"),
            encoding: "UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "doc.txt is not valid UTF-8");
        assert_eq!(ReadError::Exhausted.to_string(), "no more documents to read");
    }

    #[test]
    fn test_iterator_error_from_layers() {
        let err: IteratorError = ReaderError::NotFound(PathBuf::from("/missing")).into();
        assert!(matches!(err, IteratorError::Reader(ReaderError::NotFound(_))));
        assert!(err.to_string().contains("/missing"));

        let err: IteratorError = AnnotationError::MissingLayer {
            annotator: "sentence",
            layer: "token",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "annotation error: annotator 'sentence' requires the token layer"
        );
    }
}
