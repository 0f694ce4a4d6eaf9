//! Sentence streams over document corpora
//!
//! Documents come from a [`DocumentReader`], are annotated by an
//! [`AnnotationEngine`] (by default a rule-based tokenizer followed by a
//! sentence segmenter) and their sentences are handed out one at a time by
//! an [`AnnotatedSentenceIterator`].
//!
//! ```no_run
//! use docsent_core::{AnnotatedSentenceIterator, SentenceIterator};
//!
//! let iter = AnnotatedSentenceIterator::create_with_path("corpus/")?;
//! while let Some(sentence) = iter.next_sentence()? {
//!     if sentence.is_empty() {
//!         continue; // unreadable document
//!     }
//!     println!("{sentence}");
//! }
//! # Ok::<(), docsent_core::IteratorError>(())
//! ```

#![warn(missing_docs)]

pub mod annotator;
pub mod config;
pub mod document;
pub mod error;
pub mod iterator;
pub mod preprocess;
pub mod reader;

// Re-export key types
pub use annotator::{
    shared, AnnotationEngine, Annotator, Pipeline, SentenceAnnotator, SharedEngine,
    TokenizerAnnotator,
};
pub use config::{DocsentConfig, PipelineConfig, ReaderConfig};
pub use document::{Document, Span};
pub use error::{AnnotationError, ConfigError, IteratorError, ReadError, ReaderError, Result};
pub use iterator::{
    AnnotatedSentenceIterator, AnnotatedSentenceIteratorBuilder, IteratorState, SentenceIterator,
    Sentences,
};
pub use preprocess::{Chain, CollapseWhitespace, LowerCase, SentencePreProcessor, UpperCase};
pub use reader::{
    CollectionSource, DocumentReader, FileCollectionReader, FileSource, StringCollectionReader,
    StringSource,
};
