//! Document readers and the sources that build them
//!
//! A [`DocumentReader`] is a one-shot cursor over a corpus. A
//! [`CollectionSource`] remembers where the corpus lives so a fresh reader
//! can be opened whenever iteration restarts.

pub mod file;
pub mod string;

pub use file::{FileCollectionReader, FileSource};
pub use string::{StringCollectionReader, StringSource};

use crate::document::Document;
use crate::error::{ReadError, ReaderError};

/// Stateful cursor over the documents of a corpus
pub trait DocumentReader: Send {
    /// Whether another document can be read
    fn has_next(&self) -> bool;

    /// Read the next document into `document`
    ///
    /// The reader advances even when reading fails, so the next call moves
    /// on to the following document.
    fn get_next(&mut self, document: &mut Document) -> Result<(), ReadError>;
}

impl<R: DocumentReader + ?Sized> DocumentReader for Box<R> {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn get_next(&mut self, document: &mut Document) -> Result<(), ReadError> {
        (**self).get_next(document)
    }
}

/// Location of a corpus that can be opened any number of times
pub trait CollectionSource: Send + Sync {
    /// Build a reader positioned at the first document
    fn open(&self) -> Result<Box<dyn DocumentReader>, ReaderError>;

    /// Human readable description for log messages
    fn describe(&self) -> String {
        "custom source".to_string()
    }
}

impl<F> CollectionSource for F
where
    F: Fn() -> Result<Box<dyn DocumentReader>, ReaderError> + Send + Sync,
{
    fn open(&self) -> Result<Box<dyn DocumentReader>, ReaderError> {
        self()
    }
}
