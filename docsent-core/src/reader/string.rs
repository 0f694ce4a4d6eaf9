//! In-memory corpora

use super::{CollectionSource, DocumentReader};
use crate::document::Document;
use crate::error::{ReadError, ReaderError};
use std::collections::VecDeque;

/// Reader over documents held in memory
#[derive(Debug, Clone, Default)]
pub struct StringCollectionReader {
    documents: VecDeque<String>,
    position: usize,
}

impl StringCollectionReader {
    /// Create a reader over the given documents, in order
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
            position: 0,
        }
    }

    /// Reader with no documents
    pub fn empty() -> Self {
        Self::default()
    }

    /// Documents not read yet
    pub fn remaining(&self) -> usize {
        self.documents.len()
    }
}

impl DocumentReader for StringCollectionReader {
    fn has_next(&self) -> bool {
        !self.documents.is_empty()
    }

    fn get_next(&mut self, document: &mut Document) -> Result<(), ReadError> {
        let text = self.documents.pop_front().ok_or(ReadError::Exhausted)?;
        document.set_text(text);
        document.set_uri(format!("memory:{}", self.position));
        self.position += 1;
        Ok(())
    }
}

/// Source that opens a [`StringCollectionReader`] over a fixed document list
#[derive(Debug, Clone, Default)]
pub struct StringSource {
    documents: Vec<String>,
}

impl StringSource {
    /// Create a source over the given documents
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }
}

impl CollectionSource for StringSource {
    fn open(&self) -> Result<Box<dyn DocumentReader>, ReaderError> {
        Ok(Box::new(StringCollectionReader::new(
            self.documents.iter().cloned(),
        )))
    }

    fn describe(&self) -> String {
        format!("{} in-memory documents", self.documents.len())
    }
}
