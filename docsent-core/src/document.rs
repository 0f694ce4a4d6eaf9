//! Per-document container shared between readers and annotators

use crate::error::AnnotationError;
use serde::{Deserialize, Serialize};

/// Byte range into a document's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte (inclusive)
    pub start: usize,
    /// End byte (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no text
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A document read from a corpus together with its annotation layers
///
/// Readers fill in the text, annotators add token and sentence spans.
/// A document can be [`reset`](Document::reset) and reused for the next
/// read instead of allocating a fresh one.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    uri: Option<String>,
    tokens: Vec<Span>,
    sentences: Vec<Span>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding the given text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Raw document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, dropping annotations that referred to the old one
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.tokens.clear();
        self.sentences.clear();
    }

    /// Where the text came from, if known
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Record where the text came from
    pub fn set_uri<S: Into<String>>(&mut self, uri: S) {
        self.uri = Some(uri.into());
    }

    /// Token layer
    pub fn tokens(&self) -> &[Span] {
        &self.tokens
    }

    /// Replace the token layer
    pub fn set_tokens(&mut self, tokens: Vec<Span>) {
        self.tokens = tokens;
    }

    /// Sentence layer
    pub fn sentences(&self) -> &[Span] {
        &self.sentences
    }

    /// Replace the sentence layer
    pub fn set_sentences(&mut self, sentences: Vec<Span>) {
        self.sentences = sentences;
    }

    /// Text covered by a span, or `None` if the span is not valid for this text
    pub fn covered_text(&self, span: &Span) -> Option<&str> {
        if span.start > span.end {
            return None;
        }
        self.text.get(span.start..span.end)
    }

    /// Covered text of every sentence, in document order
    pub fn sentence_texts(&self) -> Result<Vec<String>, AnnotationError> {
        self.sentences
            .iter()
            .map(|span| {
                self.covered_text(span)
                    .map(str::to_string)
                    .ok_or(AnnotationError::InvalidSpan {
                        start: span.start,
                        end: span.end,
                        len: self.text.len(),
                    })
            })
            .collect()
    }

    /// Whether the text holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear text, URI and annotations for reuse
    pub fn reset(&mut self) {
        self.text.clear();
        self.uri = None;
        self.tokens.clear();
        self.sentences.clear();
    }
}
