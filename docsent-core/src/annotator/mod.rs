//! Annotation engines and the default sentence pipeline
//!
//! An [`AnnotationEngine`] turns a document populated by a reader into an
//! annotated one. The bundled [`Pipeline`] runs a list of [`Annotator`]s in
//! order; [`Pipeline::default_sentence_pipeline`] wires the rule-based
//! tokenizer and sentence segmenter.

pub mod sentence;
pub mod tables;
pub mod tokenizer;

pub use sentence::SentenceAnnotator;
pub use tokenizer::TokenizerAnnotator;

use crate::config::PipelineConfig;
use crate::document::Document;
use crate::error::AnnotationError;
use std::sync::{Arc, Mutex};

/// Engine that annotates documents in place
pub trait AnnotationEngine: Send {
    /// Allocate a document ready to be filled by a reader
    fn new_document(&self) -> Document {
        Document::new()
    }

    /// Run the configured annotations over the document
    fn process(&mut self, document: &mut Document) -> Result<(), AnnotationError>;
}

/// Annotation engine shared between several consumers
///
/// Every call to [`AnnotationEngine::process`] must hold the lock.
pub type SharedEngine = Arc<Mutex<dyn AnnotationEngine>>;

/// Wrap an engine for sharing
pub fn shared<E: AnnotationEngine + 'static>(engine: E) -> SharedEngine {
    Arc::new(Mutex::new(engine))
}

/// One step of a pipeline, adding a single annotation layer
pub trait Annotator: Send + Sync {
    /// Short name used in errors
    fn name(&self) -> &'static str;

    /// Annotate the document
    fn process(&self, document: &mut Document) -> Result<(), AnnotationError>;
}

/// Engine running annotators in sequence
#[derive(Default)]
pub struct Pipeline {
    annotators: Vec<Box<dyn Annotator>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("annotators", &self.names())
            .finish()
    }
}

impl Pipeline {
    /// Empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer followed by sentence segmenter
    pub fn default_sentence_pipeline(config: &PipelineConfig) -> Self {
        Self::new()
            .with(TokenizerAnnotator::new(config))
            .with(SentenceAnnotator::new(config))
    }

    /// Append an annotator
    pub fn with<A: Annotator + 'static>(mut self, annotator: A) -> Self {
        self.annotators.push(Box::new(annotator));
        self
    }

    /// Names of the annotators, in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.annotators.iter().map(|a| a.name()).collect()
    }
}

impl AnnotationEngine for Pipeline {
    fn process(&mut self, document: &mut Document) -> Result<(), AnnotationError> {
        for annotator in &self.annotators {
            annotator.process(document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl Annotator for Shout {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn process(&self, document: &mut Document) -> Result<(), AnnotationError> {
            let loud = document.text().to_uppercase();
            document.set_text(loud);
            Ok(())
        }
    }

    #[test]
    fn test_default_pipeline_order() {
        let pipeline = Pipeline::default_sentence_pipeline(&PipelineConfig::default());
        assert_eq!(pipeline.names(), vec!["tokenizer", "sentence"]);
    }

    #[test]
    fn test_pipeline_runs_in_order() {
        let mut pipeline = Pipeline::new()
            .with(Shout)
            .with(TokenizerAnnotator::default())
            .with(SentenceAnnotator::default());
        let mut doc = pipeline.new_document();
        doc.set_text("one. two.");

        pipeline.process(&mut doc).unwrap();
        assert_eq!(doc.sentence_texts().unwrap(), vec!["ONE.", "TWO."]);
    }

    #[test]
    fn test_pipeline_stops_on_error() {
        let mut pipeline = Pipeline::new()
            .with(SentenceAnnotator::default())
            .with(Shout);
        let mut doc = Document::from_text("Untouched.");

        assert!(pipeline.process(&mut doc).is_err());
        assert_eq!(doc.text(), "Untouched.");
    }

    #[test]
    fn test_shared_engine() {
        let engine = shared(Pipeline::default_sentence_pipeline(
            &PipelineConfig::default(),
        ));
        let mut doc = Document::from_text("Hi. Bye.");
        engine.lock().unwrap().process(&mut doc).unwrap();
        assert_eq!(doc.sentences().len(), 2);
    }
}
