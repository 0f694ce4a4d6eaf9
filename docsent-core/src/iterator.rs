//! Sentence iterators over annotated document collections
//!
//! [`AnnotatedSentenceIterator`] advances a [`DocumentReader`], runs each
//! document through a shared [`AnnotationEngine`](crate::AnnotationEngine)
//! and hands out the resulting sentences one at a time.
//!
//! Three locks are involved and they are always taken in the same order:
//! sentence buffer, then document reader, then annotation engine. The reader
//! lock is released before the engine lock is taken. The buffer lock is held
//! while a document is annotated, so `has_next` and `state` on other threads
//! wait for that annotation to finish.

use crate::annotator::{shared, Pipeline, SharedEngine};
use crate::config::DocsentConfig;
use crate::error::{IteratorError, ReadError, Result};
use crate::preprocess::SentencePreProcessor;
use crate::reader::{CollectionSource, DocumentReader, FileSource, StringCollectionReader};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Pull-based stream of sentences
///
/// `next_sentence` distinguishes three outcomes:
/// - `Ok(Some(sentence))` with a non-empty sentence
/// - `Ok(Some(String::new()))`, a placeholder for a document that could not
///   be read; iteration continues with the next call
/// - `Ok(None)`, the end of the stream
pub trait SentenceIterator: Send + Sync {
    /// Next sentence, a placeholder, or `None` once every document is consumed
    fn next_sentence(&self) -> Result<Option<String>>;

    /// Whether `next_sentence` can return anything but `None`
    fn has_next(&self) -> bool;

    /// Restart from the first document
    fn reset(&self) -> Result<()>;

    /// Release held resources; later calls behave as if exhausted until reset
    fn finish(&self) {}

    /// Currently installed pre-processor
    fn pre_processor(&self) -> Option<Arc<dyn SentencePreProcessor>>;

    /// Install or remove the pre-processor
    fn set_pre_processor(&mut self, pre_processor: Option<Arc<dyn SentencePreProcessor>>);

    /// Drain the iterator as a std iterator, skipping placeholders
    fn sentences(&self) -> Sentences<'_, Self>
    where
        Self: Sized,
    {
        Sentences::new(self)
    }
}

/// Std iterator adapter returned by [`SentenceIterator::sentences`]
///
/// Placeholders are skipped. The adapter is fused after the end of the
/// stream or the first error.
pub struct Sentences<'a, I: ?Sized> {
    inner: &'a I,
    done: bool,
}

impl<'a, I: SentenceIterator + ?Sized> Sentences<'a, I> {
    /// Wrap a sentence iterator
    pub fn new(inner: &'a I) -> Self {
        Self { inner, done: false }
    }
}

impl<I: SentenceIterator + ?Sized> Iterator for Sentences<'_, I> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.inner.next_sentence() {
                Ok(Some(sentence)) if sentence.is_empty() => continue,
                Ok(Some(sentence)) => return Some(Ok(sentence)),
                Ok(None) => self.done = true,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

/// Observable iteration state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// Nothing consumed since construction or the last reset
    Uninitialized,
    /// Sentences of the current document are waiting
    BufferHasItems,
    /// Buffer is empty but documents (or a placeholder) remain
    BufferEmptyReaderHasMore,
    /// Nothing left
    Exhausted,
}

/// Result parked by the read-ahead until the next call
#[derive(Debug)]
enum Pending {
    Placeholder,
    Failure(IteratorError),
}

/// Outcome of pulling documents until one yields sentences
#[derive(Debug)]
enum Fill {
    Loaded,
    Recoverable(ReadError),
    Drained,
}

#[derive(Debug, Default)]
struct SentenceBuffer {
    sentences: VecDeque<String>,
    initialized: bool,
    pending: Option<Pending>,
}

/// Sentence iterator backed by a document reader and an annotation engine
///
/// A document that yields no sentences is skipped. A document that cannot
/// be read produces a single empty-string placeholder and iteration goes on.
/// Annotation failures are returned as errors.
///
/// Once the last buffered sentence is handed out the buffer is refilled
/// immediately, so [`has_next`](SentenceIterator::has_next) turns `false`
/// as soon as the remaining documents are known to hold no sentences.
pub struct AnnotatedSentenceIterator {
    source: Box<dyn CollectionSource>,
    reader: Mutex<Box<dyn DocumentReader>>,
    engine: SharedEngine,
    buffer: Mutex<SentenceBuffer>,
    pre_processor: Option<Arc<dyn SentencePreProcessor>>,
}

impl std::fmt::Debug for AnnotatedSentenceIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotatedSentenceIterator")
            .field("source", &self.source.describe())
            .field("state", &self.state())
            .field("pre_processor", &self.pre_processor.is_some())
            .finish()
    }
}

impl AnnotatedSentenceIterator {
    /// Create an iterator over `source` using `engine`
    pub fn new<S: CollectionSource + 'static>(source: S, engine: SharedEngine) -> Result<Self> {
        Self::from_parts(Box::new(source), engine, None)
    }

    /// Create an iterator that pre-processes every sentence
    pub fn with_pre_processor<S, P>(
        source: S,
        engine: SharedEngine,
        pre_processor: P,
    ) -> Result<Self>
    where
        S: CollectionSource + 'static,
        P: SentencePreProcessor + 'static,
    {
        Self::from_parts(Box::new(source), engine, Some(Arc::new(pre_processor)))
    }

    /// Iterator over the file or directory at `path` with the default
    /// tokenizer and sentence segmenter
    pub fn create_with_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create_with_config(path, &DocsentConfig::default())
    }

    /// Like [`create_with_path`](Self::create_with_path) with explicit settings
    pub fn create_with_config<P: AsRef<Path>>(path: P, config: &DocsentConfig) -> Result<Self> {
        let source = FileSource::with_config(path.as_ref(), config.reader.clone());
        let engine = shared(Pipeline::default_sentence_pipeline(&config.pipeline));
        Self::new(source, engine)
    }

    /// Fluent construction
    pub fn builder() -> AnnotatedSentenceIteratorBuilder {
        AnnotatedSentenceIteratorBuilder::default()
    }

    fn from_parts(
        source: Box<dyn CollectionSource>,
        engine: SharedEngine,
        pre_processor: Option<Arc<dyn SentencePreProcessor>>,
    ) -> Result<Self> {
        let reader = source.open()?;
        log::debug!("Opened document reader for {}", source.describe());

        Ok(Self {
            source,
            reader: Mutex::new(reader),
            engine,
            buffer: Mutex::new(SentenceBuffer::default()),
            pre_processor,
        })
    }

    /// Engine shared with this iterator
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Current position in the iteration state machine
    pub fn state(&self) -> IteratorState {
        let buffer = self.lock_buffer();
        if !buffer.initialized {
            IteratorState::Uninitialized
        } else if !buffer.sentences.is_empty() {
            IteratorState::BufferHasItems
        } else if buffer.pending.is_some() || self.lock_reader().has_next() {
            IteratorState::BufferEmptyReaderHasMore
        } else {
            IteratorState::Exhausted
        }
    }

    fn lock_buffer(&self) -> MutexGuard<'_, SentenceBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_reader(&self) -> MutexGuard<'_, Box<dyn DocumentReader>> {
        self.reader.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pull documents until one yields sentences or the reader runs dry
    fn fill(&self, buffer: &mut SentenceBuffer) -> Result<Fill> {
        buffer.initialized = true;

        let mut document = self
            .engine
            .lock()
            .map_err(|_| IteratorError::Poisoned("annotation engine"))?
            .new_document();

        loop {
            {
                let mut reader = self.lock_reader();
                if !reader.has_next() {
                    return Ok(Fill::Drained);
                }
                document.reset();
                if let Err(err) = reader.get_next(&mut document) {
                    return Ok(Fill::Recoverable(err));
                }
            }

            self.engine
                .lock()
                .map_err(|_| IteratorError::Poisoned("annotation engine"))?
                .process(&mut document)?;

            let sentences = document.sentence_texts()?;
            let uri = document.uri().unwrap_or("<unnamed>");
            if sentences.is_empty() {
                log::trace!("Skipping {uri}: no sentences");
                continue;
            }

            log::debug!("Loaded {} sentences from {uri}", sentences.len());
            buffer.sentences.extend(sentences);
            return Ok(Fill::Loaded);
        }
    }

    /// Refill right after the buffer ran empty, parking anything that is
    /// not a plain success for the next call
    fn read_ahead(&self, buffer: &mut SentenceBuffer) {
        match self.fill(buffer) {
            Ok(Fill::Loaded) | Ok(Fill::Drained) => {}
            Ok(Fill::Recoverable(err)) => {
                self.warn_read_failure(&err);
                buffer.pending = Some(Pending::Placeholder);
            }
            Err(err) => buffer.pending = Some(Pending::Failure(err)),
        }
    }

    fn warn_read_failure(&self, err: &ReadError) {
        log::warn!(
            "Failed to read next document from {}: {err}; returning an empty placeholder",
            self.source.describe()
        );
    }

    fn apply_pre_processor(&self, sentence: String) -> String {
        match &self.pre_processor {
            Some(pre_processor) => pre_processor.pre_process(&sentence),
            None => sentence,
        }
    }
}

impl SentenceIterator for AnnotatedSentenceIterator {
    fn next_sentence(&self) -> Result<Option<String>> {
        let sentence = {
            let mut buffer = self.lock_buffer();

            match buffer.pending.take() {
                Some(Pending::Placeholder) => return Ok(Some(String::new())),
                Some(Pending::Failure(err)) => return Err(err),
                None => {}
            }

            if buffer.sentences.is_empty() {
                match self.fill(&mut buffer)? {
                    Fill::Loaded => {}
                    Fill::Drained => return Ok(None),
                    Fill::Recoverable(err) => {
                        self.warn_read_failure(&err);
                        return Ok(Some(String::new()));
                    }
                }
            }

            let Some(sentence) = buffer.sentences.pop_front() else {
                return Ok(None);
            };
            if buffer.sentences.is_empty() {
                self.read_ahead(&mut buffer);
            }
            sentence
        };

        Ok(Some(self.apply_pre_processor(sentence)))
    }

    fn has_next(&self) -> bool {
        let buffer = self.lock_buffer();
        if buffer.pending.is_some() || !buffer.sentences.is_empty() {
            return true;
        }
        self.lock_reader().has_next()
    }

    fn reset(&self) -> Result<()> {
        let reader = self.source.open()?;

        let mut buffer = self.lock_buffer();
        *self.lock_reader() = reader;
        *buffer = SentenceBuffer::default();

        log::debug!("Reset document reader for {}", self.source.describe());
        Ok(())
    }

    fn finish(&self) {
        let mut buffer = self.lock_buffer();
        *self.lock_reader() = Box::new(StringCollectionReader::empty());
        buffer.sentences.clear();
        buffer.pending = None;
        buffer.initialized = true;
    }

    fn pre_processor(&self) -> Option<Arc<dyn SentencePreProcessor>> {
        self.pre_processor.clone()
    }

    fn set_pre_processor(&mut self, pre_processor: Option<Arc<dyn SentencePreProcessor>>) {
        self.pre_processor = pre_processor;
    }
}

/// Builder for [`AnnotatedSentenceIterator`]
///
/// Either a source or a path is required. Without an explicit engine the
/// default sentence pipeline is built from the configuration.
#[derive(Default)]
pub struct AnnotatedSentenceIteratorBuilder {
    source: Option<Box<dyn CollectionSource>>,
    path: Option<PathBuf>,
    engine: Option<SharedEngine>,
    pre_processor: Option<Arc<dyn SentencePreProcessor>>,
    config: DocsentConfig,
}

impl AnnotatedSentenceIteratorBuilder {
    /// Read documents from a custom source
    pub fn source<S: CollectionSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Read documents from a file or directory
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use an existing (possibly shared) engine
    pub fn engine(mut self, engine: SharedEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Pre-process every sentence
    pub fn pre_processor<P: SentencePreProcessor + 'static>(mut self, pre_processor: P) -> Self {
        self.pre_processor = Some(Arc::new(pre_processor));
        self
    }

    /// Reader and pipeline settings
    pub fn config(mut self, config: DocsentConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the iterator
    pub fn build(self) -> Result<AnnotatedSentenceIterator> {
        let source: Box<dyn CollectionSource> = match (self.source, self.path) {
            (Some(_), Some(_)) => {
                return Err(IteratorError::Builder(
                    "set either a source or a path, not both".to_string(),
                ))
            }
            (Some(source), None) => source,
            (None, Some(path)) => Box::new(FileSource::with_config(path, self.config.reader)),
            (None, None) => {
                return Err(IteratorError::Builder(
                    "a source or a path is required".to_string(),
                ))
            }
        };

        let engine = self
            .engine
            .unwrap_or_else(|| shared(Pipeline::default_sentence_pipeline(&self.config.pipeline)));

        AnnotatedSentenceIterator::from_parts(source, engine, self.pre_processor)
    }
}
