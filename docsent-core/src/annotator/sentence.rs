//! Rule-based sentence segmenter writing the sentence layer

use super::tables::{AbbrevTable, CharTable};
use super::Annotator;
use crate::config::PipelineConfig;
use crate::document::{Document, Span};
use crate::error::AnnotationError;

/// Groups tokens into sentences
///
/// Requires the token layer. A sentence ends after a terminator token
/// unless it is a period attached to an abbreviation or an initial.
/// Closing quotes and brackets glued to the terminator stay with the
/// sentence. Tokens left over at the end of the document form a final
/// sentence even without a terminator.
#[derive(Debug, Clone)]
pub struct SentenceAnnotator {
    terminators: CharTable,
    closing: CharTable,
    abbreviations: AbbrevTable,
    initials_are_abbreviations: bool,
    split_on_blank_lines: bool,
}

impl Default for SentenceAnnotator {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

impl SentenceAnnotator {
    /// Create a segmenter from pipeline rules
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            terminators: CharTable::new(config.terminators.iter().copied()),
            closing: CharTable::new(config.closing.iter().copied()),
            abbreviations: AbbrevTable::new(&config.abbreviations),
            initials_are_abbreviations: config.initials_are_abbreviations,
            split_on_blank_lines: config.split_on_blank_lines,
        }
    }

    /// Sentence spans over an already tokenized text
    pub fn segment(&self, text: &str, tokens: &[Span]) -> Vec<Span> {
        let token_text = |idx: usize| &text[tokens[idx].start..tokens[idx].end];

        let mut sentences = Vec::new();
        let mut first: Option<usize> = None;
        let mut i = 0;

        while i < tokens.len() {
            if let Some(start) = first {
                let gap = &text[tokens[i - 1].end..tokens[i].start];
                if self.split_on_blank_lines && is_blank_line(gap) {
                    sentences.push(Span::new(tokens[start].start, tokens[i - 1].end));
                    first = None;
                }
            }
            let start = *first.get_or_insert(i);

            if self.terminators.contains_all(token_text(i))
                && !self.is_abbreviation_period(text, tokens, i)
            {
                let mut last = i;
                while last + 1 < tokens.len()
                    && tokens[last + 1].start == tokens[last].end
                    && self.closing.contains_all(token_text(last + 1))
                {
                    last += 1;
                }

                sentences.push(Span::new(tokens[start].start, tokens[last].end));
                first = None;
                i = last + 1;
                continue;
            }

            i += 1;
        }

        if let (Some(start), Some(last)) = (first, tokens.last()) {
            sentences.push(Span::new(tokens[start].start, last.end));
        }

        sentences
    }

    /// A lone period glued to an abbreviation or an initial does not end a sentence
    fn is_abbreviation_period(&self, text: &str, tokens: &[Span], idx: usize) -> bool {
        if idx == 0 || &text[tokens[idx].start..tokens[idx].end] != "." {
            return false;
        }

        let prev = tokens[idx - 1];
        if prev.end != tokens[idx].start {
            return false;
        }

        let word = &text[prev.start..prev.end];
        if self.abbreviations.contains(word) {
            return true;
        }

        self.initials_are_abbreviations && is_initial(text, tokens, idx - 1)
    }
}

/// A single capital letter followed by a period inside a name, as in
/// `J. R. R. Tolkien` or `John F. Kennedy`
///
/// The next token must start with a capital, and either be another initial
/// or follow a capitalized word or initial.
fn is_initial(text: &str, tokens: &[Span], idx: usize) -> bool {
    let token_text = |i: usize| &text[tokens[i].start..tokens[i].end];
    let glued_period = |i: usize| {
        i + 1 < tokens.len()
            && tokens[i].end == tokens[i + 1].start
            && token_text(i + 1) == "."
    };

    if !is_letter_initial(token_text(idx)) || !glued_period(idx) {
        return false;
    }

    let Some(next) = tokens.get(idx + 2) else {
        return false;
    };
    if !starts_uppercase(&text[next.start..next.end]) {
        return false;
    }
    if is_letter_initial(token_text(idx + 2)) && glued_period(idx + 2) {
        return true;
    }

    match idx.checked_sub(1) {
        Some(prev) if token_text(prev) == "." => {
            prev > 0 && is_letter_initial(token_text(prev - 1)) && glued_period(prev - 1)
        }
        Some(prev) => {
            let word = token_text(prev);
            starts_uppercase(word) && word.chars().all(char::is_alphabetic)
        }
        None => false,
    }
}

fn is_letter_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_uppercase() && c != 'I'
    )
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_blank_line(gap: &str) -> bool {
    gap.matches('\n').count() >= 2
}

impl Annotator for SentenceAnnotator {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn process(&self, document: &mut Document) -> Result<(), AnnotationError> {
        if document.tokens().is_empty() {
            if document.is_blank() {
                document.set_sentences(Vec::new());
                return Ok(());
            }
            return Err(AnnotationError::MissingLayer {
                annotator: self.name(),
                layer: "token",
            });
        }

        let sentences = self.segment(document.text(), document.tokens());
        document.set_sentences(sentences);
        Ok(())
    }
}
