//! Rule-based tokenizer writing the token layer

use super::tables::CharTable;
use super::Annotator;
use crate::config::PipelineConfig;
use crate::document::{Document, Span};
use crate::error::AnnotationError;

/// Splits text into word and punctuation tokens
///
/// - a word is a run of alphanumeric characters, which may contain `'`,
///   `’`, `-` or `.` when both neighbours are alphanumeric (`don't`,
///   `e-mail`, `3.14`, `U.S`)
/// - a run of sentence terminators is a single token (`...`, `?!`)
/// - every other non-whitespace character is a token of its own
#[derive(Debug, Clone)]
pub struct TokenizerAnnotator {
    terminators: CharTable,
}

impl Default for TokenizerAnnotator {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

impl TokenizerAnnotator {
    /// Create a tokenizer that groups the configured terminators
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            terminators: CharTable::new(config.terminators.iter().copied()),
        }
    }

    /// Token spans for a piece of text
    pub fn tokenize(&self, text: &str) -> Vec<Span> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let end_of = |idx: usize| chars.get(idx).map_or(text.len(), |&(pos, _)| pos);

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let (pos, ch) = chars[i];

            if ch.is_whitespace() {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            if ch.is_alphanumeric() {
                while j < chars.len() {
                    let c = chars[j].1;
                    let joins = is_joiner(c)
                        && chars[j - 1].1.is_alphanumeric()
                        && chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric());
                    if c.is_alphanumeric() || joins {
                        j += 1;
                    } else {
                        break;
                    }
                }
            } else if self.terminators.contains(ch) {
                while j < chars.len() && self.terminators.contains(chars[j].1) {
                    j += 1;
                }
            }

            tokens.push(Span::new(pos, end_of(j)));
            i = j;
        }

        tokens
    }
}

fn is_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '’' | '-' | '.')
}

impl Annotator for TokenizerAnnotator {
    fn name(&self) -> &'static str {
        "tokenizer"
    }

    fn process(&self, document: &mut Document) -> Result<(), AnnotationError> {
        let tokens = self.tokenize(document.text());
        document.set_tokens(tokens);
        Ok(())
    }
}
