//! Sentence pre-processors applied to every emitted sentence

use std::sync::Arc;

/// Transformation applied to each sentence before it is returned
pub trait SentencePreProcessor: Send + Sync {
    /// Transform one sentence
    fn pre_process(&self, sentence: &str) -> String;
}

impl<F> SentencePreProcessor for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn pre_process(&self, sentence: &str) -> String {
        self(sentence)
    }
}

/// Lowercase every sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl SentencePreProcessor for LowerCase {
    fn pre_process(&self, sentence: &str) -> String {
        sentence.to_lowercase()
    }
}

/// Uppercase every sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCase;

impl SentencePreProcessor for UpperCase {
    fn pre_process(&self, sentence: &str) -> String {
        sentence.to_uppercase()
    }
}

/// Replace every whitespace run (including newlines) with one space and trim
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapseWhitespace;

impl SentencePreProcessor for CollapseWhitespace {
    fn pre_process(&self, sentence: &str) -> String {
        sentence.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Several pre-processors applied left to right
#[derive(Clone, Default)]
pub struct Chain {
    steps: Vec<Arc<dyn SentencePreProcessor>>,
}

impl Chain {
    /// Empty chain, the identity transformation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step
    pub fn then<P: SentencePreProcessor + 'static>(mut self, step: P) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("steps", &self.steps.len()).finish()
    }
}

impl SentencePreProcessor for Chain {
    fn pre_process(&self, sentence: &str) -> String {
        self.steps
            .iter()
            .fold(sentence.to_string(), |acc, step| step.pre_process(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_processors() {
        assert_eq!(LowerCase.pre_process("Hello World."), "hello world.");
        assert_eq!(UpperCase.pre_process("Hello World."), "HELLO WORLD.");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            CollapseWhitespace.pre_process("  A heading\n\n  over   lines. "),
            "A heading over lines."
        );
    }

    #[test]
    fn test_closure_processor() {
        let strip = |s: &str| s.trim_end_matches('.').to_string();
        assert_eq!(strip.pre_process("Done."), "Done");
    }

    #[test]
    fn test_chain_order() {
        let chain = Chain::new()
            .then(CollapseWhitespace)
            .then(|s: &str| format!("<{s}>"))
            .then(UpperCase);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.pre_process(" a\n b "), "<A B>");
        assert_eq!(Chain::new().pre_process("same"), "same");
    }
}
