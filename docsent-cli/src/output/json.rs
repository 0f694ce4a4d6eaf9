//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence text, empty for an unreadable document
    pub text: String,
    /// Position in the sentence stream
    pub index: usize,
    /// Length of the sentence in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()> {
        self.sentences.push(SentenceData {
            text: sentence.to_string(),
            index,
            length: sentence.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.format_sentence("Hello world.", 0).unwrap();
            formatter.format_sentence("日本語。", 1).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<SentenceData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "Hello world.");
        assert_eq!(parsed[1].index, 1);
        assert_eq!(parsed[1].length, 4);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut out = Vec::new();
        JsonFormatter::new(&mut out).finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
