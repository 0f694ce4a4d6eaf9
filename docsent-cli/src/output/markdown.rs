//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _index: usize) -> Result<()> {
        self.sentence_count += 1;
        let item = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(self.writer, "{}. {}", self.sentence_count, item)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_with_total() {
        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            formatter.format_sentence("One.", 0).unwrap();
            formatter.format_sentence("Two\n  lines.", 1).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. One.\n2. Two lines.\n\n---\n*Total sentences: 2*\n"
        );
    }
}
