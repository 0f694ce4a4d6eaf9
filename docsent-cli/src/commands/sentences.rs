//! Sentences command implementation

use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use docsent_core::{
    AnnotatedSentenceIterator, Chain, CollapseWhitespace, DocsentConfig, LowerCase,
    SentenceIterator,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// Corpus file or directory
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only read files whose name matches this glob (e.g. "*.txt")
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Encoding of the corpus files
    #[arg(long, value_name = "LABEL", env = "DOCSENT_ENCODING")]
    pub encoding: Option<String>,

    /// Lowercase every sentence
    #[arg(long)]
    pub lowercase: bool,

    /// Collapse runs of whitespace inside sentences
    #[arg(long)]
    pub collapse_whitespace: bool,

    /// Emit an empty entry for every document that could not be read
    #[arg(long)]
    pub keep_placeholders: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting sentence extraction");
        log::debug!("Arguments: {:?}", self);

        if !self.path.exists() {
            return Err(CliError::CorpusNotFound(self.path.display().to_string()).into());
        }

        let config = self.load_config()?;
        let mut iter = AnnotatedSentenceIterator::create_with_config(&self.path, &config)
            .with_context(|| format!("Failed to open corpus {}", self.path.display()))?;
        if let Some(chain) = self.pre_processor() {
            iter.set_pre_processor(Some(Arc::new(chain)));
        }

        let mut formatter = self.create_formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(&self.path.display().to_string());

        let mut emitted = 0;
        let mut placeholders = 0;
        while let Some(sentence) = iter.next_sentence()? {
            if sentence.is_empty() {
                placeholders += 1;
                if !self.keep_placeholders {
                    continue;
                }
            }
            formatter.format_sentence(&sentence, emitted)?;
            progress.sentence_emitted();
            emitted += 1;
        }
        formatter.finish()?;
        progress.finish(emitted, placeholders);

        log::info!(
            "Emitted {} entries ({} unreadable documents)",
            emitted,
            placeholders
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization only happens under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }

    /// Config file values overridden by command-line flags
    fn load_config(&self) -> Result<DocsentConfig> {
        let mut config = match &self.config {
            Some(path) => DocsentConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?,
            None => DocsentConfig::default(),
        };

        if let Some(pattern) = &self.pattern {
            config.reader.pattern = Some(pattern.clone());
        }
        if let Some(encoding) = &self.encoding {
            config.reader.encoding = encoding.clone();
        }
        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    fn pre_processor(&self) -> Option<Chain> {
        let mut chain = Chain::new();
        if self.collapse_whitespace {
            chain = chain.then(CollapseWhitespace);
        }
        if self.lowercase {
            chain = chain.then(LowerCase);
        }
        (!chain.is_empty()).then_some(chain)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    CliError::OutputError(format!("{}: {e}", path.display()))
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(path: PathBuf) -> SentencesArgs {
        SentencesArgs {
            path,
            output: None,
            format: OutputFormat::Text,
            config: None,
            pattern: None,
            encoding: None,
            lowercase: false,
            collapse_whitespace: false,
            keep_placeholders: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_missing_corpus_is_reported() {
        let err = args(PathBuf::from("/nonexistent/corpus"))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::CorpusNotFound(_))
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("docsent.toml");
        fs::write(&config_path, "[reader]\npattern = \"*.md\"\nencoding = \"utf-8\"\n").unwrap();

        let mut args = args(dir.path().to_path_buf());
        args.config = Some(config_path);
        args.pattern = Some("*.txt".to_string());
        args.encoding = Some("windows-1252".to_string());

        let config = args.load_config().unwrap();
        assert_eq!(config.reader.pattern.as_deref(), Some("*.txt"));
        assert_eq!(config.reader.encoding, "windows-1252");
    }

    #[test]
    fn test_unknown_encoding_flag_is_config_error() {
        let mut args = args(PathBuf::from("."));
        args.encoding = Some("klingon".to_string());
        let err = args.load_config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_pre_processor_only_when_requested() {
        let mut args = args(PathBuf::from("."));
        assert!(args.pre_processor().is_none());

        args.lowercase = true;
        args.collapse_whitespace = true;
        assert_eq!(args.pre_processor().map(|chain| chain.len()), Some(2));
    }

    #[test]
    fn test_writes_output_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "First one. Second one.").unwrap();
        let output = dir.path().join("out.json");

        let mut args = args(dir.path().join("a.txt"));
        args.output = Some(output.clone());
        args.format = OutputFormat::Json;
        args.execute().unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written[1]["text"], "Second one.");
    }
}
