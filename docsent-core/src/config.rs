//! Configuration for corpus reading and the default pipeline
//!
//! Every field has a default, so a TOML file only needs the keys it
//! overrides:
//!
//! ```toml
//! [reader]
//! pattern = "*.txt"
//!
//! [pipeline]
//! abbreviations = ["dr", "prof", "approx"]
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsentConfig {
    /// Document reader settings
    pub reader: ReaderConfig,
    /// Tokenizer and sentence segmenter settings
    pub pipeline: PipelineConfig,
}

/// How documents are discovered and decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Glob matched against file names (not full paths)
    pub pattern: Option<String>,
    /// Encoding label understood by the WHATWG encoding standard
    pub encoding: String,
    /// Read files and directories whose name starts with a dot
    pub include_hidden: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            encoding: "utf-8".to_string(),
            include_hidden: false,
        }
    }
}

/// Rules used by the default tokenizer and sentence segmenter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Characters that end a sentence
    pub terminators: Vec<char>,
    /// Closing quotes and brackets kept with the sentence they follow
    pub closing: Vec<char>,
    /// Words that take a period without ending the sentence (case-insensitive)
    pub abbreviations: Vec<String>,
    /// Treat a single capital letter followed by a period as an initial
    pub initials_are_abbreviations: bool,
    /// A blank line always ends the current sentence
    pub split_on_blank_lines: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?', '…', '。', '！', '？'],
            closing: vec![
                '"', '\'', ')', ']', '}', '”', '’', '»', '」', '』', '）', '】',
            ],
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            initials_are_abbreviations: true,
            split_on_blank_lines: true,
        }
    }
}

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // titles
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "gen", "col", "capt", "lt", "sgt",
    // business
    "inc", "ltd", "co", "corp", "dept", "univ", "assn",
    // latin and reference
    "e.g", "i.e", "etc", "vs", "cf", "al", "approx", "no", "vol", "fig", "pp", "ed",
    // months
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    // places and time
    "u.s", "u.k", "u.s.a", "a.m", "p.m", "mt", "ave", "blvd",
];

impl DocsentConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that TOML parsing alone cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.terminators.is_empty() {
            return Err(ConfigError::Invalid(
                "pipeline.terminators must not be empty".to_string(),
            ));
        }

        if let Some(closing) = self
            .pipeline
            .closing
            .iter()
            .find(|c| self.pipeline.terminators.contains(c))
        {
            return Err(ConfigError::Invalid(format!(
                "'{closing}' is listed both as terminator and closing character"
            )));
        }

        if encoding_rs::Encoding::for_label(self.reader.encoding.as_bytes()).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown encoding '{}'",
                self.reader.encoding
            )));
        }

        if let Some(pattern) = &self.reader.pattern {
            glob::Pattern::new(pattern).map_err(|e| {
                ConfigError::Invalid(format!("invalid file pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }
}
