//! Docsent CLI library
//!
//! This library provides the command-line interface that streams sentences
//! out of document corpora.

pub mod commands;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
