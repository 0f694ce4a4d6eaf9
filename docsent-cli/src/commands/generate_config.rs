//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use docsent_core::DocsentConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = DocsentConfig::default()
            .to_toml_string()
            .context("Failed to serialize default configuration")?;

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        std::fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!("  Output file: {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize reading and segmentation");
        println!("2. Validate your configuration:");
        println!("   docsent validate --config {}", output.display());
        println!("3. Use it for sentence extraction:");
        println!("   docsent sentences corpus/ --config {}", output.display());

        Ok(())
    }
}
