//! `docsent` command-line entry point

use clap::Parser;
use docsent_cli::commands::Commands;

/// Stream sentences out of document corpora
#[derive(Debug, Parser)]
#[command(name = "docsent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_sentences_command() {
        let cli = Cli::try_parse_from(["docsent", "sentences", "corpus/", "-f", "json", "-q"])
            .unwrap();
        match cli.command {
            Commands::Sentences(args) => {
                assert_eq!(args.path.to_str(), Some("corpus/"));
                assert!(args.quiet);
            }
            other => panic!("Expected Sentences, got {other:?}"),
        }
    }
}
