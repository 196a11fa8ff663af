//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use lyrebird::mapping::{AlphabetMapper, BUILTIN_TABLE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lyre")]
#[command(about = "Phonetic transcription and alphabet conversion")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe a sentence to phonemes in a display alphabet
    Say(crate::say::Args),

    /// Convert a phoneme sequence between alphabets
    Convert(crate::convert::Args),
}

/// Mapping-table selection shared by subcommands.
#[derive(clap::Args, Debug)]
pub struct MappingArgs {
    /// Path to a mapping table (defaults to the built-in one)
    #[arg(long)]
    pub mapping: Option<PathBuf>,
}

impl MappingArgs {
    /// Load the selected table, validating the alphabets the command needs.
    pub fn load(&self, required: &[&str]) -> Result<AlphabetMapper> {
        match &self.mapping {
            Some(path) => AlphabetMapper::from_file(path, required)
                .wrap_err_with(|| format!("failed to load mapping table: {}", path.display())),
            None => AlphabetMapper::parse(BUILTIN_TABLE, required)
                .wrap_err("built-in mapping table rejected"),
        }
    }
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Say(args) => crate::say::execute(args.try_into()?),
        Commands::Convert(args) => crate::convert::execute(args.try_into()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_say_command() {
        let cli = Cli::parse_from(["lyre", "say", "hello world", "--dict", "cmudict.dict"]);

        match &cli.command {
            Commands::Say(crate::say::Args {
                sentence,
                dict,
                from,
                to,
                per_word,
                mapping,
            }) if sentence == "hello world" && dict.to_str() == Some("cmudict.dict") => {
                assert_eq!(from, "timit");
                assert_eq!(to, "wikipedia");
                assert!(!per_word);
                assert!(mapping.mapping.is_none());
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_say_with_overrides() {
        let cli = Cli::parse_from([
            "lyre",
            "say",
            "cat",
            "--dict",
            "cmudict.dict",
            "--to",
            "arpabet",
            "--per-word",
            "--mapping",
            "table.csv",
        ]);

        match &cli.command {
            Commands::Say(args) => {
                assert_eq!(args.to, "arpabet");
                assert!(args.per_word);
                assert_eq!(
                    args.mapping.mapping.as_deref().and_then(|p| p.to_str()),
                    Some("table.csv")
                );
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_convert_command() {
        let cli = Cli::parse_from([
            "lyre", "convert", "kcl", "k", "ae", "t", "--from", "timit", "--to", "wikipedia",
        ]);

        match &cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.tokens, ["kcl", "k", "ae", "t"]);
                assert_eq!(args.from, "timit");
                assert_eq!(args.to, "wikipedia");
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn convert_tokens_may_be_empty() {
        let cli = Cli::parse_from(["lyre", "convert", "--from", "timit", "--to", "arpabet"]);

        match &cli.command {
            Commands::Convert(args) => assert!(args.tokens.is_empty()),
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}
