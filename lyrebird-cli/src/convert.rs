//! Convert subcommand - phoneme sequence between alphabets.

use crate::cli::MappingArgs;
use eyre::{Result, WrapErr};
use lyrebird::pipeline::TranscriptionPipeline;
use lyrebird::raw;
use lyrebird::symbol::{PhonemeSequence, Symbol};
use std::io::Read;

/// CLI arguments for sequence conversion.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Phoneme tokens to convert (raw recognizer output is read from
    /// stdin when no tokens are given)
    pub tokens: Vec<String>,

    /// Source alphabet
    #[arg(long)]
    pub from: String,

    /// Destination alphabet
    #[arg(long)]
    pub to: String,

    #[command(flatten)]
    pub mapping: MappingArgs,
}

/// Resolved configuration for sequence conversion.
pub struct Config {
    pub sequence: PhonemeSequence,
    pub pipeline: TranscriptionPipeline<()>,
    pub from: String,
    pub to: String,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let sequence = if args.tokens.is_empty() {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read phonemes from stdin")?;
            raw::parse_symbols(&buffer)
        } else {
            args.tokens.into_iter().map(Symbol::from).collect()
        };

        let mapper = args.mapping.load(&[&args.from, &args.to])?;

        Ok(Self {
            sequence,
            pipeline: TranscriptionPipeline::new((), mapper),
            from: args.from,
            to: args.to,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        symbols = config.sequence.len(),
        from = %config.from,
        to = %config.to,
        "converting"
    );

    let converted = config
        .pipeline
        .convert(&config.sequence, &config.from, &config.to)?;

    println!(
        "{}",
        converted
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
