//! Say subcommand - sentence to display-alphabet pronunciation.

use crate::cli::MappingArgs;
use eyre::{Result, WrapErr};
use lyrebird::dict::CmuDictionary;
use lyrebird::pipeline::{TranscriptionPipeline, clean_sentence};
use lyrebird::symbol::Symbol;
use std::path::PathBuf;

/// CLI arguments for sentence transcription.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Sentence to transcribe
    pub sentence: String,

    /// Path to a CMUdict-format pronouncing dictionary
    #[arg(short, long)]
    pub dict: PathBuf,

    /// Alphabet of the dictionary's symbols
    #[arg(long, default_value = "timit")]
    pub from: String,

    /// Display alphabet for the output
    #[arg(long, default_value = "wikipedia")]
    pub to: String,

    /// Print each word's phones on its own line
    #[arg(long)]
    pub per_word: bool,

    #[command(flatten)]
    pub mapping: MappingArgs,
}

/// Resolved configuration for sentence transcription.
pub struct Config {
    pub sentence: String,
    pub pipeline: TranscriptionPipeline<CmuDictionary>,
    pub from: String,
    pub to: String,
    pub per_word: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let dictionary = CmuDictionary::from_file(&args.dict)
            .wrap_err_with(|| format!("failed to load dictionary: {}", args.dict.display()))?;
        let mapper = args.mapping.load(&[&args.from, &args.to])?;

        Ok(Self {
            sentence: args.sentence,
            pipeline: TranscriptionPipeline::new(dictionary, mapper),
            from: args.from,
            to: args.to,
            per_word: args.per_word,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        sentence = %config.sentence,
        from = %config.from,
        to = %config.to,
        "transcribing"
    );

    let transcription = config.pipeline.transcribe(&config.sentence)?;

    if config.per_word {
        let cleaned = clean_sentence(&config.sentence);
        let mut offset = 0;

        for (word, &len) in cleaned.split(' ').zip(&transcription.word_lengths) {
            let phones = &transcription.phonemes[offset..offset + len];
            let display = config.pipeline.convert(phones, &config.from, &config.to)?;
            println!("{word}: {}", join(&display));
            offset += len;
        }
    } else {
        let display = config
            .pipeline
            .convert(&transcription.phonemes, &config.from, &config.to)?;
        println!("{}", join(&display));
    }

    Ok(())
}

fn join(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
