//! Error types for lyrebird organized by processing stage.

use thiserror::Error;

/// Pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Mapping-table load or translation error
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Transcription error
    #[error(transparent)]
    Transcribe(#[from] TranscribeError),

    /// IO error while loading a table or dictionary resource
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Mapping-table load and translation errors.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A required alphabet column is absent from the table header
    #[error("mapping table has no {alphabet:?} column")]
    MissingAlphabet { alphabet: String },

    /// Structurally invalid table
    #[error("malformed mapping table at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The same source symbol maps to two different destinations
    #[error(
        "ambiguous {from}->{to} mapping for {symbol:?}: both {first:?} and {second:?}"
    )]
    DuplicateSourceSymbol {
        symbol: String,
        from: String,
        to: String,
        first: String,
        second: String,
    },

    /// Alphabet name not present in the loaded table
    #[error("unknown alphabet: {0:?}")]
    UnknownAlphabet(String),

    /// Symbol has no entry in the source alphabet
    #[error("no {alphabet} entry for symbol {symbol:?}")]
    UnknownSymbol { symbol: String, alphabet: String },
}

/// Sentence transcription errors.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Word missing from the pronouncing dictionary
    #[error("word not in dictionary: {0:?}")]
    WordNotFound(String),

    /// Per-word lengths disagree with the flattened sequence.
    ///
    /// Signals a dictionary collaborator contract breach, not a
    /// recoverable input condition.
    #[error("per-word lengths sum to {expected} but transcription has {actual} symbols")]
    Inconsistency { expected: usize, actual: usize },
}

/// Result type alias for lyrebird operations.
pub type Result<T> = std::result::Result<T, Error>;
