//! Lyre: phonetic transcription and alphabet conversion from the command line.

pub mod cli;
pub mod convert;
pub mod say;
