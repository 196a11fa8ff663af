//! Contracts for the external collaborators.

use crate::error::Result;
use crate::symbol::PhonemeSequence;

/// Pronouncing-dictionary lookup.
///
/// Implementations own their storage; lookup itself must be pure so a
/// loaded dictionary can be shared read-only across callers.
pub trait Dictionary {
    /// All candidate pronunciations for `word`, in dictionary order.
    ///
    /// Candidates carry the numeric stress markers of the source
    /// dictionary; the pipeline strips them. Fails with
    /// [`crate::error::TranscribeError::WordNotFound`] when the word is
    /// unknown. Only the first candidate is ever consumed by
    /// [`crate::pipeline::TranscriptionPipeline::transcribe`].
    fn lookup(&self, word: &str) -> Result<Vec<PhonemeSequence>>;
}

/// Speech-to-phoneme inference engine.
///
/// Abstracts over inference backends; output symbols are in the model's
/// source alphabet and flow directly into
/// [`crate::pipeline::TranscriptionPipeline::convert`], bypassing
/// transcription.
pub trait PhonemeRecognizer {
    /// Infer the phoneme sequence for raw audio samples.
    ///
    /// Note: takes `&mut self` because inference runtimes generally
    /// require it.
    fn infer(&mut self, samples: &[f32], sample_rate: u32) -> Result<PhonemeSequence>;
}
