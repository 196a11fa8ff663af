//! Transcription and alphabet-conversion pipeline.

use crate::error::{Result, TranscribeError};
use crate::mapping::AlphabetMapper;
use crate::symbol::{PhonemeSequence, Symbol};
use crate::traits::Dictionary;

/// Punctuation stripped from sentences before dictionary lookup.
const PUNCTUATION: &[char] = &[',', '?', '.', '!', '-', ';', ':', '"'];

/// Flat phoneme transcription with per-word symbol counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcription {
    /// Phonemes of every word, concatenated in sentence order.
    pub phonemes: PhonemeSequence,
    /// Symbol count per word, in sentence order. Sums to `phonemes.len()`;
    /// callers can use it to slice `phonemes` back into words.
    pub word_lengths: Vec<usize>,
}

/// Orthography-to-phoneme and alphabet-to-alphabet conversion pipeline.
///
/// Holds the dictionary collaborator and a loaded [`AlphabetMapper`];
/// both operations are pure over call-local data, so a pipeline can be
/// shared read-only across callers.
pub struct TranscriptionPipeline<D> {
    dictionary: D,
    mapper: AlphabetMapper,
}

impl<D> TranscriptionPipeline<D> {
    pub fn new(dictionary: D, mapper: AlphabetMapper) -> Self {
        Self { dictionary, mapper }
    }

    pub fn mapper(&self) -> &AlphabetMapper {
        &self.mapper
    }

    /// Convert a phoneme sequence from alphabet `from` to alphabet `to`.
    ///
    /// Translates every symbol, collapses runs of identical adjacent
    /// symbols (distinct source phones such as a closure and its release
    /// legitimately map to one destination phone), then removes empty
    /// symbols. The output is never longer than the input and never
    /// contains the empty symbol.
    ///
    /// Conversion needs no dictionary; a pipeline built with `()` works
    /// for conversion-only use.
    pub fn convert(&self, sequence: &[Symbol], from: &str, to: &str) -> Result<PhonemeSequence> {
        let translated = sequence
            .iter()
            .map(|symbol| self.mapper.translate(symbol, from, to))
            .collect::<Result<PhonemeSequence>>()?;

        let mut collapsed = collapse_adjacent(translated);
        collapsed.retain(|symbol| !symbol.is_empty());

        tracing::debug!(
            input = sequence.len(),
            output = collapsed.len(),
            from,
            to,
            "converted sequence"
        );

        Ok(collapsed)
    }
}

impl<D: Dictionary> TranscriptionPipeline<D> {
    /// Transcribe a sentence into a flat phoneme sequence.
    ///
    /// Strips punctuation, lowercases, splits on single spaces and looks
    /// each word up in the dictionary, taking the first candidate
    /// pronunciation. Stress digits are removed from every symbol.
    /// A word missing from the dictionary aborts the whole transcription;
    /// there is no partial result. Doubled spaces produce an empty word
    /// token that fails lookup rather than being silently dropped.
    pub fn transcribe(&self, sentence: &str) -> Result<Transcription> {
        let cleaned = clean_sentence(sentence);

        let mut words: Vec<PhonemeSequence> = Vec::new();
        for word in cleaned.split(' ') {
            let candidates = self.dictionary.lookup(word)?;
            let first = candidates
                .into_iter()
                .next()
                .ok_or_else(|| TranscribeError::WordNotFound(word.to_string()))?;
            words.push(first);
        }

        let word_lengths: Vec<usize> = words.iter().map(|w| w.len()).collect();
        let phonemes: PhonemeSequence = words
            .into_iter()
            .flatten()
            .map(|symbol| strip_stress(&symbol))
            .collect();

        let expected: usize = word_lengths.iter().sum();
        if phonemes.len() != expected {
            return Err(TranscribeError::Inconsistency {
                expected,
                actual: phonemes.len(),
            }
            .into());
        }

        tracing::debug!(
            words = word_lengths.len(),
            symbols = phonemes.len(),
            "transcribed sentence"
        );

        Ok(Transcription {
            phonemes,
            word_lengths,
        })
    }
}

/// Strip sentence punctuation and lowercase, as applied before lookup.
pub fn clean_sentence(sentence: &str) -> String {
    sentence.replace(PUNCTUATION, "").to_lowercase()
}

/// Collapse runs of identical adjacent symbols to a single occurrence.
///
/// Single left-to-right pass: a symbol is emitted only when it differs
/// from the last emitted one. Non-adjacent repeats survive. Idempotent.
pub fn collapse_adjacent(sequence: PhonemeSequence) -> PhonemeSequence {
    let mut out: PhonemeSequence = Vec::with_capacity(sequence.len());

    for symbol in sequence {
        if out.last() != Some(&symbol) {
            out.push(symbol);
        }
    }

    out
}

/// Remove stress digits anywhere in the symbol and lowercase it.
fn strip_stress(symbol: &Symbol) -> Symbol {
    let cleaned: String = symbol
        .as_str()
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    Symbol::new(cleaned.to_lowercase())
}
