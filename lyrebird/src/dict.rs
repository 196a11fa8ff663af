//! CMUdict-format pronouncing dictionary.

use crate::error::{Result, TranscribeError};
use crate::symbol::PhonemeSequence;
use crate::traits::Dictionary;
use std::collections::HashMap;
use std::path::Path;

/// In-memory pronouncing dictionary in the CMUdict text format.
///
/// One entry per line: a headword followed by its phones, e.g.
/// `CAT  K AE1 T`. Variant pronunciations use the `WORD(2)` convention and
/// are appended to the word's candidate list in file order, so the plain
/// entry stays candidate zero. Lines starting with `;;;` are comments.
pub struct CmuDictionary {
    entries: HashMap<String, Vec<PhonemeSequence>>,
}

impl CmuDictionary {
    /// Parse dictionary entries from CMUdict-format text.
    ///
    /// Lines without at least one phone are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<PhonemeSequence>> = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(headword) = fields.next() else {
                continue;
            };
            let phones: PhonemeSequence = fields.map(Into::into).collect();
            if phones.is_empty() {
                continue;
            }

            entries
                .entry(normalize_headword(headword))
                .or_default()
                .push(phones);
        }

        tracing::debug!(words = entries.len(), "loaded pronouncing dictionary");

        Self { entries }
    }

    /// Load a dictionary from a CMUdict-format file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&text))
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for CmuDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<PhonemeSequence>> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| TranscribeError::WordNotFound(word.to_string()).into())
    }
}

/// Lowercase a headword and drop a trailing `(n)` variant marker.
fn normalize_headword(headword: &str) -> String {
    let base = match headword.find('(') {
        Some(i) => &headword[..i],
        None => headword,
    };
    base.to_lowercase()
}
