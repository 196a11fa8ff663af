//! Phonetic-alphabet mapping table.
//!
//! A mapping table is a line-based resource: a header row naming the
//! alphabets, then one comma-separated row per phone with one (possibly
//! empty) cell per alphabet. Lines starting with `#` and blank lines are
//! skipped.

use crate::error::{MappingError, Result};
use crate::symbol::Symbol;
use std::collections::HashMap;
use std::path::Path;

/// Mapping table bundled with the crate: TIMIT phones against ARPABET and
/// the Wikipedia respelling key. Stop closures, pauses and the utterance
/// marker carry empty cells outside TIMIT.
pub const BUILTIN_TABLE: &str = include_str!("../assets/mapping.csv");

/// Symbol-to-symbol translator across named phonetic alphabets.
///
/// The table is indexed once at load into one lookup per ordered alphabet
/// pair; [`AlphabetMapper::translate`] is a pure lookup afterwards and the
/// mapper can be shared read-only across callers.
pub struct AlphabetMapper {
    alphabets: Vec<String>,
    pairs: HashMap<(usize, usize), HashMap<Symbol, Symbol>>,
}

impl AlphabetMapper {
    /// Parse a mapping table, validating that every alphabet in `required`
    /// has a column.
    pub fn parse(text: &str, required: &[&str]) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| MappingError::Malformed {
                line: 0,
                reason: "empty table".to_string(),
            })?;

        let alphabets: Vec<String> = header
            .split(',')
            .map(|name| name.trim().to_string())
            .collect();

        for (i, name) in alphabets.iter().enumerate() {
            if name.is_empty() {
                return Err(MappingError::Malformed {
                    line: header_line,
                    reason: "empty alphabet name in header".to_string(),
                }
                .into());
            }
            if alphabets[..i].contains(name) {
                return Err(MappingError::Malformed {
                    line: header_line,
                    reason: format!("duplicate alphabet column: {name:?}"),
                }
                .into());
            }
        }

        for name in required {
            if !alphabets.iter().any(|a| a == name) {
                return Err(MappingError::MissingAlphabet {
                    alphabet: name.to_string(),
                }
                .into());
            }
        }

        let mut rows: Vec<Vec<Symbol>> = Vec::new();
        for (line_no, line) in lines {
            let cells: Vec<Symbol> = line.split(',').map(|cell| cell.trim().into()).collect();
            if cells.len() != alphabets.len() {
                return Err(MappingError::Malformed {
                    line: line_no,
                    reason: format!(
                        "expected {} cells, got {}",
                        alphabets.len(),
                        cells.len()
                    ),
                }
                .into());
            }
            rows.push(cells);
        }

        let pairs = build_pair_indexes(&alphabets, &rows)?;

        tracing::debug!(
            alphabets = alphabets.len(),
            rows = rows.len(),
            "loaded mapping table"
        );

        Ok(Self { alphabets, pairs })
    }

    /// Load a mapping table from a file.
    pub fn from_file(path: impl AsRef<Path>, required: &[&str]) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text, required)
    }

    /// Alphabets named by the table header, in column order.
    pub fn alphabets(&self) -> &[String] {
        &self.alphabets
    }

    /// Translate one symbol from alphabet `from` to alphabet `to`.
    ///
    /// The empty symbol translates to the empty symbol for every pair;
    /// silence is alphabet-invariant. A symbol without a `from` entry is
    /// [`MappingError::UnknownSymbol`]; the mapper never substitutes a
    /// default on the caller's behalf.
    pub fn translate(&self, symbol: &Symbol, from: &str, to: &str) -> Result<Symbol> {
        if symbol.is_empty() {
            return Ok(Symbol::empty());
        }

        let from_idx = self.alphabet_index(from)?;
        let to_idx = self.alphabet_index(to)?;

        self.pairs[&(from_idx, to_idx)]
            .get(symbol)
            .cloned()
            .ok_or_else(|| {
                MappingError::UnknownSymbol {
                    symbol: symbol.as_str().to_string(),
                    alphabet: from.to_string(),
                }
                .into()
            })
    }

    fn alphabet_index(&self, name: &str) -> Result<usize> {
        self.alphabets
            .iter()
            .position(|a| a == name)
            .ok_or_else(|| MappingError::UnknownAlphabet(name.to_string()).into())
    }
}

/// Build the per-ordered-pair symbol lookups.
///
/// Empty source cells are skipped: the empty symbol is handled by
/// invariant in `translate`, never by table data. A repeated source symbol
/// is tolerated when its destination agrees and rejected as ambiguous when
/// it does not.
fn build_pair_indexes(
    alphabets: &[String],
    rows: &[Vec<Symbol>],
) -> Result<HashMap<(usize, usize), HashMap<Symbol, Symbol>>> {
    let mut pairs = HashMap::new();

    for from_idx in 0..alphabets.len() {
        for to_idx in 0..alphabets.len() {
            let mut map: HashMap<Symbol, Symbol> = HashMap::with_capacity(rows.len());

            for row in rows {
                let src = &row[from_idx];
                if src.is_empty() {
                    continue;
                }
                let dst = &row[to_idx];

                if let Some(prev) = map.insert(src.clone(), dst.clone())
                    && prev != *dst
                {
                    return Err(MappingError::DuplicateSourceSymbol {
                        symbol: src.as_str().to_string(),
                        from: alphabets[from_idx].clone(),
                        to: alphabets[to_idx].clone(),
                        first: prev.as_str().to_string(),
                        second: dst.as_str().to_string(),
                    }
                    .into());
                }
            }

            pairs.insert((from_idx, to_idx), map);
        }
    }

    Ok(pairs)
}
