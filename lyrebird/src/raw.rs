//! Raw recognizer-output parsing.

use crate::symbol::{PhonemeSequence, Symbol};

/// Split a raw phoneme string into symbols.
///
/// Inference engines emit one flat string, either bracket-delimited as
/// produced by CTC decoding (`[k][ae][t]`) or whitespace-delimited
/// (`k ae t`). Both forms parse to the same sequence; empty input yields
/// an empty sequence.
pub fn parse_symbols(raw: &str) -> PhonemeSequence {
    let raw = raw.trim();

    if raw.starts_with('[') {
        raw.split(['[', ']'])
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Symbol::from)
            .collect()
    } else {
        raw.split_whitespace().map(Symbol::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(tokens: &[&str]) -> PhonemeSequence {
        tokens.iter().copied().map(Symbol::from).collect()
    }

    #[test]
    fn parses_bracket_delimited_output() {
        assert_eq!(parse_symbols("[k][ae][t]"), seq(&["k", "ae", "t"]));
    }

    #[test]
    fn parses_whitespace_delimited_output() {
        assert_eq!(parse_symbols("k ae t"), seq(&["k", "ae", "t"]));
    }

    #[test]
    fn bracket_and_space_forms_agree() {
        assert_eq!(parse_symbols("[h#][k][ae]"), parse_symbols("h# k ae"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_symbols("").is_empty());
        assert!(parse_symbols("   ").is_empty());
    }
}
