//! End-to-end pipeline tests over the built-in mapping table.

use lyrebird::dict::CmuDictionary;
use lyrebird::error::{Error, TranscribeError};
use lyrebird::mapping::{AlphabetMapper, BUILTIN_TABLE};
use lyrebird::pipeline::TranscriptionPipeline;
use lyrebird::raw;
use lyrebird::symbol::{PhonemeSequence, Symbol};

const DICT: &str = "\
;;; fixture dictionary
CAT  K AE1 T
SAT  S AE1 T
";

fn pipeline() -> TranscriptionPipeline<CmuDictionary> {
    let dictionary = CmuDictionary::parse(DICT);
    let mapper = AlphabetMapper::parse(BUILTIN_TABLE, &["timit", "wikipedia"]).unwrap();
    TranscriptionPipeline::new(dictionary, mapper)
}

fn seq(tokens: &[&str]) -> PhonemeSequence {
    tokens.iter().copied().map(Symbol::from).collect()
}

#[test]
fn transcribes_and_converts_a_word() {
    let pipeline = pipeline();

    let transcription = pipeline.transcribe("cat").unwrap();
    assert_eq!(transcription.phonemes, seq(&["k", "ae", "t"]));
    assert_eq!(transcription.word_lengths, vec![3]);

    let display = pipeline
        .convert(&transcription.phonemes, "timit", "wikipedia")
        .unwrap();

    assert!(display.len() <= transcription.phonemes.len());
    assert!(display.iter().all(|s| !s.is_empty()));
    assert_eq!(display, seq(&["k", "a", "t"]));
}

#[test]
fn recognizer_output_flows_into_convert() {
    let pipeline = pipeline();

    // Closures and the utterance marker vanish, the doubled vowel collapses.
    let predicted = raw::parse_symbols("[h#][kcl][k][ae][ae][t][tcl][h#]");
    let display = pipeline.convert(&predicted, "timit", "wikipedia").unwrap();

    assert_eq!(display, seq(&["k", "a", "t"]));
}

#[test]
fn sentence_word_lengths_align() {
    let pipeline = pipeline();

    let transcription = pipeline.transcribe("cat sat").unwrap();

    assert_eq!(transcription.word_lengths, vec![3, 3]);
    assert_eq!(
        transcription.word_lengths.iter().sum::<usize>(),
        transcription.phonemes.len()
    );
}

#[test]
fn misspelled_word_surfaces_word_not_found() {
    let pipeline = pipeline();

    match pipeline.transcribe("cat szt") {
        Err(Error::Transcribe(TranscribeError::WordNotFound(word))) => {
            assert_eq!(word, "szt");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
