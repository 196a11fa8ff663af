//! lyrebird: phonetic transcription and phonetic-alphabet conversion.
//!
//! This crate turns orthographic text into phoneme sequences through a
//! pronouncing dictionary, and converts phoneme sequences between named
//! phonetic alphabets (TIMIT, ARPABET, Wikipedia respelling) while
//! collapsing duplicated phones and dropping silence markers.
//!
//! # Architecture
//!
//! Two components over immutable data, plus two collaborator seams:
//!
//! - [`mapping::AlphabetMapper`]: loads a phone correspondence table once
//!   and answers pure symbol-to-symbol translation queries
//! - [`pipeline::TranscriptionPipeline`]: sentence-to-phonemes
//!   transcription and alphabet-to-alphabet sequence conversion
//! - [`traits::Dictionary`]: pronouncing-dictionary lookup
//!   (implemented for CMUdict files by [`dict::CmuDictionary`])
//! - [`traits::PhonemeRecognizer`]: opaque speech-to-phoneme inference
//!   boundary; its raw output parses via [`raw::parse_symbols`]
//!
//! # Quick start
//!
//! ```ignore
//! use lyrebird::dict::CmuDictionary;
//! use lyrebird::mapping::{AlphabetMapper, BUILTIN_TABLE};
//! use lyrebird::pipeline::TranscriptionPipeline;
//!
//! let dictionary = CmuDictionary::from_file("cmudict.dict")?;
//! let mapper = AlphabetMapper::parse(BUILTIN_TABLE, &["timit", "wikipedia"])?;
//! let pipeline = TranscriptionPipeline::new(dictionary, mapper);
//!
//! let transcription = pipeline.transcribe("the quick brown fox")?;
//! let display = pipeline.convert(&transcription.phonemes, "timit", "wikipedia")?;
//! ```

pub mod dict;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod raw;
pub mod symbol;
pub mod traits;
