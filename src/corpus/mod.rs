//! Corpus data model and loading.
//!
//! The corpus is static JSON prepared offline: a vocabulary file per
//! proficiency level (`words` + `phrases`) and one shared scenario file.
//! Everything here is immutable after load.

pub mod load;
pub mod types;

pub use load::{Corpus, Level, ScenarioSet};
pub use types::{
    Accent, Entry, FieldValue, MorphField, PhraseEntry, ScenarioCategory, ScenarioExample,
    ScenarioMatch, SentencePair, WordEntry,
};
