//! Corpus loading.
//!
//! A corpus is loaded once per proficiency-level selection and replaces the
//! whole in-memory collection; entries are never mutated after load. Each word
//! and phrase receives its stable integer index here (position in the source
//! list), which remains valid for the lifetime of the loaded corpus.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::corpus::{PhraseEntry, ScenarioCategory, WordEntry};
use crate::error::{MorphoError, Result};
use crate::util::read_to_string_limited;

/// Proficiency level of a vocabulary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    B2,
    #[default]
    C1,
    C2,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// Name of the dataset file for this level.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::B2 => "b2_vocab.json",
            Self::C1 => "c1_vocab.json",
            Self::C2 => "c2_vocab.json",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = MorphoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "B2" => Ok(Self::B2),
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            other => Err(MorphoError::unknown_level(other)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk shape of a vocabulary dataset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VocabFile {
    words: Vec<WordEntry>,
    phrases: Vec<PhraseEntry>,
}

/// An immutable, loaded vocabulary corpus for one level.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub level: Level,
    pub words: Vec<WordEntry>,
    pub phrases: Vec<PhraseEntry>,
}

impl Corpus {
    /// Parse a corpus from JSON text, assigning stable indexes by position.
    pub fn from_json(level: Level, json: &str) -> Result<Self> {
        let file: VocabFile = serde_json::from_str(json)?;
        let mut corpus = Self {
            level,
            words: file.words,
            phrases: file.phrases,
        };
        for (i, word) in corpus.words.iter_mut().enumerate() {
            word.idx = i;
        }
        for (i, phrase) in corpus.phrases.iter_mut().enumerate() {
            phrase.idx = i;
        }
        debug!(
            level = %level,
            words = corpus.words.len(),
            phrases = corpus.phrases.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Load the corpus for `level` from a data directory.
    pub fn load(data_dir: &Path, level: Level) -> Result<Self> {
        let path = data_dir.join(level.file_name());
        let json = read_to_string_limited(&path)?;
        Self::from_json(level, &json)
    }

    /// Total number of entries (words plus phrases).
    pub fn total_entries(&self) -> usize {
        self.words.len() + self.phrases.len()
    }
}

/// On-disk shape of the scenario dataset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioFile {
    categories: Vec<ScenarioCategory>,
}

/// The loaded scenario corpus: every category, across all levels.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSet {
    pub categories: Vec<ScenarioCategory>,
}

impl ScenarioSet {
    /// File name of the scenario dataset.
    pub const FILE_NAME: &'static str = "scenarios.json";

    /// Parse the scenario set from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ScenarioFile = serde_json::from_str(json)?;
        debug!(categories = file.categories.len(), "scenarios loaded");
        Ok(Self {
            categories: file.categories,
        })
    }

    /// Load the scenario set from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(Self::FILE_NAME);
        let json = read_to_string_limited(&path)?;
        Self::from_json(&json)
    }

    /// Categories active for the given level (a category with no `levels`
    /// restriction is active everywhere).
    pub fn active_for(&self, level: Level) -> Vec<&ScenarioCategory> {
        self.categories
            .iter()
            .filter(|c| c.active_for(level.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VOCAB_JSON: &str = r#"{
        "words": [
            {"word": "abandon", "cn_def": "放弃", "prefix": "ab-", "root": "band", "suffix": "-on"},
            {"word": "rewrite", "cn_def": "重写", "prefix": "re-"}
        ],
        "phrases": [
            {"phrase": "give up", "cn_def": "放弃"}
        ]
    }"#;

    const SCENARIO_JSON: &str = r#"{
        "categories": [
            {"id": "campus_library", "name": "校园生活", "levels": ["B2", "C1"],
             "examples": [{"en": "The library closes at ten.", "zh": "图书馆十点关门。"}]},
            {"id": "work_meeting", "name": "职场会议",
             "examples": [{"en": "Let's schedule a meeting.", "zh": "我们安排个会议吧。"}]}
        ]
    }"#;

    #[test]
    fn test_level_parsing() {
        assert_eq!("c1".parse::<Level>().unwrap(), Level::C1);
        assert_eq!(" B2 ".parse::<Level>().unwrap(), Level::B2);
        let err = "A1".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("unknown level"));
    }

    #[test]
    fn test_level_file_names() {
        assert_eq!(Level::B2.file_name(), "b2_vocab.json");
        assert_eq!(Level::C1.file_name(), "c1_vocab.json");
        assert_eq!(Level::C2.file_name(), "c2_vocab.json");
    }

    #[test]
    fn test_corpus_from_json_assigns_indexes() {
        let corpus = Corpus::from_json(Level::C1, VOCAB_JSON).unwrap();
        assert_eq!(corpus.words.len(), 2);
        assert_eq!(corpus.phrases.len(), 1);
        assert_eq!(corpus.words[0].idx, 0);
        assert_eq!(corpus.words[1].idx, 1);
        assert_eq!(corpus.phrases[0].idx, 0);
        assert_eq!(corpus.total_entries(), 3);
    }

    #[test]
    fn test_corpus_from_json_tolerates_missing_lists() {
        let corpus = Corpus::from_json(Level::C2, "{}").unwrap();
        assert!(corpus.words.is_empty());
        assert!(corpus.phrases.is_empty());
    }

    #[test]
    fn test_corpus_from_json_rejects_malformed() {
        let result = Corpus::from_json(Level::C1, "not json");
        assert!(matches!(result, Err(MorphoError::Serde { .. })));
    }

    #[test]
    fn test_corpus_load_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("c1_vocab.json"), VOCAB_JSON).unwrap();

        let corpus = Corpus::load(temp.path(), Level::C1).unwrap();
        assert_eq!(corpus.level, Level::C1);
        assert_eq!(corpus.words[0].word, "abandon");
    }

    #[test]
    fn test_corpus_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Corpus::load(temp.path(), Level::B2);
        assert!(matches!(result, Err(MorphoError::Corpus { .. })));
    }

    #[test]
    fn test_scenario_set_load_and_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("scenarios.json"), SCENARIO_JSON).unwrap();

        let scenarios = ScenarioSet::load(temp.path()).unwrap();
        assert_eq!(scenarios.categories.len(), 2);

        // Level-restricted category drops out for C2; unrestricted stays.
        let active = scenarios.active_for(Level::C2);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "work_meeting");

        let active = scenarios.active_for(Level::B2);
        assert_eq!(active.len(), 2);
    }
}
