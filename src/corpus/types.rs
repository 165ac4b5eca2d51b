//! Corpus entry types for Morpho.
//!
//! These mirror the static JSON datasets: a vocabulary file with `words` and
//! `phrases` lists, and a scenario file with `categories`. The records are
//! loosely typed on disk; every optional field tolerates being absent, null,
//! or (for morphological fields) either a string or a list of strings.

use serde::{Deserialize, Serialize};

/// A loosely-typed field value: a scalar string or a list of strings.
///
/// The datasets store some fields (`root`, `prefix_cn`, ...) as either form
/// depending on how the entry was prepared. `null` list elements are kept as
/// `None` so normalization can render them as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<Option<String>>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Accent selector for IPA display and speech playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Us,
    Uk,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Uk => "uk",
        }
    }
}

/// An example sentence pair. The translation may be empty pending an offline
/// fill step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentencePair {
    pub en: String,
    pub zh: Option<String>,
}

/// A single vocabulary word with optional morphological breakdown.
///
/// `idx` is assigned at corpus-load time (position in the source list) and is
/// the entry's only stable identifier; the study sequence navigates by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordEntry {
    pub word: String,
    pub cn_def: String,
    pub en_def: Option<String>,
    pub pos: Option<String>,
    pub prefix: Option<FieldValue>,
    pub root: Option<FieldValue>,
    pub suffix: Option<FieldValue>,
    pub prefix_cn: Option<FieldValue>,
    pub root_cn: Option<FieldValue>,
    pub suffix_cn: Option<FieldValue>,
    /// Some datasets use `uk_ipa`/`us_ipa` instead; accept both spellings.
    #[serde(alias = "uk_ipa")]
    pub ipa_uk: Option<String>,
    #[serde(alias = "us_ipa")]
    pub ipa_us: Option<String>,
    pub example_en: Option<String>,
    pub example_zh: Option<String>,
    pub sentences: Vec<SentencePair>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub morph_note: Option<String>,
    pub mnemonic_zh: Option<String>,
    /// Stable position in the loaded corpus. Assigned at load, never reused.
    #[serde(skip)]
    pub idx: usize,
}

/// The three indexed morphological fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphField {
    Prefix,
    Root,
    Suffix,
}

impl MorphField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Root => "root",
            Self::Suffix => "suffix",
        }
    }
}

impl std::str::FromStr for MorphField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(Self::Prefix),
            "root" => Ok(Self::Root),
            "suffix" => Ok(Self::Suffix),
            other => Err(format!(
                "unknown morphology field: {other} (expected prefix, root, or suffix)"
            )),
        }
    }
}

impl std::fmt::Display for MorphField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WordEntry {
    /// The raw value of one of the three indexed morphological fields.
    pub fn morph_value(&self, field: MorphField) -> Option<&FieldValue> {
        match field {
            MorphField::Prefix => self.prefix.as_ref(),
            MorphField::Root => self.root.as_ref(),
            MorphField::Suffix => self.suffix.as_ref(),
        }
    }

    /// The native-language gloss paired with a morphological field.
    pub fn morph_gloss(&self, field: MorphField) -> Option<&FieldValue> {
        match field {
            MorphField::Prefix => self.prefix_cn.as_ref(),
            MorphField::Root => self.root_cn.as_ref(),
            MorphField::Suffix => self.suffix_cn.as_ref(),
        }
    }

    /// IPA transcription for the given accent, if present.
    pub fn ipa(&self, accent: Accent) -> Option<&str> {
        match accent {
            Accent::Us => self.ipa_us.as_deref(),
            Accent::Uk => self.ipa_uk.as_deref(),
        }
    }
}

/// A multi-word entry. Kept in a separate collection from words; phrases never
/// appear in morphology indexes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseEntry {
    pub phrase: Option<String>,
    pub norm_head: Option<String>,
    pub cn_def: String,
    pub example_en: Option<String>,
    pub example_zh: Option<String>,
    /// Stable position in the loaded corpus. Assigned at load, never reused.
    #[serde(skip)]
    pub idx: usize,
}

impl PhraseEntry {
    /// The display head: the canonical phrase, falling back to the normalized
    /// head when the phrase text is missing.
    pub fn head(&self) -> &str {
        self.phrase
            .as_deref()
            .or(self.norm_head.as_deref())
            .unwrap_or("")
    }
}

/// A bilingual example sentence inside a scenario category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioExample {
    pub en: String,
    pub zh: String,
}

/// A named grouping of scenario examples, optionally restricted to a subset of
/// proficiency levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioCategory {
    pub id: String,
    pub name: String,
    /// Levels this category applies to (e.g. `["B2", "C1"]`). Absent means
    /// active for every level.
    pub levels: Option<Vec<String>>,
    pub examples: Vec<ScenarioExample>,
}

impl ScenarioCategory {
    /// Whether this category is active for the given proficiency level.
    pub fn active_for(&self, level: &str) -> bool {
        match &self.levels {
            Some(levels) => levels.iter().any(|l| l == level),
            None => true,
        }
    }

    /// The thematic class encoded as the id's prefix
    /// (e.g. `life_daily` -> `life`).
    pub fn theme(&self) -> &str {
        self.id
            .split(['_', '-'])
            .next()
            .unwrap_or(self.id.as_str())
    }
}

/// A scenario example surfaced as a search result, carrying its parent
/// category's name and id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMatch {
    pub category_name: String,
    pub category_id: String,
    pub en: String,
    pub zh: String,
}

/// A display entry: the runtime-tagged union of the three entity kinds.
///
/// The presentation layer pattern-matches on this exhaustively instead of
/// probing for fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Word(WordEntry),
    Phrase(PhraseEntry),
    Scenario(ScenarioMatch),
}

impl Entry {
    /// The primary display string of the entry.
    pub fn head(&self) -> &str {
        match self {
            Self::Word(w) => &w.word,
            Self::Phrase(p) => p.head(),
            Self::Scenario(s) => &s.en,
        }
    }

    /// The stable corpus index, for words and phrases.
    pub fn idx(&self) -> Option<usize> {
        match self {
            Self::Word(w) => Some(w.idx),
            Self::Phrase(p) => Some(p.idx),
            Self::Scenario(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_deserializes_scalar_and_list() {
        let scalar: FieldValue = serde_json::from_str("\"ab-\"").unwrap();
        assert_eq!(scalar, FieldValue::Text("ab-".to_string()));

        let list: FieldValue = serde_json::from_str("[\"spect\", null, \"spec\"]").unwrap();
        assert_eq!(
            list,
            FieldValue::List(vec![
                Some("spect".to_string()),
                None,
                Some("spec".to_string())
            ])
        );
    }

    #[test]
    fn test_word_entry_tolerates_missing_fields() {
        let w: WordEntry = serde_json::from_str(r#"{"word": "abandon"}"#).unwrap();
        assert_eq!(w.word, "abandon");
        assert_eq!(w.cn_def, "");
        assert!(w.prefix.is_none());
        assert!(w.sentences.is_empty());
    }

    #[test]
    fn test_word_entry_ipa_aliases() {
        let w: WordEntry =
            serde_json::from_str(r#"{"word": "abandon", "uk_ipa": "əˈbændən"}"#).unwrap();
        assert_eq!(w.ipa(Accent::Uk), Some("əˈbændən"));
        assert_eq!(w.ipa(Accent::Us), None);
    }

    #[test]
    fn test_morph_value_accessors() {
        let w: WordEntry = serde_json::from_str(
            r#"{"word": "abandon", "prefix": "ab-", "root": ["band", "bond"], "prefix_cn": "离开"}"#,
        )
        .unwrap();
        assert_eq!(
            w.morph_value(MorphField::Prefix),
            Some(&FieldValue::from("ab-"))
        );
        assert!(matches!(
            w.morph_value(MorphField::Root),
            Some(FieldValue::List(_))
        ));
        assert!(w.morph_value(MorphField::Suffix).is_none());
        assert_eq!(
            w.morph_gloss(MorphField::Prefix),
            Some(&FieldValue::from("离开"))
        );
    }

    #[test]
    fn test_morph_field_from_str() {
        assert_eq!("prefix".parse::<MorphField>().unwrap(), MorphField::Prefix);
        assert_eq!(" Root ".parse::<MorphField>().unwrap(), MorphField::Root);
        assert!("stem".parse::<MorphField>().is_err());
    }

    #[test]
    fn test_phrase_head_fallback() {
        let p = PhraseEntry {
            norm_head: Some("take off".to_string()),
            ..Default::default()
        };
        assert_eq!(p.head(), "take off");

        let p = PhraseEntry {
            phrase: Some("take off".to_string()),
            norm_head: Some("takeoff".to_string()),
            ..Default::default()
        };
        assert_eq!(p.head(), "take off");

        assert_eq!(PhraseEntry::default().head(), "");
    }

    #[test]
    fn test_scenario_category_active_for() {
        let unrestricted = ScenarioCategory::default();
        assert!(unrestricted.active_for("B2"));

        let restricted = ScenarioCategory {
            levels: Some(vec!["B2".to_string(), "C1".to_string()]),
            ..Default::default()
        };
        assert!(restricted.active_for("C1"));
        assert!(!restricted.active_for("C2"));
    }

    #[test]
    fn test_scenario_category_theme() {
        let cat = ScenarioCategory {
            id: "campus_library".to_string(),
            ..Default::default()
        };
        assert_eq!(cat.theme(), "campus");

        let cat = ScenarioCategory {
            id: "dialog".to_string(),
            ..Default::default()
        };
        assert_eq!(cat.theme(), "dialog");
    }

    #[test]
    fn test_entry_tagged_serialization() {
        let entry = Entry::Scenario(ScenarioMatch {
            category_name: "校园生活".to_string(),
            category_id: "campus_library".to_string(),
            en: "The library closes at ten.".to_string(),
            zh: "图书馆十点关门。".to_string(),
        });
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"scenario\""));
        assert_eq!(entry.head(), "The library closes at ten.");
        assert!(entry.idx().is_none());
    }
}
