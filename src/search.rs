//! Search engine over the loaded corpus and morphology indexes.
//!
//! The [`Searcher`] owns the corpus snapshot together with the three
//! morphology indexes; the whole bundle is replaced atomically on corpus
//! reload, never patched in place. Queries are pure read/filter/project
//! operations, safe to re-run on every keystroke.

use serde::Serialize;
use tracing::debug;

use crate::config::IndexSkips;
use crate::corpus::{Corpus, MorphField, PhraseEntry, ScenarioMatch, ScenarioSet, WordEntry};
use crate::index::{build_index, MorphGroup, MorphIndex};
use crate::text::label_text;

/// Hard floor on query length (in characters, after trimming). Shorter
/// queries are a defined "no search" state, not an error.
pub const MIN_QUERY_LEN: usize = 2;

/// Per-category cap on displayed results.
pub const MAX_DISPLAY: usize = 40;

/// The three morphology indexes, built together from one corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct MorphIndexes {
    pub prefix: MorphIndex,
    pub root: MorphIndex,
    pub suffix: MorphIndex,
}

impl MorphIndexes {
    /// Build all three indexes over the given words.
    pub fn build(words: &[WordEntry], skips: &IndexSkips) -> Self {
        Self {
            prefix: build_index(words, MorphField::Prefix, &skips.prefix),
            root: build_index(words, MorphField::Root, &skips.root),
            suffix: build_index(words, MorphField::Suffix, &skips.suffix),
        }
    }

    pub fn get(&self, field: MorphField) -> &MorphIndex {
        match field {
            MorphField::Prefix => &self.prefix,
            MorphField::Root => &self.root,
            MorphField::Suffix => &self.suffix,
        }
    }
}

/// A categorized, capped search result.
///
/// The entry lists are truncated to [`MAX_DISPLAY`] each (insertion order
/// preserved, no re-ranking); `total` and `word_indices` are computed before
/// truncation. A non-empty `word_indices` is the signal for the caller to
/// reset its study sequence to exactly those words, positioned at the first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResult {
    pub words: Vec<WordEntry>,
    pub phrases: Vec<PhraseEntry>,
    pub scenarios: Vec<ScenarioMatch>,
    pub prefix_groups: Vec<MorphGroup>,
    pub root_groups: Vec<MorphGroup>,
    pub suffix_groups: Vec<MorphGroup>,
    /// Word + phrase + scenario match count, before truncation.
    pub total: usize,
    /// Native-language summary of the result count.
    pub meta: String,
    /// Stable indexes of every matched word, before truncation.
    pub word_indices: Vec<usize>,
}

impl SearchResult {
    /// The study-sequence reset signal: the full matched word index list, or
    /// `None` when no words matched (the caller keeps its current sequence).
    pub fn study_reset(&self) -> Option<&[usize]> {
        if self.word_indices.is_empty() {
            None
        } else {
            Some(&self.word_indices)
        }
    }
}

/// The searcher: one immutable corpus + scenario snapshot with its indexes.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    scenarios: ScenarioSet,
    indexes: MorphIndexes,
    skips: IndexSkips,
    max_display: usize,
    min_query_len: usize,
}

impl Searcher {
    /// Build a searcher over a loaded corpus and scenario set. The three
    /// indexes are built synchronously here.
    pub fn new(corpus: Corpus, scenarios: ScenarioSet, skips: IndexSkips) -> Self {
        let indexes = MorphIndexes::build(&corpus.words, &skips);
        debug!(
            level = %corpus.level,
            prefix_groups = indexes.prefix.len(),
            root_groups = indexes.root.len(),
            suffix_groups = indexes.suffix.len(),
            "morphology indexes built"
        );
        Self {
            corpus,
            scenarios,
            indexes,
            skips,
            max_display: MAX_DISPLAY,
            min_query_len: MIN_QUERY_LEN,
        }
    }

    /// Override the per-category result cap.
    pub fn with_max_display(mut self, max_display: usize) -> Self {
        self.max_display = max_display;
        self
    }

    /// Override the query length floor.
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    /// Replace the corpus wholesale and rebuild every index.
    pub fn reload(&mut self, corpus: Corpus) {
        self.indexes = MorphIndexes::build(&corpus.words, &self.skips);
        self.corpus = corpus;
        debug!(level = %self.corpus.level, "corpus replaced, indexes rebuilt");
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn scenarios(&self) -> &ScenarioSet {
        &self.scenarios
    }

    pub fn indexes(&self) -> &MorphIndexes {
        &self.indexes
    }

    /// Run a free-text query over words, phrases, scenario examples, and the
    /// three morphology indexes.
    ///
    /// Returns `None` (the "no query yet" state) when the trimmed query is
    /// shorter than the floor; a query with zero matches returns a result
    /// with empty lists and a "no results" meta message.
    ///
    /// Latin text matches case-insensitively (the query is lowercased once and
    /// compared against lowercased heads); native-language definitions are
    /// matched as-is since they carry no case.
    pub fn search(&self, query: &str) -> Option<SearchResult> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.min_query_len {
            return None;
        }
        let q = trimmed.to_lowercase();

        let word_matches: Vec<&WordEntry> = self
            .corpus
            .words
            .iter()
            .filter(|w| w.word.to_lowercase().contains(&q) || w.cn_def.contains(&q))
            .collect();

        let phrase_matches: Vec<&PhraseEntry> = self
            .corpus
            .phrases
            .iter()
            .filter(|p| p.head().to_lowercase().contains(&q) || p.cn_def.contains(&q))
            .collect();

        // Every category is scanned, including ones inactive for the current
        // level.
        let mut scenario_matches: Vec<ScenarioMatch> = Vec::new();
        for cat in &self.scenarios.categories {
            for ex in &cat.examples {
                if ex.en.to_lowercase().contains(&q) || ex.zh.contains(&q) {
                    scenario_matches.push(ScenarioMatch {
                        category_name: cat.name.clone(),
                        category_id: cat.id.clone(),
                        en: ex.en.clone(),
                        zh: ex.zh.clone(),
                    });
                }
            }
        }

        let match_groups = |index: &MorphIndex| -> Vec<MorphGroup> {
            index
                .items
                .iter()
                .filter(|g| g.label.to_lowercase().contains(&q) || g.gloss.contains(&q))
                .take(self.max_display)
                .cloned()
                .collect()
        };

        let total = word_matches.len() + phrase_matches.len() + scenario_matches.len();
        let meta = if total > 0 {
            format!("共找到 {total} 条匹配结果")
        } else {
            "未找到匹配结果".to_string()
        };
        let word_indices: Vec<usize> = word_matches.iter().map(|w| w.idx).collect();

        debug!(query = %trimmed, total, "search evaluated");

        scenario_matches.truncate(self.max_display);
        Some(SearchResult {
            words: word_matches
                .into_iter()
                .take(self.max_display)
                .cloned()
                .collect(),
            phrases: phrase_matches
                .into_iter()
                .take(self.max_display)
                .cloned()
                .collect(),
            scenarios: scenario_matches,
            prefix_groups: match_groups(&self.indexes.prefix),
            root_groups: match_groups(&self.indexes.root),
            suffix_groups: match_groups(&self.indexes.suffix),
            total,
            meta,
            word_indices,
        })
    }

    /// The morphology group a word belongs to, for jump-to-group navigation.
    /// Fields are tried in priority order: root, then prefix, then suffix.
    pub fn morph_anchor_for(&self, word: &WordEntry) -> Option<(MorphField, &MorphGroup)> {
        for field in [MorphField::Root, MorphField::Prefix, MorphField::Suffix] {
            let label = label_text(word.morph_value(field));
            if label.is_empty() {
                continue;
            }
            if let Some(group) = self.indexes.get(field).group(&label) {
                return Some((field, group));
            }
        }
        None
    }
}
