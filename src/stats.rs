//! Corpus statistics for the stats overview.

use serde::Serialize;

use crate::corpus::Corpus;
use crate::search::MorphIndexes;

/// Totals for the loaded corpus and its morphology indexes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorpusStats {
    pub level: String,
    pub total_words: usize,
    pub total_phrases: usize,
    pub total_entries: usize,
    pub prefix_count: usize,
    pub root_count: usize,
    pub suffix_count: usize,
}

impl CorpusStats {
    /// Collect stats from a corpus snapshot and its indexes.
    pub fn collect(corpus: &Corpus, indexes: &MorphIndexes) -> Self {
        Self {
            level: corpus.level.as_str().to_string(),
            total_words: corpus.words.len(),
            total_phrases: corpus.phrases.len(),
            total_entries: corpus.total_entries(),
            prefix_count: indexes.prefix.len(),
            root_count: indexes.root.len(),
            suffix_count: indexes.suffix.len(),
        }
    }
}
