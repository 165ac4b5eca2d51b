//! Morpho - morphology indexing and search core for a vocabulary study tool.
//!
//! Morpho loads static word/phrase/scenario datasets, builds morphological
//! indexes (by prefix, root, and suffix), and answers free-text substring
//! queries with categorized, capped result sets. The corpus is immutable once
//! loaded; indexes are rebuilt wholesale on every corpus change.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod index;
pub mod search;
pub mod stats;
pub mod study;
pub mod text;
pub mod util;

pub use config::{Config, IndexSkips};
pub use corpus::{
    Accent, Corpus, Entry, FieldValue, Level, MorphField, PhraseEntry, ScenarioCategory,
    ScenarioExample, ScenarioMatch, ScenarioSet, SentencePair, WordEntry,
};
pub use debounce::Debouncer;
pub use error::{MorphoError, Result};
pub use highlight::{highlight_all, highlight_head, HeadHighlight, Segment};
pub use index::{build_index, MorphGroup, MorphIndex, PLACEHOLDER_NONE};
pub use search::{MorphIndexes, SearchResult, Searcher, MAX_DISPLAY, MIN_QUERY_LEN};
pub use stats::CorpusStats;
pub use study::StudySequence;
pub use text::{initial_of, label_text, normalize_key, normalize_text, sort_key};

// CLI commands
pub use cli::{GroupsCommand, SearchCommand, StatsCommand};
