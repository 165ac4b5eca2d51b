//! Stats command: totals for the loaded corpus and its indexes.

use serde::Serialize;

use crate::search::Searcher;
use crate::stats::CorpusStats;

/// Options for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output of the stats command.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    pub stats: CorpusStats,
}

/// The stats command implementation.
pub struct StatsCommand<'a> {
    searcher: &'a Searcher,
}

impl<'a> StatsCommand<'a> {
    pub fn new(searcher: &'a Searcher) -> Self {
        Self { searcher }
    }

    pub fn run(&self) -> StatsOutput {
        StatsOutput {
            stats: CorpusStats::collect(self.searcher.corpus(), self.searcher.indexes()),
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &StatsOutput, options: &StatsOptions) -> String {
        if options.quiet {
            return String::new();
        }
        if options.json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }

        let s = &output.stats;
        format!(
            "Level {}\n\
             Entries: {} ({} words, {} phrases)\n\
             Morphology groups: {} prefixes, {} roots, {} suffixes\n",
            s.level,
            s.total_entries,
            s.total_words,
            s.total_phrases,
            s.prefix_count,
            s.root_count,
            s.suffix_count
        )
    }
}
