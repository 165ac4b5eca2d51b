//! Search command: free-text query over the loaded corpus.

use serde::Serialize;

use crate::highlight::{highlight_head, HeadHighlight};
use crate::search::{SearchResult, Searcher};

/// Options for the search command.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output of the search command.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutput {
    /// Whether the query cleared the length floor.
    pub searched: bool,
    /// The query as given.
    pub query: String,
    /// The categorized result, when a search ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SearchResult>,
}

/// The search command implementation.
pub struct SearchCommand<'a> {
    searcher: &'a Searcher,
}

impl<'a> SearchCommand<'a> {
    pub fn new(searcher: &'a Searcher) -> Self {
        Self { searcher }
    }

    /// Run the query. A query below the floor is the "no search" state, not
    /// an error.
    pub fn run(&self, query: &str) -> SearchOutput {
        let result = self.searcher.search(query);
        SearchOutput {
            searched: result.is_some(),
            query: query.to_string(),
            result,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &SearchOutput, options: &SearchOptions) -> String {
        if options.quiet {
            return String::new();
        }
        if options.json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }
        self.format_human_readable(output)
    }

    fn format_human_readable(&self, output: &SearchOutput) -> String {
        let Some(result) = &output.result else {
            return format!(
                "Query \"{}\" is too short (minimum 2 characters).\n",
                output.query
            );
        };

        let mut lines = Vec::new();
        lines.push(result.meta.clone());
        lines.push(String::new());

        if !result.words.is_empty() {
            lines.push(format!("Words ({}):", result.words.len()));
            for w in &result.words {
                let head = emphasize(&w.word, &output.query);
                let anchor = self
                    .searcher
                    .morph_anchor_for(w)
                    .map(|(field, group)| format!("  -> {}", group.anchor_id(field)))
                    .unwrap_or_default();
                lines.push(format!("  {} — {}{}", head, w.cn_def, anchor));
            }
            lines.push(String::new());
        }

        if !result.phrases.is_empty() {
            lines.push(format!("Phrases ({}):", result.phrases.len()));
            for p in &result.phrases {
                lines.push(format!("  {} — {}", emphasize(p.head(), &output.query), p.cn_def));
            }
            lines.push(String::new());
        }

        if !result.scenarios.is_empty() {
            lines.push(format!("Scenarios ({}):", result.scenarios.len()));
            for s in &result.scenarios {
                lines.push(format!("  [{}] {} / {}", s.category_name, s.en, s.zh));
            }
            lines.push(String::new());
        }

        for (name, groups) in [
            ("Prefix groups", &result.prefix_groups),
            ("Root groups", &result.root_groups),
            ("Suffix groups", &result.suffix_groups),
        ] {
            if groups.is_empty() {
                continue;
            }
            lines.push(format!("{} ({}):", name, groups.len()));
            for g in groups {
                lines.push(format!(
                    "  {} {} ({} words)",
                    g.label,
                    g.gloss,
                    g.words.len()
                ));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

/// Bracket the first query occurrence in a head for terminal display.
fn emphasize(head: &str, query: &str) -> String {
    match highlight_head(head, query.trim()) {
        HeadHighlight::Plain(text) => text,
        HeadHighlight::Split {
            before,
            middle,
            after,
        } => format!("{before}[{middle}]{after}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexSkips;
    use crate::corpus::{Corpus, FieldValue, Level, ScenarioSet, WordEntry};

    fn searcher() -> Searcher {
        let mut abandon = WordEntry {
            word: "abandon".to_string(),
            cn_def: "放弃".to_string(),
            ..Default::default()
        };
        abandon.idx = 0;
        abandon.prefix = Some(FieldValue::from("ab-"));
        let corpus = Corpus {
            level: Level::C1,
            words: vec![abandon],
            phrases: Vec::new(),
        };
        Searcher::new(corpus, ScenarioSet::default(), IndexSkips::default())
    }

    #[test]
    fn test_run_short_query() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("a");
        assert!(!output.searched);
        assert!(output.result.is_none());
    }

    #[test]
    fn test_run_with_matches() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("aband");
        assert!(output.searched);
        assert_eq!(output.result.as_ref().unwrap().words.len(), 1);
    }

    #[test]
    fn test_format_human_readable() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("aband");
        let text = cmd.format_output(&output, &SearchOptions::default());

        assert!(text.contains("共找到 1 条匹配结果"));
        assert!(text.contains("[aband]on"));
        assert!(text.contains("prefix-group-ab"));
    }

    #[test]
    fn test_format_short_query_message() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("a");
        let text = cmd.format_output(&output, &SearchOptions::default());
        assert!(text.contains("too short"));
    }

    #[test]
    fn test_format_json() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("aband");
        let options = SearchOptions {
            json: true,
            ..Default::default()
        };
        let text = cmd.format_output(&output, &options);
        assert!(text.contains("\"searched\": true"));
        assert!(text.contains("\"meta\""));
    }

    #[test]
    fn test_format_quiet() {
        let s = searcher();
        let cmd = SearchCommand::new(&s);
        let output = cmd.run("aband");
        let options = SearchOptions {
            quiet: true,
            ..Default::default()
        };
        assert!(cmd.format_output(&output, &options).is_empty());
    }
}
