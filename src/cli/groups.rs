//! Groups command: browse one morphology index, optionally a single letter
//! bucket.

use serde::Serialize;

use crate::corpus::MorphField;
use crate::index::MorphGroup;
use crate::search::Searcher;
use crate::text::initial_of;

/// Options for the groups command.
#[derive(Debug, Clone, Default)]
pub struct GroupsOptions {
    /// Restrict to one letter bucket (A-Z, or '#' for the catch-all).
    pub letter: Option<char>,
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output of the groups command.
#[derive(Debug, Clone, Serialize)]
pub struct GroupsOutput {
    pub field: MorphField,
    /// Initials that have at least one group.
    pub initials: Vec<char>,
    pub groups: Vec<MorphGroup>,
}

/// The groups command implementation.
pub struct GroupsCommand<'a> {
    searcher: &'a Searcher,
}

impl<'a> GroupsCommand<'a> {
    pub fn new(searcher: &'a Searcher) -> Self {
        Self { searcher }
    }

    pub fn run(&self, field: MorphField, options: &GroupsOptions) -> GroupsOutput {
        let index = self.searcher.indexes().get(field);
        let groups = match options.letter {
            Some(letter) => index
                .bucket(letter.to_ascii_uppercase())
                .into_iter()
                .cloned()
                .collect(),
            None => index.items.clone(),
        };
        GroupsOutput {
            field,
            initials: index.initials(),
            groups,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &GroupsOutput, options: &GroupsOptions) -> String {
        if options.quiet {
            return String::new();
        }
        if options.json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }

        if output.groups.is_empty() {
            return format!("No {} groups.\n", output.field);
        }

        let mut lines = Vec::new();
        lines.push(format!(
            "{} index: {} groups (initials: {})",
            output.field,
            output.groups.len(),
            output.initials.iter().collect::<String>()
        ));
        let mut current_initial = None;
        for g in &output.groups {
            let initial = initial_of(&g.label);
            if current_initial != Some(initial) {
                current_initial = Some(initial);
                lines.push(format!("{initial}"));
            }
            let heads: Vec<&str> = g.words.iter().map(|w| w.word.as_str()).collect();
            lines.push(format!("  {} {} — {}", g.label, g.gloss, heads.join(", ")));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexSkips;
    use crate::corpus::{Corpus, FieldValue, Level, ScenarioSet, WordEntry};

    fn searcher() -> Searcher {
        let mk = |head: &str, prefix: &str| {
            let mut w = WordEntry {
                word: head.to_string(),
                ..Default::default()
            };
            w.prefix = Some(FieldValue::from(prefix));
            w
        };
        let corpus = Corpus {
            level: Level::C1,
            words: vec![
                mk("abandon", "ab-"),
                mk("rewrite", "re-"),
                mk("stem", "词根"),
            ],
            phrases: Vec::new(),
        };
        Searcher::new(corpus, ScenarioSet::default(), IndexSkips::default())
    }

    #[test]
    fn test_run_all_groups_sorted() {
        let s = searcher();
        let cmd = GroupsCommand::new(&s);
        let output = cmd.run(MorphField::Prefix, &GroupsOptions::default());

        let labels: Vec<&str> = output.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["ab-", "re-", "词根"]);
        assert_eq!(output.initials, vec!['#', 'A', 'R']);
    }

    #[test]
    fn test_run_single_bucket() {
        let s = searcher();
        let cmd = GroupsCommand::new(&s);
        let options = GroupsOptions {
            letter: Some('a'),
            ..Default::default()
        };
        let output = cmd.run(MorphField::Prefix, &options);
        assert_eq!(output.groups.len(), 1);
        assert_eq!(output.groups[0].label, "ab-");
    }

    #[test]
    fn test_run_catch_all_bucket() {
        let s = searcher();
        let cmd = GroupsCommand::new(&s);
        let options = GroupsOptions {
            letter: Some('#'),
            ..Default::default()
        };
        let output = cmd.run(MorphField::Prefix, &options);
        assert_eq!(output.groups.len(), 1);
        assert_eq!(output.groups[0].label, "词根");
    }

    #[test]
    fn test_format_human_readable() {
        let s = searcher();
        let cmd = GroupsCommand::new(&s);
        let output = cmd.run(MorphField::Prefix, &GroupsOptions::default());
        let text = cmd.format_output(&output, &GroupsOptions::default());

        assert!(text.contains("prefix index: 3 groups"));
        assert!(text.contains("ab-"));
        assert!(text.contains("abandon"));
    }

    #[test]
    fn test_format_empty_index() {
        let s = Searcher::new(
            Corpus::default(),
            ScenarioSet::default(),
            IndexSkips::default(),
        );
        let cmd = GroupsCommand::new(&s);
        let output = cmd.run(MorphField::Suffix, &GroupsOptions::default());
        let text = cmd.format_output(&output, &GroupsOptions::default());
        assert!(text.contains("No suffix groups"));
    }
}
