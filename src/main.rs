//! Morpho - vocabulary morphology browser and search.
//!
//! CLI entry point: loads the configured corpus, builds the indexes, and runs
//! one command against the snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use morpho::cli::{
    GroupsCommand, GroupsOptions, SearchCommand, SearchOptions, StatsCommand, StatsOptions,
};
use morpho::config::Config;
use morpho::corpus::{Corpus, Level, MorphField, ScenarioSet};
use morpho::search::Searcher;

/// Morpho - vocabulary morphology browser and search
#[derive(Parser)]
#[command(name = "morpho")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Proficiency level (B2, C1, C2); overrides config
    #[arg(long, short, global = true)]
    level: Option<String>,

    /// Directory containing the JSON datasets; overrides config
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search words, phrases, scenarios, and morphology groups
    Search {
        /// Search query (minimum 2 characters)
        query: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show corpus and index totals
    Stats {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List morphology groups for one field
    Groups {
        /// Field to browse: prefix, root, or suffix
        field: MorphField,
        /// Restrict to one letter bucket (A-Z, or '#')
        #[arg(long, short = 'L')]
        letter: Option<char>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();

    let level_str = cli
        .level
        .clone()
        .unwrap_or_else(|| config.corpus.level.clone());
    let level: Level = match level_str.parse() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.corpus.data_dir.clone());

    let corpus = match Corpus::load(&data_dir, level) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    // A missing scenario file is tolerated; only vocabulary is mandatory.
    let scenarios = ScenarioSet::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("scenario dataset unavailable: {e}");
        ScenarioSet::default()
    });

    let searcher = Searcher::new(corpus, scenarios, config.index.skips())
        .with_max_display(config.search.max_display)
        .with_min_query_len(config.search.min_query_len);

    match cli.command {
        Commands::Search { query, json, quiet } => {
            let cmd = SearchCommand::new(&searcher);
            let output = cmd.run(&query);
            let options = SearchOptions { json, quiet };
            print!("{}", cmd.format_output(&output, &options));
        }
        Commands::Stats { json, quiet } => {
            let cmd = StatsCommand::new(&searcher);
            let output = cmd.run();
            let options = StatsOptions { json, quiet };
            print!("{}", cmd.format_output(&output, &options));
        }
        Commands::Groups {
            field,
            letter,
            json,
            quiet,
        } => {
            let cmd = GroupsCommand::new(&searcher);
            let options = GroupsOptions {
                letter,
                json,
                quiet,
            };
            let output = cmd.run(field, &options);
            print!("{}", cmd.format_output(&output, &options));
        }
    }

    ExitCode::SUCCESS
}
