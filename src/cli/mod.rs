//! CLI commands for Morpho.
//!
//! Each command wraps the library in a thin struct with a `run` method
//! returning a serializable output, plus human-readable formatting. The query
//! core itself stays CLI-free; these commands only load data and project
//! results.

pub mod groups;
pub mod search;
pub mod stats;

pub use groups::{GroupsCommand, GroupsOptions, GroupsOutput};
pub use search::{SearchCommand, SearchOptions, SearchOutput};
pub use stats::{StatsCommand, StatsOptions, StatsOutput};
