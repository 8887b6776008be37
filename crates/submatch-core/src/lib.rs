//! Pair movie files with subtitle files by name similarity and plan the
//! renames that align them.

pub mod assign;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod plan;
pub mod result;
pub mod scanner;
pub mod scorer;

pub use assign::{match_names, MatchOptions, Strategy};
pub use config::AppConfig;
pub use engine::{EngineOutcome, MatchEngine};
pub use error::{Error, Result};
pub use plan::{RenameAction, RenamePlan};
pub use result::{MatchResult, MatchedPair};
pub use scorer::{MemoizedScorer, ScoreMethod, Scorer};
