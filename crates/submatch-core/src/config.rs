use crate::assign::{MatchOptions, Strategy, DEFAULT_MAX_PERMUTATION_ITEMS};
use crate::error::{Error, Result};
use crate::scorer::ScoreMethod;
use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::Path;

/// Minimal matching ratio.
pub const DEFAULT_LIMIT: f64 = 0.60;

pub const CONFIG_FILE_NAME: &str = "Submatch";
pub const ENV_PREFIX: &str = "SUBMATCH";

pub const MOVIE_EXTENSIONS: &[&str] = &["avi", "mkv", "mp4", "flv", "wmv", "3gp", "mov"];
pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "sub", "smi"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limit: f64,
    pub strategy: String,
    pub score_method: String,
    pub reverse: bool,
    pub no_ext: bool,
    pub movie_extensions: Vec<String>,
    pub subtitle_extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub max_permutation_items: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            strategy: Strategy::default().to_string(),
            score_method: ScoreMethod::default().to_string(),
            reverse: false,
            no_ext: false,
            movie_extensions: MOVIE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            subtitle_extensions: SUBTITLE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_patterns: Vec::new(),
            max_permutation_items: DEFAULT_MAX_PERMUTATION_ITEMS,
        }
    }
}

impl AppConfig {
    /// `numeric` as a strategy means greedy matching with the numeric score.
    fn is_numeric_shorthand(&self) -> bool {
        self.strategy.trim().eq_ignore_ascii_case("numeric")
    }

    pub fn strategy(&self) -> Result<Strategy> {
        if self.is_numeric_shorthand() {
            return Ok(Strategy::Greedy);
        }
        self.strategy.parse()
    }

    pub fn score_method(&self) -> Result<ScoreMethod> {
        if self.is_numeric_shorthand() {
            return Ok(ScoreMethod::Numeric);
        }
        self.score_method.parse()
    }

    pub fn match_options(&self) -> Result<MatchOptions> {
        Ok(MatchOptions {
            strategy: self.strategy()?,
            limit: self.limit,
            max_permutation_items: self.max_permutation_items,
        })
    }

    /// Reject values no matching run could use.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.limit) {
            return Err(Error::InvalidLimit(self.limit));
        }
        self.strategy()?;
        self.score_method()?;
        Ok(())
    }
}

/// Load `Submatch.toml` (optional) from the working directory, then
/// `SUBMATCH_*` environment variables on top.
pub fn load_configuration() -> std::result::Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(CONFIG_FILE_NAME).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("movie_extensions")
                .with_list_parse_key("subtitle_extensions")
                .with_list_parse_key("ignore_patterns"),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

/// Load configuration from one explicit file, without environment overrides.
pub fn load_configuration_from(path: &Path) -> std::result::Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::from(path))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
