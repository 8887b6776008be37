use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown matching strategy '{0}' (expected greedy, zip or permutation)")]
    UnknownStrategy(String),

    #[error("Unknown score method '{0}' (expected similarity or numeric)")]
    UnknownScoreMethod(String),

    #[error("Permutation search over {items} items refused (limit is {max})")]
    CombinatorialBlowup { items: usize, max: usize },

    #[error("Matching limit {0} is outside [0, 1]")]
    InvalidLimit(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
