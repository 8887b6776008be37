use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use submatch_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "submatch")]
#[command(about = "Match movies and subtitles from their names", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the similarity score of two file names
    Score {
        a: String,
        b: String,
        /// Score method: similarity or numeric
        #[arg(long = "score", value_name = "M")]
        score_method: Option<String>,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Directory scanned for movies and subtitles
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Change lower bound for matching ratio. Matches below it are excluded
    #[arg(short, long, value_name = "L")]
    pub limit: Option<f64>,

    /// Rename subtitles instead of movies
    #[arg(short, long)]
    pub reverse: bool,

    /// Consider files with no extension as movies
    #[arg(short = 'n', long)]
    pub no_ext: bool,

    /// Matching strategy: similarity, numeric, zip or permutation
    #[arg(short, long, value_name = "S")]
    pub strategy: Option<String>,

    /// Score method overriding the one implied by --strategy
    #[arg(long = "score", value_name = "M")]
    pub score_method: Option<String>,

    /// Largest movie count the permutation strategy accepts
    #[arg(long, value_name = "N")]
    pub max_permutation_items: Option<usize>,

    /// Never color the report
    #[arg(long)]
    pub no_color: bool,
}

impl MatchArgs {
    /// Lay the flags over a loaded configuration. `numeric` and `similarity`
    /// are greedy matching with the matching score method.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        config.reverse |= self.reverse;
        config.no_ext |= self.no_ext;

        if let Some(strategy) = &self.strategy {
            match strategy.trim().to_ascii_lowercase().as_str() {
                "numeric" => {
                    config.strategy = "greedy".to_string();
                    config.score_method = "numeric".to_string();
                }
                "similarity" | "default" => {
                    config.strategy = "greedy".to_string();
                    config.score_method = "similarity".to_string();
                }
                _ => config.strategy = strategy.clone(),
            }
        }

        if let Some(score_method) = &self.score_method {
            if config.strategy.trim().eq_ignore_ascii_case("numeric") {
                config.strategy = "greedy".to_string();
            }
            config.score_method = score_method.clone();
        }

        if let Some(max) = self.max_permutation_items {
            config.max_permutation_items = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use submatch_core::{ScoreMethod, Strategy};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("submatch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.matching.dir, PathBuf::from("."));

        let mut config = AppConfig::default();
        cli.matching.apply_to(&mut config);
        assert_eq!(config.limit, 0.60);
        assert_eq!(config.strategy().unwrap(), Strategy::Greedy);
        assert!(!config.reverse);
    }

    #[test]
    fn test_numeric_strategy_selects_numeric_score() {
        let cli = parse(&["-s", "numeric", "-l", "0.9", "-r", "-n", "movies"]);
        let mut config = AppConfig::default();
        cli.matching.apply_to(&mut config);

        assert_eq!(config.strategy().unwrap(), Strategy::Greedy);
        assert_eq!(config.score_method().unwrap(), ScoreMethod::Numeric);
        assert_eq!(config.limit, 0.9);
        assert!(config.reverse);
        assert!(config.no_ext);
        assert_eq!(cli.matching.dir, PathBuf::from("movies"));
    }

    #[test]
    fn test_unknown_strategy_survives_until_validation() {
        let cli = parse(&["--strategy", "best"]);
        let mut config = AppConfig::default();
        cli.matching.apply_to(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_score_subcommand() {
        let cli = parse(&["score", "a.mkv", "a.srt", "--score", "numeric", "-v"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Score { a, b, score_method }) => {
                assert_eq!(a, "a.mkv");
                assert_eq!(b, "a.srt");
                assert_eq!(score_method.as_deref(), Some("numeric"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
