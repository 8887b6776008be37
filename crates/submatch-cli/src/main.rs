mod commands;
mod logging;
mod report;

use std::io::{self, IsTerminal, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use commands::{Cli, Commands, MatchArgs};
use dotenv::dotenv;
use report::ScriptRenderer;
use submatch_core::{AppConfig, MatchEngine, ScoreMethod, Scorer};
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let args = Cli::parse();

    let _guard = logging::init_logger(args.verbose);

    if let Err(err) = run(args) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let mut config =
        submatch_core::config::load_configuration().context("Error loading configuration")?;

    match args.command {
        Some(Commands::Score { a, b, score_method }) => {
            let method: ScoreMethod = match score_method {
                Some(method) => method.parse()?,
                None => config.score_method()?,
            };
            println!("{:.4}", method.score(&a, &b));
        }
        Some(Commands::PrintConfig) => {
            args.matching.apply_to(&mut config);
            println!("Configuration: {:?}", config);
        }
        None => run_match(&args.matching, config)?,
    }

    Ok(())
}

fn run_match(matching: &MatchArgs, mut config: AppConfig) -> Result<()> {
    matching.apply_to(&mut config);

    let engine = MatchEngine::new(config);
    let outcome = engine
        .run(&matching.dir)
        .with_context(|| format!("Error matching files in {}", matching.dir.display()))?;

    info!(
        "Scan: {}, Match: {}",
        format!("{:.2}s", outcome.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", outcome.match_duration.as_secs_f64()).green(),
    );
    info!(
        "{} pairs, {} movies and {} subtitles left",
        format!("{}", outcome.result.len()).cyan(),
        format!("{}", outcome.result.unmatched_a().len()).red(),
        format!("{}", outcome.result.unmatched_b().len()).red(),
    );

    let stdout = io::stdout();
    let color = !matching.no_color && stdout.is_terminal();
    let mut out = stdout.lock();
    ScriptRenderer::new(color)
        .render(&mut out, &outcome.result, &outcome.plan)
        .context("Error writing script")?;
    out.flush()?;

    Ok(())
}
