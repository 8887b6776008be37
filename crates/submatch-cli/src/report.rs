use colored::*;
use std::io::{self, Write};
use submatch_core::{MatchResult, RenameAction, RenamePlan};

const COMMENT: &str = "#";

/// Renders a matching outcome as a bash script: a commented report of the
/// mapping, then one `mv` per rename.
pub struct ScriptRenderer {
    color: bool,
}

impl ScriptRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render<W: Write>(&self, out: &mut W, result: &MatchResult, plan: &RenamePlan) -> io::Result<()> {
        writeln!(out, "#!/bin/bash")?;
        writeln!(out)?;

        if result.is_empty() {
            writeln!(out, "echo No mapping! Check if movies/subs")?;
            return Ok(());
        }

        for line in self.report_lines(result) {
            writeln!(out, "{} {}", COMMENT, line)?;
        }

        writeln!(out)?;
        for action in plan.actions() {
            match action {
                RenameAction::Rename { from, to } => {
                    writeln!(out, "mv {} {}", shell_quote(from), shell_quote(to))?
                }
                RenameAction::AlreadyNamed(path) => {
                    writeln!(out, "{} {} has the right name ;)", COMMENT, path)?
                }
            }
        }

        Ok(())
    }

    fn report_lines(&self, result: &MatchResult) -> Vec<String> {
        let mut lines = vec!["* Mapping:".to_string()];

        for pair in result.pairs() {
            lines.push(format!(
                "{}\t{}\t->\t{}",
                self.paint_score(pair.score),
                pair.a,
                pair.b
            ));
        }

        if !result.unmatched_b().is_empty() {
            lines.push(format!("* Remaining subs  : {}", result.unmatched_b().join(" ")));
        }

        if !result.unmatched_a().is_empty() {
            lines.push(format!("* Remaining movies: {}", result.unmatched_a().join(" ")));
        }

        lines
    }

    fn paint_score(&self, score: f64) -> String {
        let text = format!("{:.0}%", 100.0 * score);
        if !self.color {
            return text;
        }

        if score >= 0.9 {
            text.green().to_string()
        } else if score >= 0.75 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}

/// Single-quote `value` for a POSIX shell.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
