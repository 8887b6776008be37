use crate::assign::match_names;
use crate::config::AppConfig;
use crate::error::Result;
use crate::plan::RenamePlan;
use crate::result::MatchResult;
use crate::scanner::{self, Candidates};
use crate::scorer::MemoizedScorer;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct MatchEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct EngineOutcome {
    pub candidates: Candidates,
    pub result: MatchResult,
    pub plan: RenamePlan,
    pub scan_duration: Duration,
    pub match_duration: Duration,
}

impl MatchEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the full pipeline under `root`:
    /// 1. Collect movie and subtitle candidates
    /// 2. Pair them with a fresh memoized scorer
    /// 3. Derive the rename plan
    pub fn run(&self, root: &Path) -> Result<EngineOutcome> {
        self.config.validate()?;

        // Phase 1: Scan
        info!("Scanning {}...", root.display());
        let scan_start = Instant::now();
        let candidates = scanner::collect_candidates(root, &self.config)?;
        let scan_duration = scan_start.elapsed();
        debug!(
            "Scan completed in {:.2}s: {} movies, {} subtitles",
            scan_duration.as_secs_f64(),
            candidates.movies.len(),
            candidates.subtitles.len(),
        );

        // Phase 2: Match
        let match_start = Instant::now();
        let result = self.match_candidates(&candidates)?;
        let match_duration = match_start.elapsed();
        debug!(
            "Matching completed in {:.2}s: {} pairs",
            match_duration.as_secs_f64(),
            result.len(),
        );

        // Phase 3: Plan
        let plan = RenamePlan::build(&result, self.config.reverse);

        Ok(EngineOutcome {
            candidates,
            result,
            plan,
            scan_duration,
            match_duration,
        })
    }

    /// Pair already collected candidates, movies first.
    pub fn match_candidates(&self, candidates: &Candidates) -> Result<MatchResult> {
        let options = self.config.match_options()?;
        let scorer = MemoizedScorer::new(self.config.score_method()?);
        info!(
            "Matching {} movies with {} subtitles ({} strategy, {} score, limit {:.2})",
            candidates.movies.len(),
            candidates.subtitles.len(),
            options.strategy,
            scorer.inner(),
            options.limit,
        );
        let result = match_names(&candidates.movies, &candidates.subtitles, &scorer, &options)?;
        debug!("{} distinct pairs scored", scorer.cached_pairs());
        Ok(result)
    }
}
