use crate::config::AppConfig;
use crate::error::Result;
use ahash::AHashSet;
use glob::Pattern;
use std::path::Path;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

/// Files found under a root, split into the two collections to pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    pub movies: Vec<String>,
    pub subtitles: Vec<String>,
}

/// Recursively list regular files under `root` whose extension (without the
/// dot, case-insensitive) is in `extensions`. An empty entry selects files
/// with no extension. Paths matching an ignore glob are skipped, and the
/// result is sorted lexically.
pub fn collect_files(root: &Path, extensions: &[String], ignore_globs: &[String]) -> Result<Vec<String>> {
    let allowed: AHashSet<String> = extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .collect();

    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(entry.path()))
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err
                    .io_error()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::PermissionDenied)
                {
                    warn!("Access denied while scanning: {}", err);
                    continue;
                }
                return Err(err.into());
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let extension = entry
            .path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if !allowed.contains(&extension) {
            continue;
        }

        match entry.path().to_str() {
            Some(path) => files.push(path.to_string()),
            None => warn!("Skipping non UTF-8 path {}", entry.path().display()),
        }
    }

    files.sort();
    debug!(
        "Found {} files with extensions {:?} under {}",
        files.len(),
        extensions,
        root.display()
    );
    Ok(files)
}

/// Movies and subtitles under `root` as configured. With `no_ext`, files
/// without extension are appended after the sorted movie list.
pub fn collect_candidates(root: &Path, config: &AppConfig) -> Result<Candidates> {
    let mut movies = collect_files(root, &config.movie_extensions, &config.ignore_patterns)?;
    let subtitles = collect_files(root, &config.subtitle_extensions, &config.ignore_patterns)?;

    if config.no_ext {
        let bare = collect_files(root, &[String::new()], &config.ignore_patterns)?;
        movies.extend(bare);
    }

    Ok(Candidates { movies, subtitles })
}
