use std::fs;
use std::path::Path;
use tempfile::tempdir;

use submatch_core::{AppConfig, MatchEngine, RenameAction};

/// Layout:
///   root/
///     Heat.1995.720p.avi
///     heat.1995.srt
///     Alien.1979.mkv
///     alien.1979.en.srt
///     Already.Named.mp4
///     Already.Named.sub
///     extras/
///       Notes            (no extension)
///       notes.srt
///     readme.txt
fn create_test_tree(root: &Path) {
    fs::create_dir_all(root.join("extras")).unwrap();
    for name in [
        "Heat.1995.720p.avi",
        "heat.1995.srt",
        "Alien.1979.mkv",
        "alien.1979.en.srt",
        "Already.Named.mp4",
        "Already.Named.sub",
        "extras/Notes",
        "extras/notes.srt",
        "readme.txt",
    ] {
        fs::write(root.join(name), "x").unwrap();
    }
}

#[test]
fn test_full_pipeline_forward() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let engine = MatchEngine::new(AppConfig::default());
    let outcome = engine.run(tmp.path()).unwrap();

    assert_eq!(outcome.candidates.movies.len(), 3);
    assert_eq!(outcome.candidates.subtitles.len(), 4);
    assert_eq!(outcome.result.len(), 3);

    let heat = tmp.path().join("Heat.1995.720p.avi").to_string_lossy().into_owned();
    let heat_sub = tmp.path().join("heat.1995.srt").to_string_lossy().into_owned();
    assert_eq!(outcome.result.partner_of(&heat), Some(heat_sub.as_str()));

    let renames: Vec<(&str, &str)> = outcome.plan.renames().collect();
    let expected_heat = tmp.path().join("heat.1995.avi").to_string_lossy().into_owned();
    assert!(renames.contains(&(heat.as_str(), expected_heat.as_str())));

    let already = tmp.path().join("Already.Named.mp4").to_string_lossy().into_owned();
    assert!(outcome
        .plan
        .actions()
        .contains(&RenameAction::AlreadyNamed(already)));

    let notes_sub = tmp.path().join("extras/notes.srt").to_string_lossy().into_owned();
    assert_eq!(outcome.result.unmatched_b(), &[notes_sub][..]);

    // Nothing is renamed on disk
    assert!(tmp.path().join("Heat.1995.720p.avi").exists());
}

#[test]
fn test_no_ext_includes_bare_files_as_movies() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let config = AppConfig {
        no_ext: true,
        reverse: true,
        ..AppConfig::default()
    };
    let outcome = MatchEngine::new(config).run(tmp.path()).unwrap();

    let notes = tmp.path().join("extras/Notes").to_string_lossy().into_owned();
    assert_eq!(outcome.candidates.movies.last(), Some(&notes));

    let notes_sub = tmp.path().join("extras/notes.srt").to_string_lossy().into_owned();
    let expected = tmp.path().join("extras/Notes.srt").to_string_lossy().into_owned();
    let renames: Vec<(&str, &str)> = outcome.plan.renames().collect();
    assert!(renames.contains(&(notes_sub.as_str(), expected.as_str())));
}

#[test]
fn test_ignore_patterns_skip_directories() {
    let tmp = tempdir().unwrap();
    create_test_tree(tmp.path());

    let config = AppConfig {
        ignore_patterns: vec!["*/extras".to_string()],
        ..AppConfig::default()
    };
    let outcome = MatchEngine::new(config).run(tmp.path()).unwrap();
    assert_eq!(outcome.candidates.subtitles.len(), 3);
    assert!(outcome.result.unmatched_b().is_empty());
}

#[test]
fn test_invalid_config_is_reported_before_scanning() {
    let tmp = tempdir().unwrap();
    let config = AppConfig {
        strategy: "best".to_string(),
        ..AppConfig::default()
    };
    let err = MatchEngine::new(config).run(&tmp.path().join("missing")).unwrap_err();
    assert!(matches!(err, submatch_core::Error::UnknownStrategy(_)));
}
