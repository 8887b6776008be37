//! Reduce a file name to the key the scorers compare.

/// Split a path-like name into `(stem, extension)` where `stem` keeps any
/// directory prefix and `extension` includes its leading dot.
///
/// Leading dots of the base name (`.hidden`) never start an extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let base_start = name.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    let base = &name[base_start..];
    let leading_dots = base.len() - base.trim_start_matches('.').len();

    match base[leading_dots..].rfind('.') {
        None => (name, ""),
        Some(dot) => name.split_at(base_start + leading_dots + dot),
    }
}

/// Base name without directory or extension.
pub fn stem(name: &str) -> &str {
    let (without_ext, _) = split_extension(name);
    let base_start = without_ext.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    &without_ext[base_start..]
}

/// Lower-cased stem, the only form of a name the scorers ever see.
pub fn normalize(name: &str) -> String {
    stem(name).to_lowercase()
}
