use std::fs;
use std::path::Path;

/// Patterns used when a project carries no ignore file. Callers may supply
/// their own fallback list instead (configuration takes precedence).
pub const DEFAULT_FALLBACK_PATTERNS: &[&str] = &["node_modules", "dist", ".git"];

/// Produce the active ignore-pattern set for one render invocation.
///
/// Reads the ignore file at `ignore_file` and parses it; a missing or
/// unreadable file is a normal condition, not an error, and falls back to
/// `fallback`. A file that parses to zero patterns also falls back.
pub fn resolve_patterns(ignore_file: &Path, fallback: &[String]) -> Vec<String> {
    match fs::read_to_string(ignore_file) {
        Ok(content) => {
            let patterns = parse_ignore_content(&content);
            if patterns.is_empty() {
                tracing::debug!(
                    path = %ignore_file.display(),
                    "Ignore file has no patterns, using fallback"
                );
                fallback.to_vec()
            } else {
                patterns
            }
        }
        Err(err) => {
            tracing::debug!(
                path = %ignore_file.display(),
                %err,
                "No ignore file found, using fallback patterns"
            );
            fallback.to_vec()
        }
    }
}

/// Parse ignore-file content into a pattern list, preserving file order.
/// Lines are trimmed; blank lines and `#` comments are dropped.
pub fn parse_ignore_content(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
