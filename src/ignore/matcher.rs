use regex::Regex;

/// A compiled set of ignore patterns governing one render invocation.
///
/// Patterns use a gitignore subset: `*`, `?`, `[...]`/`[!...]` classes,
/// optional leading `/` (anchor to the root) and trailing `/` (named
/// directory and everything beneath it).
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    matchers: Vec<Regex>,
}

impl IgnoreSet {
    /// Compile a pattern set. A pattern that fails to compile is dropped
    /// and never matches; it must not abort the caller's traversal.
    pub fn new(patterns: &[String]) -> Self {
        let matchers = patterns
            .iter()
            .filter_map(|pattern| match compile_pattern(pattern) {
                Some(re) => Some(re),
                None => {
                    tracing::debug!(pattern = %pattern, "Skipping malformed ignore pattern");
                    None
                }
            })
            .collect();
        Self { matchers }
    }

    /// Whether a candidate path is excluded. The path is relative to the
    /// render root and uses forward slashes. A candidate is ignored if any
    /// pattern matches the bare path or the path prefixed with `/`.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        if self.matchers.is_empty() {
            return false;
        }
        let rooted = format!("/{}", rel_path);
        self.matchers
            .iter()
            .any(|re| re.is_match(rel_path) || re.is_match(&rooted))
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }
}

/// Translate one gitignore-subset pattern into a regex.
///
/// `*` becomes `.*` and so crosses path-segment boundaries, which full
/// gitignore forbids. The looser behavior is intentional and kept: it is
/// what gives `*.log` its match-at-any-depth semantics here.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let body = pattern.strip_suffix('/').unwrap_or(pattern);
    let (anchor, body) = match body.strip_prefix('/') {
        // Leading `/` pins the match to the root of the relative path.
        Some(rest) => ("^", rest),
        // Otherwise the pattern may match at any path-segment boundary.
        None => ("(?:^|/)", body),
    };

    let mut re = String::from(anchor);
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '[' => {
                re.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    re.push('^');
                }
                // Class contents pass through verbatim; an unclosed class
                // fails to compile below and the pattern is dropped.
                for c in chars.by_ref() {
                    re.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    // The match must end at the path's end or at a segment boundary, so
    // `*.log` excludes `run.log` but not `run.log.txt`. A trailing `/` in
    // the pattern reduces to the same anchor: the named directory matches
    // here and is pruned before any of its contents are visited.
    re.push_str("(?:$|/)");

    Regex::new(&re).ok()
}
