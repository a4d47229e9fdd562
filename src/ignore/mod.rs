mod matcher;
mod resolver;

pub use matcher::IgnoreSet;
pub use resolver::{parse_ignore_content, resolve_patterns, DEFAULT_FALLBACK_PATTERNS};
