//! Exact matching of a line against one configured label.

use regex::Regex;

/// Predicate that recognizes a line consisting solely of a label.
///
/// The label may be wrapped in `**bold**`, prefixed with one to three `#`,
/// and followed by a colon. Matching is case-insensitive and anchored to the
/// whole line, so a label quoted inside a sentence never counts.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    pattern: Option<Regex>,
}

impl HeaderMatcher {
    pub fn new(label: &str) -> Self {
        let trimmed = label.trim();
        // An empty label would match every decoration-only line.
        let pattern = if trimmed.is_empty() {
            None
        } else {
            let source = format!(
                r"(?i)^\s*(\*\*|#{{1,3}}\s*)?{}(\*\*)?\s*:?\s*$",
                regex::escape(trimmed)
            );
            match Regex::new(&source) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!("Label {:?} cannot be matched: {}", label, e);
                    None
                }
            }
        };

        Self { pattern }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(line))
    }
}
