//! Free text to structured sections.
//!
//! Pasted text is scanned line by line. A line opens a section when it is
//! exactly a configured label (see [`HeaderMatcher`]) or, failing that, when
//! the heuristic classifier recognizes it as a header for an unused slot.
//! Lines between headers are flushed into the open section as either a
//! bullet list or one paragraph.

mod extractor;
mod header;
pub mod heuristics;

pub use header::HeaderMatcher;
pub use heuristics::{classify_header, Role};

use crate::models::ParsedUpdate;
use extractor::SectionExtractor;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Force every section into one representation: `Some(true)` turns text
    /// blocks into bullets, `Some(false)` turns bullet lists into text.
    pub bullet_mode: Option<bool>,
}

impl ParseOptions {
    pub fn bullet_mode(bullet_mode: bool) -> Self {
        Self {
            bullet_mode: Some(bullet_mode),
        }
    }
}

/// Parse pasted text against the configured labels.
///
/// Never fails: text without recognizable headers yields all-empty sections.
pub fn parse<S: AsRef<str>>(text: &str, labels: &[S]) -> ParsedUpdate {
    parse_with_options(text, labels, ParseOptions::default())
}

pub fn parse_with_options<S: AsRef<str>>(
    text: &str,
    labels: &[S],
    options: ParseOptions,
) -> ParsedUpdate {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut update = SectionExtractor::new(labels, &lines).run(&lines);

    if let Some(bullet_mode) = options.bullet_mode {
        update.sections = update
            .sections
            .into_iter()
            .map(|s| if bullet_mode { s.into_bullets() } else { s.into_text() })
            .collect();
    }

    tracing::debug!(
        "Parsed {} lines into {} sections",
        lines.len(),
        update.sections.iter().filter(|s| !s.is_empty()).count()
    );
    update
}
