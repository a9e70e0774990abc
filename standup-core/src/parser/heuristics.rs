//! Guessing the role of header lines that do not match a configured label.

use std::sync::LazyLock;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Semantic role a section header can play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// What happened before ("Yesterday", "Worked on").
    Older,
    /// What is happening now ("Today", "Working on").
    Newer,
    Blockers,
}

impl Role {
    /// Evaluation order when a line fits more than one family.
    pub const PRECEDENCE: [Role; 3] = [Role::Older, Role::Newer, Role::Blockers];

    fn patterns(&self) -> &'static RegexSet {
        match self {
            Self::Older => &OLDER_PATTERNS,
            Self::Newer => &NEWER_PATTERNS,
            Self::Blockers => &BLOCKER_PATTERNS,
        }
    }
}

static OLDER_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)\byesterday\b",
        r"(?i)\bworked\s+on\b",
        r"(?i)\bprevious(ly)?\b",
        r"(?i)\blast\s+(week|day|sprint|time)\b",
        r"(?i)\bwhat\s+did\s+you\b",
        r"(?i)\bwhat\s+have\s+you\b",
        r"(?i)\b(completed|finished|accomplished)\b",
        r"(?i)\bdone\b",
    ])
    .expect("older-period patterns are valid")
});

static NEWER_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)\btoday\b",
        r"(?i)\bworking\s+on\b",
        r"(?i)\bcurrent(ly)?\b",
        r"(?i)\bnow\b",
        r"(?i)\bthis\s+(week|day|sprint)\b",
        r"(?i)\bwhat\s+(are|will)\s+you\b",
        r"(?i)\bplanning\s+to\b",
        r"(?i)\bgoing\s+to\b",
    ])
    .expect("newer-period patterns are valid")
});

static BLOCKER_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)\bblockers?\b",
        r"(?i)\bissues?\b",
        r"(?i)\bchallenges?\b",
        r"(?i)\bimpediments?\b",
        r"(?i)\bproblems?\b",
        r"(?i)\broadblocks?\b",
        r"(?i)\bstuck\s+on\b",
        r"(?i)\bneeds?\s+help\b",
    ])
    .expect("blocker patterns are valid")
});

const BULLET_MARKERS: [&str; 3] = ["- ", "* ", "• "];
const MAX_HEADER_CHARS: usize = 100;

/// Strip a bullet marker from a trimmed line, returning the item text.
pub fn bullet_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    BULLET_MARKERS
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
        .map(str::trim)
}

/// Remove markdown header decoration and a trailing colon.
///
/// `"## Today:"`, `"**Today**"` and `"**Today:**"` all become `"Today"`.
pub fn strip_decoration(line: &str) -> &str {
    let mut s = line.trim();
    if let Some(rest) = s.strip_prefix("**") {
        s = rest;
    } else {
        let hashes = s.len() - s.trim_start_matches('#').len();
        if (1..=3).contains(&hashes) {
            s = &s[hashes..];
        }
    }
    s = s.trim();
    s = s.strip_suffix(':').unwrap_or(s).trim_end();
    s = s.strip_suffix("**").unwrap_or(s).trim_end();
    s = s.strip_suffix(':').unwrap_or(s).trim_end();
    s
}

/// Whether a line has the shape of a header: short, not a bullet, and not a
/// sentence.
pub fn looks_like_header(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || bullet_item(trimmed).is_some() {
        return false;
    }
    if trimmed.chars().count() >= MAX_HEADER_CHARS {
        return false;
    }
    let text = strip_decoration(trimmed);
    !text.is_empty() && !text.ends_with('.') && !text.contains(". ")
}

/// Whether `text` contains any pattern of the given family.
pub fn matches_role(text: &str, role: Role) -> bool {
    role.patterns().is_match(strip_decoration(text))
}

/// Classify a pasted line that did not match any configured label.
///
/// Returns `None` for lines that are not header-shaped or fit no family.
pub fn classify_header(line: &str) -> Option<Role> {
    if !looks_like_header(line) {
        return None;
    }
    Role::PRECEDENCE
        .into_iter()
        .find(|role| matches_role(line, *role))
}

/// The family a configured label belongs to, using the same precedence as
/// [`classify_header`] but without the header-shape requirement.
pub fn label_role(label: &str) -> Option<Role> {
    Role::PRECEDENCE
        .into_iter()
        .find(|role| matches_role(label, *role))
}
