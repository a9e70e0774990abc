use serde::{Deserialize, Serialize};

/// Content extracted for one slot from pasted text.
///
/// `text` and `bullets` are mutually exclusive: at most one is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedSection {
    pub text: String,
    pub bullets: Vec<String>,
    /// Header wording found in the pasted text when it differs from the
    /// slot's configured label. Callers may offer to rename the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_label: Option<String>,
}

impl ParsedSection {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.bullets.is_empty()
    }

    /// Rewrite a text block as bullets, one per non-blank line.
    pub(crate) fn into_bullets(mut self) -> Self {
        if !self.text.is_empty() {
            self.bullets = text_to_bullets(&self.text);
            self.text.clear();
        }
        self
    }

    /// Rewrite a bullet list as `- item` lines of text.
    pub(crate) fn into_text(mut self) -> Self {
        if !self.bullets.is_empty() {
            self.text = bullets_to_text(&self.bullets);
            self.bullets.clear();
        }
        self
    }
}

/// Result of parsing one pasted block, one entry per configured slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedUpdate {
    pub sections: Vec<ParsedSection>,
}

impl ParsedUpdate {
    pub fn empty(slot_count: usize) -> Self {
        Self {
            sections: vec![ParsedSection::default(); slot_count],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(ParsedSection::is_empty)
    }

    /// Slots whose header wording differed from the configured label.
    pub fn renames(&self) -> Vec<(usize, &str)> {
        self.sections
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| s.detected_label.as_deref().map(|label| (slot, label)))
            .collect()
    }
}

pub(crate) fn text_to_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn bullets_to_text(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|b| format!("- {}", b))
        .collect::<Vec<_>>()
        .join("\n")
}
