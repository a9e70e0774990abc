use serde::{Deserialize, Serialize};

use super::update::{bullets_to_text, text_to_bullets, ParsedUpdate};

/// Live content of one slot.
///
/// Both representations are kept so toggling bullet mode does not lose
/// anything; only the one selected by the bullet mode is considered live.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionContent {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl SectionContent {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bullets: Vec::new(),
        }
    }

    pub fn from_bullets<I, S>(bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: String::new(),
            bullets: bullets.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the representation selected by `bullet_mode` is non-empty.
    ///
    /// Whitespace counts: overwriting it still discards what the user typed.
    pub fn has_content(&self, bullet_mode: bool) -> bool {
        if bullet_mode {
            !self.bullets.is_empty()
        } else {
            !self.text.is_empty()
        }
    }

    pub fn clear(&mut self, bullet_mode: bool) {
        if bullet_mode {
            self.bullets.clear();
        } else {
            self.text.clear();
        }
    }
}

/// Content of every slot, indexed like the configuration's slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteState {
    pub sections: Vec<SectionContent>,
}

impl NoteState {
    pub fn empty(slot_count: usize) -> Self {
        Self {
            sections: vec![SectionContent::default(); slot_count],
        }
    }

    pub fn section(&self, slot: usize) -> Option<&SectionContent> {
        self.sections.get(slot)
    }

    /// Replace every slot's content with a parsed update.
    ///
    /// Content is converted into the representation selected by
    /// `bullet_mode`. Returns the `(slot, label)` renames the update suggests.
    pub fn apply(&mut self, update: &ParsedUpdate, bullet_mode: bool) -> Vec<(usize, String)> {
        if self.sections.len() < update.sections.len() {
            self.sections
                .resize(update.sections.len(), SectionContent::default());
        }

        for (slot, parsed) in update.sections.iter().enumerate() {
            let content = if bullet_mode {
                let bullets = if parsed.bullets.is_empty() {
                    text_to_bullets(&parsed.text)
                } else {
                    parsed.bullets.clone()
                };
                SectionContent::from_bullets(bullets)
            } else {
                let text = if parsed.bullets.is_empty() {
                    parsed.text.clone()
                } else {
                    bullets_to_text(&parsed.bullets)
                };
                SectionContent::from_text(text)
            };
            self.sections[slot] = content;
        }

        update
            .renames()
            .into_iter()
            .map(|(slot, label)| (slot, label.to_string()))
            .collect()
    }
}
