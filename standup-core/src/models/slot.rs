use serde::{Deserialize, Serialize};

/// Decoration applied when a slot label is rendered as a heading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeaderStyle {
    #[default]
    #[serde(rename = "plain", alias = "none")]
    Plain,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "heading-2", alias = "##")]
    Heading2,
    #[serde(rename = "heading-3", alias = "###")]
    Heading3,
}

impl HeaderStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" | "none" => Some(Self::Plain),
            "bold" => Some(Self::Bold),
            "heading-2" | "##" => Some(Self::Heading2),
            "heading-3" | "###" => Some(Self::Heading3),
            _ => None,
        }
    }

    /// Wrap a label in this style's markdown decoration.
    pub fn decorate(&self, label: &str) -> String {
        match self {
            Self::Plain => label.to_string(),
            Self::Bold => format!("**{}**", label),
            Self::Heading2 => format!("## {}", label),
            Self::Heading3 => format!("### {}", label),
        }
    }
}

/// One labeled section position of a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotConfig {
    /// Header text shown for this section.
    pub label: String,
    /// Hidden slots keep their content but are skipped by rendering and
    /// role inference.
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub header_style: HeaderStyle,
}

fn default_true() -> bool {
    true
}

impl SlotConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: true,
            header_style: HeaderStyle::Plain,
        }
    }
}
