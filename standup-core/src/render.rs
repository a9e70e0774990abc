//! Markdown rendering of a note.
//!
//! The output is exactly what the parser reads back: one header line per
//! visible slot in display order, followed by its bullets or text.

use crate::models::{NoteConfig, NoteState};

/// Render visible sections of `state` in the configured order.
///
/// Example output with bold headers in bullet mode:
/// ```text
/// **Yesterday**
/// - fixed login bug
///
/// **Today**
/// - writing tests
/// ```
pub fn render_markdown(config: &NoteConfig, state: &NoteState) -> String {
    let blocks: Vec<String> = config
        .visible_in_order()
        .into_iter()
        .map(|slot| render_section(config, state, slot))
        .collect();

    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

fn render_section(config: &NoteConfig, state: &NoteState, slot: usize) -> String {
    let slot_config = &config.slots[slot];
    let mut block = slot_config.header_style.decorate(slot_config.label.trim());

    let Some(content) = state.section(slot) else {
        return block;
    };

    if config.bullet_mode {
        for bullet in content.bullets.iter().filter(|b| !b.trim().is_empty()) {
            block.push_str("\n- ");
            block.push_str(bullet.trim());
        }
    } else {
        let text = content.text.trim();
        if !text.is_empty() {
            block.push('\n');
            block.push_str(text);
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeaderStyle, SectionContent};

    fn config() -> NoteConfig {
        NoteConfig::with_labels(["Yesterday", "Today", "Blockers"])
    }

    #[test]
    fn renders_text_sections() {
        let state = NoteState {
            sections: vec![
                SectionContent::from_text("shipped auth"),
                SectionContent::from_text("  tests\nmore tests "),
                SectionContent::default(),
            ],
        };
        assert_eq!(
            render_markdown(&config(), &state),
            "Yesterday\nshipped auth\n\nToday\ntests\nmore tests\n\nBlockers\n"
        );
    }

    #[test]
    fn renders_bullets_with_styles_and_order() {
        let mut config = config().bullet_mode(true);
        config.slots[0].header_style = HeaderStyle::Bold;
        config.slots[1].header_style = HeaderStyle::Heading2;
        config.slots[2].visible = false;
        config.order = vec![1, 0, 2];

        let state = NoteState {
            sections: vec![
                SectionContent::from_bullets(["a", "b"]),
                SectionContent::from_bullets(["c"]),
                SectionContent::from_bullets(["hidden"]),
            ],
        };
        assert_eq!(
            render_markdown(&config, &state),
            "## Today\n- c\n\n**Yesterday**\n- a\n- b\n"
        );
    }

    #[test]
    fn missing_state_renders_headers_only() {
        assert_eq!(
            render_markdown(&config(), &NoteState::default()),
            "Yesterday\n\nToday\n\nBlockers\n"
        );
    }
}
