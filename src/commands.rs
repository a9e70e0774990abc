//! Command implementations behind the CLI.
//!
//! Each command takes the loaded configuration plus its inputs and returns
//! the text to print, so they can be exercised without a terminal.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use standup_core::models::{NoteConfig, NoteState};
use standup_core::render::render_markdown;
use standup_core::{parse_with_options, ParseOptions, RoleAssignment};

/// Parse pasted text and return the update as pretty JSON.
pub fn parse(config: &NoteConfig, text: &str, bullet_mode: Option<bool>) -> Result<String> {
    let labels = config.labels();
    let update = parse_with_options(text, &labels, ParseOptions { bullet_mode });
    if update.is_empty() {
        tracing::info!("No section headers recognized");
    }
    for (slot, label) in update.renames() {
        tracing::info!("Section {} header was written as {:?}", slot, label);
    }
    serde_json::to_string_pretty(&update).context("Failed to serialize parsed update")
}

/// Report which slots play the older and newer roles.
pub fn roles(config: &NoteConfig) -> Result<String> {
    let roles = RoleAssignment::from_config(config);
    serde_json::to_string_pretty(&roles).context("Failed to serialize roles")
}

/// Roll the newer section into the older one.
///
/// Refuses to overwrite existing older content unless `confirmed`.
pub fn rollover(config: &NoteConfig, state_json: &str, confirmed: bool) -> Result<String> {
    let state = read_state(config, state_json)?;
    let roles = RoleAssignment::from_config(config);
    if !roles.is_determined() {
        bail!(
            "Cannot tell which section is yesterday and which is today from the current labels"
        );
    }
    if roles.has_conflict(&state, config.bullet_mode) && !confirmed {
        bail!("The older section already has content; pass --yes to overwrite it");
    }

    let next = roles.rollover(&state, config.bullet_mode)?;
    serde_json::to_string_pretty(&next).context("Failed to serialize note state")
}

/// Render a note as markdown, optionally under a dated title.
pub fn render(config: &NoteConfig, state_json: &str, date: Option<NaiveDate>) -> Result<String> {
    let state = read_state(config, state_json)?;
    let body = render_markdown(config, &state);
    Ok(match date {
        Some(date) => format!("{}\n\n{}", title_for(date), body),
        None => body,
    })
}

/// Title line placed above a rendered note.
pub fn title_for(date: NaiveDate) -> String {
    format!("Standup for {}", date.format("%A, %B %-d, %Y"))
}

fn read_state(config: &NoteConfig, state_json: &str) -> Result<NoteState> {
    let state: NoteState =
        serde_json::from_str(state_json).context("Failed to parse note state")?;
    if state.sections.len() != config.slot_count() {
        return Err(standup_core::NoteError::SlotCountMismatch {
            expected: config.slot_count(),
            found: state.sections.len(),
        }
        .into());
    }
    Ok(state)
}
