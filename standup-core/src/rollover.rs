//! Moving "newer period" content into the "older period" slot.

use crate::error::NoteError;
use crate::models::NoteState;
use crate::roles::RoleAssignment;

/// Whether rolling over would overwrite content in `older_slot`.
///
/// Callers ask the user for confirmation when this is true. Slots that do
/// not exist hold nothing.
pub fn has_conflict(older_slot: usize, state: &NoteState, bullet_mode: bool) -> bool {
    state
        .section(older_slot)
        .is_some_and(|section| section.has_content(bullet_mode))
}

/// Copy the live content of `newer_slot` into `older_slot` and clear
/// `newer_slot`. Other slots are returned unchanged.
///
/// Only the representation selected by `bullet_mode` is touched.
pub fn rollover(
    older_slot: usize,
    newer_slot: usize,
    state: &NoteState,
    bullet_mode: bool,
) -> Result<NoteState, NoteError> {
    let slot_count = state.sections.len();
    for slot in [older_slot, newer_slot] {
        if slot >= slot_count {
            return Err(NoteError::InvalidSlot { slot, slot_count });
        }
    }
    if older_slot == newer_slot {
        return Err(NoteError::SameSlot(older_slot));
    }

    let mut next = state.clone();
    let newer = &state.sections[newer_slot];
    if bullet_mode {
        next.sections[older_slot].bullets = newer.bullets.clone();
    } else {
        next.sections[older_slot].text = newer.text.clone();
    }
    next.sections[newer_slot].clear(bullet_mode);

    tracing::debug!(
        "Rolled section {} into section {}",
        newer_slot,
        older_slot
    );
    Ok(next)
}

impl RoleAssignment {
    /// Roll over using inferred roles; fails when they are undetermined.
    pub fn rollover(&self, state: &NoteState, bullet_mode: bool) -> Result<NoteState, NoteError> {
        let (older, newer) = self.pair().ok_or(NoteError::RolesUndetermined)?;
        rollover(older, newer, state, bullet_mode)
    }

    pub fn has_conflict(&self, state: &NoteState, bullet_mode: bool) -> bool {
        self.older_slot
            .is_some_and(|older| has_conflict(older, state, bullet_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionContent;

    fn bullet_state() -> NoteState {
        NoteState {
            sections: vec![
                SectionContent::from_bullets(["fixed bug"]),
                SectionContent::default(),
                SectionContent::from_bullets(["waiting on design"]),
            ],
        }
    }

    #[test]
    fn moves_bullets_and_clears_source() {
        let next = rollover(1, 0, &bullet_state(), true).unwrap();
        assert_eq!(next.sections[1].bullets, vec!["fixed bug"]);
        assert!(next.sections[0].bullets.is_empty());
        assert_eq!(next.sections[2], bullet_state().sections[2]);
    }

    #[test]
    fn moves_text_and_leaves_bullets_alone() {
        let state = NoteState {
            sections: vec![
                SectionContent {
                    text: "old".to_string(),
                    bullets: vec!["kept".to_string()],
                },
                SectionContent::from_text("new work"),
            ],
        };
        let next = rollover(0, 1, &state, false).unwrap();
        assert_eq!(next.sections[0].text, "new work");
        assert_eq!(next.sections[0].bullets, vec!["kept"]);
        assert!(next.sections[1].text.is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let state = bullet_state();
        let _ = rollover(1, 0, &state, true).unwrap();
        assert_eq!(state, bullet_state());
    }

    #[test]
    fn rejects_bad_slots() {
        let state = bullet_state();
        assert_eq!(
            rollover(5, 0, &state, true),
            Err(NoteError::InvalidSlot {
                slot: 5,
                slot_count: 3
            })
        );
        assert_eq!(rollover(1, 1, &state, true), Err(NoteError::SameSlot(1)));
    }

    #[test]
    fn undetermined_roles_are_rejected() {
        let roles = RoleAssignment {
            older_slot: Some(1),
            newer_slot: None,
        };
        assert_eq!(
            roles.rollover(&bullet_state(), true),
            Err(NoteError::RolesUndetermined)
        );
    }

    #[test]
    fn conflict_follows_bullet_mode() {
        let state = bullet_state();
        assert!(has_conflict(0, &state, true));
        assert!(!has_conflict(0, &state, false));
        assert!(!has_conflict(1, &state, true));
        assert!(!has_conflict(9, &state, true));
    }
}
