//! Which configured section means "older period" and which means "newer".

use serde::{Deserialize, Serialize};

use crate::models::NoteConfig;
use crate::parser::heuristics::{matches_role, Role};

/// Outcome of role inference.
///
/// Each slot is set only when exactly one visible label fits its family.
/// Callers treat a missing slot as "rollover unavailable".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleAssignment {
    pub older_slot: Option<usize>,
    pub newer_slot: Option<usize>,
}

impl RoleAssignment {
    pub fn from_config(config: &NoteConfig) -> Self {
        infer_roles(&config.labels(), &config.visibility())
    }

    /// Both roles, when they are known and point at different slots.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match (self.older_slot, self.newer_slot) {
            (Some(older), Some(newer)) if older != newer => Some((older, newer)),
            _ => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        self.pair().is_some()
    }
}

/// Classify each visible label independently against the older and newer
/// families. A label may fit both; no precedence applies here.
///
/// Slots past the end of `visibility` count as visible.
pub fn infer_roles<S: AsRef<str>>(labels: &[S], visibility: &[bool]) -> RoleAssignment {
    let visible = |slot: &usize| visibility.get(*slot).copied().unwrap_or(true);
    let only = |role: Role| -> Option<usize> {
        let mut hits = (0..labels.len())
            .filter(visible)
            .filter(|&slot| matches_role(labels[slot].as_ref(), role));
        let first = hits.next()?;
        if hits.next().is_some() {
            return None;
        }
        Some(first)
    };

    let roles = RoleAssignment {
        older_slot: only(Role::Older),
        newer_slot: only(Role::Newer),
    };
    tracing::debug!(
        "Inferred roles older={:?} newer={:?}",
        roles.older_slot,
        roles.newer_slot
    );
    roles
}
