use serde::{Deserialize, Serialize};

use super::slot::SlotConfig;
use crate::error::NoteError;

pub const DEFAULT_LABELS: [&str; 3] = [
    "What are you working on today?",
    "What did you work on yesterday?",
    "What are your blockers?",
];

/// Snapshot of everything the core needs to know about a user's note layout.
///
/// Callers own this record and pass it by reference into every operation;
/// nothing in the crate keeps a copy between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteConfig {
    pub slots: Vec<SlotConfig>,
    /// Display order of slots, a permutation of slot indices.
    pub order: Vec<usize>,
    /// When true every section is a bullet list; otherwise free text.
    #[serde(default)]
    pub bullet_mode: bool,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self::with_labels(DEFAULT_LABELS)
    }
}

impl NoteConfig {
    /// Build a config with visible, plain slots in natural order.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<SlotConfig> = labels.into_iter().map(SlotConfig::new).collect();
        let order = (0..slots.len()).collect();
        Self {
            slots,
            order,
            bullet_mode: false,
        }
    }

    pub fn bullet_mode(mut self, bullet_mode: bool) -> Self {
        self.bullet_mode = bullet_mode;
        self
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn visibility(&self) -> Vec<bool> {
        self.slots.iter().map(|s| s.visible).collect()
    }

    /// Check the structural invariants of the configuration.
    ///
    /// Empty or duplicated labels are allowed; they only make header matching
    /// ambiguous, so they are logged rather than rejected.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.slots.is_empty() {
            return Err(NoteError::InvalidOrder("note has no sections".to_string()));
        }
        if self.order.len() != self.slots.len() {
            return Err(NoteError::InvalidOrder(format!(
                "order lists {} sections but note has {}",
                self.order.len(),
                self.slots.len()
            )));
        }
        let mut seen = vec![false; self.slots.len()];
        for &slot in &self.order {
            match seen.get_mut(slot) {
                None => {
                    return Err(NoteError::InvalidOrder(format!(
                        "slot {} is out of range",
                        slot
                    )))
                }
                Some(true) => {
                    return Err(NoteError::InvalidOrder(format!(
                        "slot {} appears more than once",
                        slot
                    )))
                }
                Some(flag) => *flag = true,
            }
        }
        if !self.slots.iter().any(|s| s.visible) {
            return Err(NoteError::NoVisibleSlot);
        }

        for (i, slot) in self.slots.iter().enumerate() {
            if slot.label.trim().is_empty() {
                tracing::warn!("Section {} has an empty label", i);
            }
            let duplicate = self.slots[..i]
                .iter()
                .any(|other| other.label.trim().eq_ignore_ascii_case(slot.label.trim()));
            if duplicate {
                tracing::warn!("Section {} repeats the label {:?}", i, slot.label);
            }
        }

        Ok(())
    }

    /// Slot indices in display order, hidden slots skipped.
    pub fn visible_in_order(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&slot| self.slots.get(slot).is_some_and(|s| s.visible))
            .collect()
    }

    /// Move the entry at display position `from` to position `to`.
    pub fn move_slot(&mut self, from: usize, to: usize) -> Result<(), NoteError> {
        let len = self.order.len();
        if from >= len {
            return Err(NoteError::InvalidSlot {
                slot: from,
                slot_count: len,
            });
        }
        if to >= len {
            return Err(NoteError::InvalidSlot {
                slot: to,
                slot_count: len,
            });
        }
        let slot = self.order.remove(from);
        self.order.insert(to, slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NoteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.labels(), DEFAULT_LABELS.to_vec());
        assert_eq!(config.order, vec![0, 1, 2]);
        assert!(!config.bullet_mode);
    }

    #[test]
    fn rejects_order_with_duplicates() {
        let mut config = NoteConfig::default();
        config.order = vec![0, 0, 2];
        assert!(matches!(config.validate(), Err(NoteError::InvalidOrder(_))));
    }

    #[test]
    fn rejects_order_with_gap() {
        let mut config = NoteConfig::default();
        config.order = vec![0, 1, 3];
        assert!(matches!(config.validate(), Err(NoteError::InvalidOrder(_))));

        config.order = vec![0, 1];
        assert!(matches!(config.validate(), Err(NoteError::InvalidOrder(_))));
    }

    #[test]
    fn rejects_all_hidden() {
        let mut config = NoteConfig::default();
        for slot in &mut config.slots {
            slot.visible = false;
        }
        assert_eq!(config.validate(), Err(NoteError::NoVisibleSlot));
    }

    #[test]
    fn duplicate_labels_are_not_an_error() {
        let config = NoteConfig::with_labels(["Notes", "Notes", "Other"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn visible_in_order_skips_hidden() {
        let mut config = NoteConfig::default();
        config.order = vec![2, 0, 1];
        config.slots[0].visible = false;
        assert_eq!(config.visible_in_order(), vec![2, 1]);
    }

    #[test]
    fn move_slot_keeps_permutation() {
        let mut config = NoteConfig::default();
        config.move_slot(0, 2).unwrap();
        assert_eq!(config.order, vec![1, 2, 0]);
        config.move_slot(2, 0).unwrap();
        assert_eq!(config.order, vec![0, 1, 2]);
        assert!(config.move_slot(3, 0).is_err());
        assert!(config.validate().is_ok());
    }
}
