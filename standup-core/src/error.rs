use thiserror::Error;

/// Errors raised by configuration validation and rollover preconditions.
///
/// Parsing never fails: text without recognizable structure simply yields
/// empty sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("Slot {slot} does not exist (note has {slot_count} slots)")]
    InvalidSlot { slot: usize, slot_count: usize },

    #[error("Older and newer roles both point at slot {0}")]
    SameSlot(usize),

    #[error("Section roles could not be determined from the current labels")]
    RolesUndetermined,

    #[error("Invalid section order: {0}")]
    InvalidOrder(String),

    #[error("At least one section must remain visible")]
    NoVisibleSlot,

    #[error("Expected {expected} sections, found {found}")]
    SlotCountMismatch { expected: usize, found: usize },
}
