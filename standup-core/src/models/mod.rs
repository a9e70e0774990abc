//! Data model for structured standup notes.
//!
//! # Core Concepts
//!
//! ## Configuration
//!
//! - [`SlotConfig`]: one labeled section position (label, visibility, header style).
//! - [`NoteConfig`]: the immutable snapshot every operation receives: slots,
//!   display order and the global bullet mode.
//!
//! ## Content
//!
//! - [`SectionContent`]: text and bullets for one slot; which one is live is
//!   decided by the bullet mode.
//! - [`NoteState`]: the live content of every slot.
//!
//! ## Transient
//!
//! - [`ParsedUpdate`]: result of parsing one pasted block. Either applied
//!   wholesale to a [`NoteState`] or discarded.

mod config;
mod slot;
mod state;
mod update;

pub use config::*;
pub use slot::*;
pub use state::*;
pub use update::*;
