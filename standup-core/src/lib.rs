//! Core logic for structured standup notes.
//!
//! Everything in this crate is a pure function over a configuration snapshot
//! and some text or note state. Nothing here persists, renders to a screen,
//! or performs I/O; the `standup` binary owns all of that.
//!
//! - [`parser`]: turns pasted free text into a [`ParsedUpdate`](models::ParsedUpdate).
//! - [`roles`]: decides which configured slot means "older period" and which
//!   means "newer period".
//! - [`rollover`]: moves newer content into the older slot.
//! - [`render`]: produces markdown that the parser reads back.

pub mod error;
pub mod models;
pub mod parser;
pub mod render;
pub mod roles;
pub mod rollover;

pub use error::NoteError;
pub use parser::{parse, parse_with_options, ParseOptions};
pub use roles::{infer_roles, RoleAssignment};
pub use rollover::{has_conflict, rollover};
