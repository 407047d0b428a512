//! # faction-draft
//!
//! Turn-order shuffling and faction drafting for board game groups.
//!
//! ## Design Principles
//!
//! 1. **Games are configuration**: factions come from an injectable
//!    `Catalog`, never from the draft logic.
//!
//! 2. **Pure editing**: participant list edits are state transitions that
//!    return a new list; focus handling is reported back to the view, not
//!    performed.
//!
//! 3. **Total operations**: empty lists, blank names and short faction pools
//!    all have defined results. Only catalog lookups can fail.
//!
//! ## Modules
//!
//! - `core`: participant/faction/game names, catalog, RNG
//! - `editor`: participant slot list and form events
//! - `factions`: faction selection and the two-round draft
//! - `session`: view state for one draft

pub mod core;
pub mod editor;
pub mod factions;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Catalog, CatalogError, DraftRng, Faction, GameEntry, GameId, Participant, TWILIGHT_IMPERIUM,
};

pub use crate::editor::{EditEvent, EditOutcome, Focus, ParticipantList};

pub use crate::factions::{
    Assignment, AssignmentEntry, AssignmentPolicy, FactionAssigner, FactionSelection,
};

pub use crate::session::Session;
