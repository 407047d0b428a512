//! Participant form editing.
//!
//! `slots` holds the pure list transitions, `input` maps key and text events
//! onto them and reports where focus should go next.

pub mod input;
pub mod slots;

pub use input::{apply, EditEvent, EditOutcome, Focus};
pub use slots::ParticipantList;
