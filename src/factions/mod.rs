//! Faction selection and drafting.
//!
//! - `selection`: checkbox state over a game's factions
//! - `assigner`: the two-round draft
//! - `assignment`: who drew what

pub mod assigner;
pub mod assignment;
pub mod selection;

pub use assigner::{AssignmentPolicy, FactionAssigner, ROUNDS};
pub use assignment::{Assignment, AssignmentEntry, Draw};
pub use selection::{FactionChoice, FactionSelection};
