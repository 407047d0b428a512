//! Core types: names, game catalog, randomness.
//!
//! Everything else in the crate is built from these. Games are configured
//! through a `Catalog` rather than hardcoded in the draft logic.

pub mod catalog;
pub mod names;
pub mod rng;

pub use catalog::{Catalog, CatalogError, GameEntry, TWILIGHT_IMPERIUM};
pub use names::{BlankName, Faction, GameId, Participant};
pub use rng::DraftRng;
