//! Result of a faction draft.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Faction, Participant};

/// Factions drawn by one participant, in the order they were drawn.
pub type Draw = SmallVec<[Faction; 2]>;

/// One participant's line in the assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub participant: Participant,
    pub factions: Draw,
}

/// Participant -> drawn factions.
///
/// Holds one entry per participant handed to the assigner, in that order.
/// Duplicate names get separate entries; name lookup returns the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    entries: Vec<AssignmentEntry>,
}

impl Assignment {
    /// One empty entry per participant.
    #[must_use]
    pub fn empty_for(participants: &[Participant]) -> Self {
        Self {
            entries: participants
                .iter()
                .map(|p| AssignmentEntry {
                    participant: p.clone(),
                    factions: Draw::new(),
                })
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, seat: usize, faction: Faction) {
        self.entries[seat].factions.push(faction);
    }

    /// Factions drawn by the participant called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Faction]> {
        self.entries
            .iter()
            .find(|e| e.participant.name() == name)
            .map(|e| e.factions.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssignmentEntry> {
        self.entries.iter()
    }

    /// Number of factions handed out in total.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.factions.len()).sum()
    }

    /// Every drawn faction, in entry order.
    pub fn factions(&self) -> impl Iterator<Item = &Faction> {
        self.entries.iter().flat_map(|e| e.factions.iter())
    }

    /// Number of participant entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
