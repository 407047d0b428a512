//! Which catalog factions are eligible for the draft.

use serde::{Deserialize, Serialize};

use crate::core::Faction;

/// A faction and its checkbox state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionChoice {
    pub faction: Faction,
    pub selected: bool,
}

/// Selection flags over one game's factions, in catalog order.
///
/// Starts with every faction selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionSelection {
    choices: Vec<FactionChoice>,
}

impl FactionSelection {
    /// All factions of a catalog entry, all selected.
    #[must_use]
    pub fn from_catalog(factions: &[Faction]) -> Self {
        Self {
            choices: factions
                .iter()
                .map(|f| FactionChoice {
                    faction: f.clone(),
                    selected: true,
                })
                .collect(),
        }
    }

    /// Flip the flag of faction `index`.
    ///
    /// Returns the new flag, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let choice = self.choices.get_mut(index)?;
        choice.selected = !choice.selected;
        Some(choice.selected)
    }

    /// Set the flag of faction `index`. Out of range is ignored.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(choice) = self.choices.get_mut(index) {
            choice.selected = selected;
        }
    }

    /// Set the flag of the faction called `name`.
    ///
    /// Returns false if no faction has that name.
    pub fn set_selected_by_name(&mut self, name: &str, selected: bool) -> bool {
        match self.choices.iter_mut().find(|c| c.faction.name() == name) {
            Some(choice) => {
                choice.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) {
        for choice in &mut self.choices {
            choice.selected = true;
        }
    }

    /// Selected factions in catalog order.
    #[must_use]
    pub fn pool(&self) -> Vec<Faction> {
        self.choices
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.faction.clone())
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> Option<bool> {
        self.choices.get(index).map(|c| c.selected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactionChoice> {
        self.choices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
