//! Key and text events from the participant form.
//!
//! `apply` turns one UI event into the next `ParticipantList` plus an
//! optional focus request. The list operations know nothing about focus; the
//! view applies `EditOutcome::focus` after it has rendered the new list.

use log::debug;
use serde::{Deserialize, Serialize};

use super::slots::ParticipantList;

/// A discrete edit event on slot `index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditEvent {
    /// The text field changed.
    Changed(usize, String),
    /// Enter: confirm the current entry and open a new slot after it.
    Enter(usize),
    /// Backspace pressed.
    Backspace(usize),
    /// Delete pressed.
    Delete(usize),
}

/// Slot the view should focus once the new list is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus(pub usize);

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub list: ParticipantList,
    pub focus: Option<Focus>,
    /// A slot was deleted. Owners of derived state (turn order) react to this.
    pub removed: bool,
}

/// Apply `event` to `list`.
///
/// ```
/// use faction_draft::editor::{apply, EditEvent, Focus, ParticipantList};
///
/// let out = apply(&ParticipantList::new(), EditEvent::Enter(0));
/// assert_eq!(out.list.len(), 2);
/// assert_eq!(out.focus, Some(Focus(1)));
///
/// let back = apply(&out.list, EditEvent::Backspace(1));
/// assert_eq!(back.list.len(), 1);
/// assert_eq!(back.focus, Some(Focus(0)));
/// ```
#[must_use]
pub fn apply(list: &ParticipantList, event: EditEvent) -> EditOutcome {
    match event {
        EditEvent::Changed(index, text) => EditOutcome {
            list: list.update(index, text),
            focus: None,
            removed: false,
        },
        EditEvent::Enter(index) => {
            let list = list.insert_after(index);
            let next = index.saturating_add(1).min(list.len() - 1);
            debug!("slot {} confirmed, opening slot {}", index, next);
            EditOutcome {
                list,
                focus: Some(Focus(next)),
                removed: false,
            }
        }
        EditEvent::Backspace(index) | EditEvent::Delete(index) => {
            if list.get(index) != Some("") {
                return EditOutcome {
                    list: list.clone(),
                    focus: None,
                    removed: false,
                };
            }
            let next = list.remove_empty(index);
            let removed = next.len() < list.len();
            if removed {
                debug!("removed empty slot {}", index);
            }
            EditOutcome {
                list: next,
                focus: index.checked_sub(1).map(Focus),
                removed,
            }
        }
    }
}
