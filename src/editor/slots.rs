//! Participant slot list.
//!
//! `ParticipantList` is the editable list of name slots behind the
//! participant form. Every operation takes `&self` and returns the next list,
//! so the view can keep the previous state around for free: slots live in an
//! `im::Vector`, which clones in O(1).
//!
//! Invariant: a list always has at least one slot.

use im::Vector;
use serde::Serialize;

use crate::core::Participant;

/// Ordered name slots. A slot may be empty while the user is still typing.
///
/// ## Example
///
/// ```
/// use faction_draft::editor::ParticipantList;
///
/// let list = ParticipantList::new()
///     .update(0, "Alice")
///     .insert_after(0)
///     .update(1, "  ")
///     .insert_after(1)
///     .update(2, "Bob");
///
/// let names: Vec<_> = list.commit().iter().map(|p| p.name().to_owned()).collect();
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipantList {
    slots: Vector<String>,
}

impl Default for ParticipantList {
    fn default() -> Self {
        Self {
            slots: Vector::unit(String::new()),
        }
    }
}

impl ParticipantList {
    /// A list with a single empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing slot texts.
    ///
    /// An empty iterator gives the single-empty-slot list.
    pub fn from_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vector<String> = slots.into_iter().map(Into::into).collect();
        if slots.is_empty() {
            Self::default()
        } else {
            Self { slots }
        }
    }

    /// Insert an empty slot right after `index`.
    ///
    /// `index` past the end appends.
    #[must_use]
    pub fn insert_after(&self, index: usize) -> Self {
        let mut slots = self.slots.clone();
        let at = index.saturating_add(1).min(slots.len());
        slots.insert(at, String::new());
        Self { slots }
    }

    /// Replace the text of slot `index`. No validation; out of range is a no-op.
    #[must_use]
    pub fn update(&self, index: usize, value: impl Into<String>) -> Self {
        if index >= self.slots.len() {
            return self.clone();
        }
        Self {
            slots: self.slots.update(index, value.into()),
        }
    }

    /// Remove slot `index` if it is empty.
    ///
    /// No-op when the slot holds any text (whitespace included), when it is
    /// the only slot, or when `index` is out of range.
    #[must_use]
    pub fn remove_empty(&self, index: usize) -> Self {
        match self.slots.get(index) {
            Some(text) if text.is_empty() => self.remove(index),
            _ => self.clone(),
        }
    }

    /// Remove slot `index` regardless of its text, keeping at least one slot.
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        if self.slots.len() <= 1 || index >= self.slots.len() {
            return self.clone();
        }
        let mut slots = self.slots.clone();
        slots.remove(index);
        Self { slots }
    }

    /// Drop every entry, leaving one empty slot.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Participants named by the non-blank slots, in slot order.
    ///
    /// Pure projection: the slot texts themselves stay untrimmed.
    #[must_use]
    pub fn commit(&self) -> Vec<Participant> {
        self.slots.iter().filter_map(|s| Participant::parse(s)).collect()
    }

    /// Text of slot `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Iterate over slot texts.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Number of slots. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(|s| s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &ParticipantList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_new_has_one_empty_slot() {
        let list = ParticipantList::new();
        assert_eq!(texts(&list), vec![""]);
        assert!(list.is_blank());
    }

    #[test]
    fn test_insert_after() {
        let list = ParticipantList::new().insert_after(0);
        assert_eq!(texts(&list), vec!["", ""]);

        let list = ParticipantList::from_slots(["a", "b", "c"]).insert_after(0);
        assert_eq!(texts(&list), vec!["a", "", "b", "c"]);

        let list = ParticipantList::from_slots(["a"]).insert_after(10);
        assert_eq!(texts(&list), vec!["a", ""]);

        let list = ParticipantList::from_slots(["a"]).insert_after(usize::MAX);
        assert_eq!(texts(&list), vec!["a", ""]);
    }

    #[test]
    fn test_update_keeps_whitespace() {
        let list = ParticipantList::new().update(0, "  Al");
        assert_eq!(list.get(0), Some("  Al"));

        let unchanged = list.update(5, "x");
        assert_eq!(unchanged, list);
    }

    #[test]
    fn test_operations_do_not_touch_previous_state() {
        let before = ParticipantList::from_slots(["Alice"]);
        let after = before.insert_after(0).update(1, "Bob");

        assert_eq!(texts(&before), vec!["Alice"]);
        assert_eq!(texts(&after), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_remove_empty() {
        let list = ParticipantList::from_slots(["", ""]).remove_empty(0);
        assert_eq!(texts(&list), vec![""]);

        let list = ParticipantList::from_slots(["Alice", "", "Bob"]).remove_empty(1);
        assert_eq!(texts(&list), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_remove_empty_keeps_last_slot() {
        let list = ParticipantList::new();
        assert_eq!(list.remove_empty(0), list);
    }

    #[test]
    fn test_remove_empty_ignores_filled_slots() {
        let list = ParticipantList::from_slots(["Alice", " "]);
        assert_eq!(list.remove_empty(0), list);
        assert_eq!(list.remove_empty(1), list);
        assert_eq!(list.remove_empty(9), list);
    }

    #[test]
    fn test_clear() {
        let list = ParticipantList::from_slots(["a", "b", "", "d"]).clear();
        assert_eq!(texts(&list), vec![""]);
    }

    #[test]
    fn test_commit_filters_blank() {
        let list = ParticipantList::from_slots(["Alice", "", "  ", "Bob"]);
        let names: Vec<_> = list.commit().into_iter().map(|p| p.name().to_owned()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_from_empty_slots() {
        let list = ParticipantList::from_slots(Vec::<String>::new());
        assert_eq!(list.len(), 1);
    }
}
