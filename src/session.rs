//! One visit to the draft page.
//!
//! `Session` owns all view state for a single draft: the chosen game, the
//! participant editor, the shuffled turn order, faction checkboxes and the
//! latest assignment. Nothing outlives the session.
//!
//! ## Flow
//!
//! 1. `select_game` shows the participant editor.
//! 2. `edit` applies form events; deleting a slot drops back to an
//!    unrandomized turn order and hides the faction list.
//! 3. `randomize` shuffles the committed names into a turn order and shows
//!    the faction list (all factions selected when it first appears).
//! 4. `toggle_faction` / `assign` run the draft.
//!
//! ```
//! use faction_draft::core::{Catalog, DraftRng, TWILIGHT_IMPERIUM};
//! use faction_draft::editor::EditEvent;
//! use faction_draft::session::Session;
//!
//! let mut session = Session::new(Catalog::builtin(), DraftRng::new(7));
//! session.select_game(TWILIGHT_IMPERIUM).unwrap();
//!
//! session.edit(EditEvent::Changed(0, "Alice".into()));
//! session.edit(EditEvent::Enter(0));
//! session.edit(EditEvent::Changed(1, "Bob".into()));
//!
//! assert_eq!(session.randomize().unwrap().len(), 2);
//! let assignment = session.assign().unwrap();
//! assert_eq!(assignment.total(), 4);
//! ```

use log::{debug, info};

use crate::core::{Catalog, CatalogError, DraftRng, Faction, GameId, Participant};
use crate::editor::{self, EditEvent, Focus, ParticipantList};
use crate::factions::{Assignment, FactionAssigner, FactionSelection};

/// Text shown for a participant who drew nothing.
pub const NO_FACTION: &str = "no faction assigned";

/// View state for one draft.
#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    rng: DraftRng,
    assigner: FactionAssigner,
    game: Option<GameId>,
    editor: ParticipantList,
    turn_order: Vec<Participant>,
    randomized: bool,
    /// Game whose factions `selection` was built from.
    selection_game: Option<GameId>,
    selection: FactionSelection,
    assignment: Assignment,
}

impl Session {
    /// Create a session over `catalog`. No game is selected yet.
    #[must_use]
    pub fn new(catalog: Catalog, rng: DraftRng) -> Self {
        Self {
            catalog,
            rng,
            assigner: FactionAssigner::default(),
            game: None,
            editor: ParticipantList::new(),
            turn_order: Vec::new(),
            randomized: false,
            selection_game: None,
            selection: FactionSelection::default(),
            assignment: Assignment::default(),
        }
    }

    /// Use a specific assigner configuration.
    #[must_use]
    pub fn with_assigner(mut self, assigner: FactionAssigner) -> Self {
        self.assigner = assigner;
        self
    }

    /// Pick the game to draft for.
    pub fn select_game(&mut self, game: impl Into<String>) -> Result<(), CatalogError> {
        let game = GameId::new(game);
        if !self.catalog.contains(&game) {
            return Err(CatalogError::UnknownGame(game.0));
        }
        debug!("selected game {}", game);
        if self.selection_game.as_ref().is_some_and(|shown| *shown != game) {
            self.randomized = false;
        }
        self.game = Some(game);
        Ok(())
    }

    /// Apply one participant form event.
    ///
    /// Returns the slot to focus after the view has re-rendered.
    pub fn edit(&mut self, event: EditEvent) -> Option<Focus> {
        let outcome = editor::apply(&self.editor, event);
        self.editor = outcome.list;
        if outcome.removed {
            self.turn_order = self.editor.commit();
            self.randomized = false;
            debug!("slot removed, turn order reset to {} names", self.turn_order.len());
        }
        outcome.focus
    }

    /// Reset the participant form to a single empty slot.
    pub fn clear(&mut self) {
        self.editor = self.editor.clear();
    }

    /// Shuffle the named participants into a turn order.
    ///
    /// Returns `None` if no game is selected. The faction list is rebuilt,
    /// all selected, only when it was not already on screen for this game;
    /// otherwise the checkboxes and the last assignment are kept.
    pub fn randomize(&mut self) -> Option<&[Participant]> {
        let game = self.game.clone()?;
        let was_shown = self.show_factions();

        let committed = self.editor.commit();
        self.turn_order = self.rng.shuffled(&committed);
        self.randomized = true;
        info!("randomized turn order of {} participants", self.turn_order.len());

        if !was_shown || self.selection_game.as_ref() != Some(&game) {
            let factions = self.catalog.factions(&game).ok()?;
            self.selection = FactionSelection::from_catalog(factions);
            self.assignment = Assignment::default();
            self.selection_game = Some(game);
        }
        Some(&self.turn_order)
    }

    /// Whether the faction list is on screen.
    #[must_use]
    pub fn show_factions(&self) -> bool {
        self.randomized && !self.turn_order.is_empty()
    }

    /// Flip faction `index`'s checkbox. `None` when out of range.
    pub fn toggle_faction(&mut self, index: usize) -> Option<bool> {
        self.selection.toggle(index)
    }

    /// Set a faction's checkbox by display name. False if there is no such faction.
    pub fn set_faction_selected(&mut self, name: &str, selected: bool) -> bool {
        self.selection.set_selected_by_name(name, selected)
    }

    /// Draft factions for the current turn order, replacing any previous result.
    ///
    /// `None` while the faction list is hidden.
    pub fn assign(&mut self) -> Option<&Assignment> {
        if !self.show_factions() {
            return None;
        }
        self.assignment = self.assigner.assign(&self.turn_order, &self.selection, &mut self.rng);
        Some(&self.assignment)
    }

    /// One line per participant in turn order: `"<name>: f1, f2"`.
    ///
    /// Empty until the first assignment.
    #[must_use]
    pub fn assignment_lines(&self) -> Vec<String> {
        if self.assignment.is_empty() {
            return Vec::new();
        }
        let drafted_for_turn_order = self
            .assignment
            .iter()
            .map(|e| &e.participant)
            .eq(self.turn_order.iter());
        if drafted_for_turn_order {
            return self
                .assignment
                .iter()
                .map(|e| render_line(&e.participant, &e.factions))
                .collect();
        }
        // Kept across a re-randomize: entries follow the old order.
        self.turn_order
            .iter()
            .map(|p| render_line(p, self.assignment.get(p.name()).unwrap_or_default()))
            .collect()
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameId> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn participants(&self) -> &ParticipantList {
        &self.editor
    }

    #[must_use]
    pub fn turn_order(&self) -> &[Participant] {
        &self.turn_order
    }

    #[must_use]
    pub fn selection(&self) -> &FactionSelection {
        &self.selection
    }

    #[must_use]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Seed of the session RNG, for replaying a draft.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

fn render_line(participant: &Participant, factions: &[Faction]) -> String {
    if factions.is_empty() {
        return format!("{}: {}", participant, NO_FACTION);
    }
    let names: Vec<_> = factions.iter().map(Faction::name).collect();
    format!("{}: {}", participant, names.join(", "))
}
