//! Two-round faction draft.
//!
//! ## Algorithm
//!
//! 1. The pool is the selected factions in catalog order, shuffled once.
//! 2. Two rounds run. In each round participants are walked in a shuffled
//!    order and each takes the next unused pool faction until the pool runs
//!    dry; later participants in that round get nothing.
//!
//! With `P` pool factions and `N` participants, round one hands out
//! `min(P, N)` and round two `min(max(P - N, 0), N)`.
//!
//! ## Policies
//!
//! `AssignmentPolicy::ReshuffleEachRound` (default) draws a fresh participant
//! order for each round, so when the pool is short the participants who miss
//! a second faction are not simply the tail of the first round's order.
//! `AssignmentPolicy::FixedOrder` shuffles participants once and reuses that
//! order for both rounds, so the tail of round one also misses out in round
//! two.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{DraftRng, Participant};

use super::assignment::Assignment;
use super::selection::FactionSelection;

/// Rounds per draft; each participant draws at most this many factions.
pub const ROUNDS: usize = 2;

/// How the participant order is drawn across rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentPolicy {
    /// Fresh participant shuffle every round.
    #[default]
    ReshuffleEachRound,
    /// One participant shuffle shared by both rounds.
    FixedOrder,
}

/// Draft configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionAssigner {
    pub policy: AssignmentPolicy,
}

impl FactionAssigner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different participant ordering policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Draft factions for `participants` from the selected pool.
    ///
    /// Total: an empty participant list gives an empty assignment, a short
    /// pool leaves some participants with fewer than two factions.
    ///
    /// ```
    /// use faction_draft::core::{DraftRng, Faction, Participant};
    /// use faction_draft::factions::{FactionAssigner, FactionSelection};
    ///
    /// let people: Vec<_> = ["Alice", "Bob", "Carol"]
    ///     .iter()
    ///     .filter_map(|n| Participant::parse(n))
    ///     .collect();
    /// let catalog: Vec<_> = ["A", "B", "C", "D", "E"].iter().map(|&f| Faction::new(f)).collect();
    /// let selection = FactionSelection::from_catalog(&catalog);
    ///
    /// let assignment = FactionAssigner::new().assign(&people, &selection, &mut DraftRng::new(1));
    ///
    /// let mut counts: Vec<_> = assignment.iter().map(|e| e.factions.len()).collect();
    /// counts.sort();
    /// assert_eq!(counts, vec![1, 2, 2]);
    /// ```
    #[must_use]
    pub fn assign(
        &self,
        participants: &[Participant],
        selection: &FactionSelection,
        rng: &mut DraftRng,
    ) -> Assignment {
        let mut assignment = Assignment::empty_for(participants);
        if participants.is_empty() {
            return assignment;
        }

        let mut pool = selection.pool();
        rng.shuffle(&mut pool);
        let pool_size = pool.len();
        let mut pool = pool.into_iter();

        let seats: Vec<usize> = (0..participants.len()).collect();
        let mut order = rng.shuffled(&seats);

        for round in 0..ROUNDS {
            if round > 0 && self.policy == AssignmentPolicy::ReshuffleEachRound {
                order = rng.shuffled(&seats);
            }
            let mut handed_out = 0;
            for &seat in &order {
                let Some(faction) = pool.next() else { break };
                assignment.push(seat, faction);
                handed_out += 1;
            }
            debug!("round {}: {} factions handed out", round + 1, handed_out);
        }

        info!(
            "drafted {} of {} factions for {} participants ({:?})",
            assignment.total(),
            pool_size,
            participants.len(),
            self.policy
        );
        assignment
    }
}
