//! Shuffle and draft property tests.
//!
//! Randomized checks over many seeds and input sizes:
//! - shuffles are permutations
//! - draft totals follow the two-round formula
//! - pool factions are used at most once, deselected ones never

use std::collections::HashSet;

use proptest::prelude::*;

use faction_draft::core::{DraftRng, Faction, Participant};
use faction_draft::factions::{AssignmentPolicy, FactionAssigner, FactionSelection, ROUNDS};

fn people(n: usize) -> Vec<Participant> {
    (0..n).filter_map(|i| Participant::parse(&format!("Player {}", i))).collect()
}

fn catalog(n: usize) -> Vec<Faction> {
    (0..n).map(|i| Faction::new(format!("Faction {}", i))).collect()
}

fn expected_total(pool: usize, participants: usize) -> usize {
    pool.min(participants) + pool.saturating_sub(participants).min(participants)
}

proptest! {
    #[test]
    fn shuffled_is_permutation(items in prop::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
        let out = DraftRng::new(seed).shuffled(&items);

        let mut a = items.clone();
        let mut b = out;
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn draft_totals(
        participants in 0usize..10,
        factions in 0usize..30,
        deselect in prop::collection::vec(any::<bool>(), 30),
        fixed in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let people = people(participants);
        let catalog = catalog(factions);
        let mut selection = FactionSelection::from_catalog(&catalog);
        for (i, &off) in deselect.iter().enumerate().take(factions) {
            if off {
                selection.set_selected(i, false);
            }
        }
        let pool: HashSet<_> = selection.pool().into_iter().collect();

        let policy = if fixed { AssignmentPolicy::FixedOrder } else { AssignmentPolicy::ReshuffleEachRound };
        let assignment = FactionAssigner::new()
            .with_policy(policy)
            .assign(&people, &selection, &mut DraftRng::new(seed));

        prop_assert_eq!(assignment.len(), participants);
        prop_assert_eq!(assignment.total(), expected_total(pool.len(), participants));
        prop_assert!(assignment.iter().all(|e| e.factions.len() <= ROUNDS));

        let drawn: Vec<_> = assignment.factions().cloned().collect();
        let unique: HashSet<_> = drawn.iter().cloned().collect();
        prop_assert_eq!(unique.len(), drawn.len());
        prop_assert!(unique.is_subset(&pool));
    }
}

/// Empty and single-element shuffles.
#[test]
fn test_trivial_shuffles() {
    let mut rng = DraftRng::new(0);
    assert!(rng.shuffled::<u8>(&[]).is_empty());
    assert_eq!(rng.shuffled(&["x"]), vec!["x"]);
}

/// Three participants, five factions: two draw twice, one draws once.
#[test]
fn test_three_participants_five_factions() {
    let people: Vec<_> = ["Alice", "Bob", "Carol"]
        .iter()
        .filter_map(|n| Participant::parse(n))
        .collect();
    let selection = FactionSelection::from_catalog(&catalog(5));

    for seed in 0..100 {
        let assignment = FactionAssigner::new().assign(&people, &selection, &mut DraftRng::new(seed));
        let mut counts: Vec<_> = assignment.iter().map(|e| e.factions.len()).collect();
        counts.sort();
        assert_eq!(counts, vec![1, 2, 2]);
    }
}

/// No participants means an empty result whatever the pool.
#[test]
fn test_no_participants() {
    for size in [0, 1, 24] {
        let selection = FactionSelection::from_catalog(&catalog(size));
        let assignment = FactionAssigner::new().assign(&[], &selection, &mut DraftRng::new(1));
        assert!(assignment.is_empty());
    }
}

/// Every seat order shows up as a shuffle result given enough draws.
#[test]
fn test_shuffle_reaches_every_order() {
    let mut rng = DraftRng::new(2024);
    let items = [1, 2, 3];
    let seen: HashSet<Vec<i32>> = (0..500).map(|_| rng.shuffled(&items)).collect();
    assert_eq!(seen.len(), 6);
}
