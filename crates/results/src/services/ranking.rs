use std::collections::HashMap;

use tracing::debug;

use crate::models::Participant;
use crate::repository::registry::Registry;

/// A participant together with its display rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub participant: &'a Participant,
}

/// Ranked view over a registry, borrowed for the duration of reporting.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    entries: Vec<RankedEntry<'a>>,
    sorted: Vec<&'a Participant>,
    tie_class_count: usize,
}

impl<'a> Ranking<'a> {
    /// Entries in ascending total time, ties sharing a rank.
    pub fn entries(&self) -> &[RankedEntry<'a>] {
        &self.entries
    }

    pub fn fastest(&self) -> Option<&'a Participant> {
        self.sorted.first().copied()
    }

    /// Second participant by total time. May have the same total as the
    /// fastest one.
    pub fn second_fastest(&self) -> Option<&'a Participant> {
        self.sorted.get(1).copied()
    }

    /// Number of distinct total times.
    pub fn tie_class_count(&self) -> usize {
        self.tie_class_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranks registered participants by their computed total time using
/// competition ranking (1, 1, 3, 4 for a two-way tie at the top).
///
/// Totals must already have been computed with
/// [`Registry::compute_all_totals`]. Participants with equal totals keep
/// their registration order. The registry itself is not reordered.
pub fn rank(registry: &Registry) -> Ranking<'_> {
    let mut sorted: Vec<&Participant> = registry.participants().iter().collect();
    sorted.sort_by_key(|p| p.total_time());

    let mut tie_classes: HashMap<u64, Vec<&Participant>> = HashMap::new();
    for &participant in &sorted {
        tie_classes
            .entry(participant.total_time())
            .or_default()
            .push(participant);
    }

    // HashMap iteration order is arbitrary, the keys have to be re-sorted.
    let mut times: Vec<u64> = tie_classes.keys().copied().collect();
    times.sort_unstable();

    let mut entries = Vec::with_capacity(sorted.len());
    let mut next_rank = 1;
    for time in &times {
        let tied = &tie_classes[time];
        if tied.len() > 1 {
            debug!("{} participants tied at {} minutes", tied.len(), time);
        }
        entries.extend(tied.iter().map(|&participant| RankedEntry {
            rank: next_rank,
            participant,
        }));
        next_rank += tied.len();
    }

    Ranking {
        entries,
        sorted,
        tie_class_count: times.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(entries: &[(&str, (i32, i32, i32))]) -> Registry {
        let mut registry: Registry = entries
            .iter()
            .map(|(name, (swim, cycle, run))| {
                let mut p = Participant::beginner(*name, Some(name.to_uppercase()));
                p.set_swimming_time(*swim).unwrap();
                p.set_cycling_time(*cycle).unwrap();
                p.set_running_time(*run).unwrap();
                p
            })
            .collect();
        registry.compute_all_totals();
        registry
    }

    fn ranks_and_names<'a>(ranking: &Ranking<'a>) -> Vec<(usize, &'a str)> {
        ranking
            .entries()
            .iter()
            .map(|e| (e.rank, e.participant.name()))
            .collect()
    }

    #[test]
    fn test_sample_event_without_ties() {
        let registry = registry_of(&[
            ("Alice", (25, 40, 20)),
            ("Bob", (20, 35, 25)),
            ("Charlie", (30, 50, 30)),
            ("Diana", (28, 42, 18)),
        ]);
        let ranking = rank(&registry);

        assert_eq!(
            ranks_and_names(&ranking),
            vec![(1, "Bob"), (2, "Alice"), (3, "Diana"), (4, "Charlie")]
        );
        let totals: Vec<_> = ranking
            .entries()
            .iter()
            .map(|e| e.participant.total_time())
            .collect();
        assert_eq!(totals, vec![80, 85, 88, 110]);
        assert_eq!(ranking.fastest().unwrap().name(), "Bob");
        assert_eq!(ranking.second_fastest().unwrap().name(), "Alice");
        assert_eq!(ranking.tie_class_count(), 4);
    }

    #[test]
    fn test_tie_skips_next_rank() {
        let registry = registry_of(&[
            ("Third", (30, 30, 30)),
            ("First", (20, 30, 30)),
            ("Second", (30, 30, 20)),
        ]);
        let ranking = rank(&registry);

        assert_eq!(
            ranks_and_names(&ranking),
            vec![(1, "First"), (1, "Second"), (3, "Third")]
        );
        assert_eq!(ranking.tie_class_count(), 2);
    }

    #[test]
    fn test_competition_ranking_sequence() {
        let registry = registry_of(&[
            ("A", (10, 10, 10)),
            ("B", (10, 10, 10)),
            ("C", (11, 10, 10)),
            ("D", (12, 10, 10)),
            ("E", (12, 10, 10)),
            ("F", (12, 10, 10)),
            ("G", (13, 10, 10)),
        ]);
        let ranks: Vec<_> = rank(&registry).entries().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3, 4, 4, 4, 7]);
    }

    #[test]
    fn test_tied_fastest_both_highlighted() {
        let registry = registry_of(&[
            ("Slow", (50, 50, 50)),
            ("A", (10, 10, 10)),
            ("B", (10, 10, 10)),
        ]);
        let ranking = rank(&registry);

        let fastest = ranking.fastest().unwrap();
        let second = ranking.second_fastest().unwrap();
        assert_eq!(fastest.name(), "A");
        assert_eq!(second.name(), "B");
        assert_eq!(fastest.total_time(), second.total_time());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        let ranking = rank(&registry);

        assert!(ranking.is_empty());
        assert!(ranking.fastest().is_none());
        assert!(ranking.second_fastest().is_none());
        assert_eq!(ranking.tie_class_count(), 0);
    }

    #[test]
    fn test_single_participant() {
        let registry = registry_of(&[("Solo", (1, 2, 3))]);
        let ranking = rank(&registry);

        assert_eq!(ranks_and_names(&ranking), vec![(1, "Solo")]);
        assert_eq!(ranking.fastest().unwrap().name(), "Solo");
        assert!(ranking.second_fastest().is_none());
    }

    #[test]
    fn test_registration_order_does_not_change_ranking() {
        let forward = registry_of(&[
            ("Alice", (25, 40, 20)),
            ("Bob", (20, 35, 25)),
            ("Charlie", (30, 50, 30)),
            ("Diana", (28, 42, 18)),
        ]);
        let reversed = registry_of(&[
            ("Diana", (28, 42, 18)),
            ("Charlie", (30, 50, 30)),
            ("Bob", (20, 35, 25)),
            ("Alice", (25, 40, 20)),
        ]);

        assert_eq!(
            ranks_and_names(&rank(&forward)),
            ranks_and_names(&rank(&reversed))
        );
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let registry = registry_of(&[("Zed", (10, 10, 10)), ("Amy", (10, 10, 10))]);
        assert_eq!(
            ranks_and_names(&rank(&registry)),
            vec![(1, "Zed"), (1, "Amy")]
        );
    }

    #[test]
    fn test_grouping_preserves_sorted_order() {
        // Enough distinct totals that HashMap iteration order is very unlikely
        // to be sorted by accident.
        let entries: Vec<(String, (i32, i32, i32))> = (0..50)
            .rev()
            .map(|i| (format!("P{i}"), (i, 2 * (i % 7), 0)))
            .collect();
        let borrowed: Vec<(&str, (i32, i32, i32))> =
            entries.iter().map(|(n, s)| (n.as_str(), *s)).collect();
        let registry = registry_of(&borrowed);
        let ranking = rank(&registry);

        let totals: Vec<u64> = ranking
            .entries()
            .iter()
            .map(|e| e.participant.total_time())
            .collect();
        let mut expected = totals.clone();
        expected.sort_unstable();
        assert_eq!(totals, expected);

        for window in ranking.entries().windows(2) {
            let (a, b) = (&window[0], &window[1]);
            if a.participant.total_time() == b.participant.total_time() {
                assert_eq!(a.rank, b.rank);
            } else {
                assert!(b.rank > a.rank);
            }
        }
        for (position, entry) in ranking.entries().iter().enumerate() {
            let faster = ranking
                .entries()
                .iter()
                .filter(|e| e.participant.total_time() < entry.participant.total_time())
                .count();
            assert_eq!(entry.rank, faster + 1, "entry at position {position}");
        }
    }

    #[test]
    fn test_registry_order_untouched() {
        let registry = registry_of(&[("Slow", (50, 50, 50)), ("Fast", (1, 1, 1))]);
        let _ = rank(&registry);
        assert_eq!(registry.participants()[0].name(), "Slow");
    }
}
