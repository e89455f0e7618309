//! Reference answers by exhaustive enumeration. Factorial cost; only for
//! checking the recurrence on small decks.

use std::fmt::Debug;

use tracing::debug;

use crate::decision::first_guess_is_right;
use crate::statearray::ensure_distinct;
use crate::{Error, TieBreak};

pub const MAX_BRUTE_FORCE_CARDS: usize = 10;

/// Whether the majority-count policy, re-applied after every reveal, calls
/// every card of `cards` right. The first element is the initial up card.
pub fn guess_all<T: Ord + Debug>(cards: &[T]) -> Result<bool, Error> {
    guess_all_with(cards, TieBreak::default())
}

pub fn guess_all_with<T: Ord + Debug>(cards: &[T], tie_break: TieBreak) -> Result<bool, Error> {
    if cards.is_empty() {
        return Err(Error::NoCards);
    }
    ensure_distinct(cards)?;
    Ok(all_guesses_right(cards, tie_break))
}

/// Note that the callers must ensure the cards are distinct.
pub(crate) fn all_guesses_right<T: Ord>(cards: &[T], tie_break: TieBreak) -> bool {
    // With two cards left the last call is never counted against the player.
    (0..cards.len().saturating_sub(2)).all(|i| first_guess_is_right(&cards[i..], tie_break))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceSummary {
    pub successes: u64,
    pub total: u64,
}

impl BruteForceSummary {
    pub fn probability(&self) -> f64 {
        self.successes as f64 / self.total as f64
    }
}

/// Plays every ordering of `n` distinct cards and counts the perfect games.
pub fn brute_force_probability(n: usize) -> Result<BruteForceSummary, Error> {
    brute_force_probability_with(n, TieBreak::default())
}

pub fn brute_force_probability_with(
    n: usize,
    tie_break: TieBreak,
) -> Result<BruteForceSummary, Error> {
    if n == 0 {
        return Err(Error::NoCards);
    }
    if n > MAX_BRUTE_FORCE_CARDS {
        return Err(Error::TooManyCards {
            n,
            max: MAX_BRUTE_FORCE_CARDS,
        });
    }

    let mut cards: Vec<u32> = (0..n as u32).collect();
    let mut summary = BruteForceSummary {
        successes: 0,
        total: 0,
    };
    for_each_permutation(&mut cards, |ordering| {
        summary.total += 1;
        if all_guesses_right(ordering, tie_break) {
            summary.successes += 1;
        }
    });

    debug!(n, successes = summary.successes, total = summary.total, "enumerated orderings");
    Ok(summary)
}

/// Visits every ordering of `items` exactly once (Heap's algorithm).
pub(crate) fn for_each_permutation<T, F: FnMut(&[T])>(items: &mut [T], mut visit: F) {
    let n = items.len();
    let mut counters = vec![0; n];
    visit(items);

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }
            visit(items);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn guess_all_on_known_sequences() {
        assert_eq!(guess_all(&[2, 3, 4, 5, 6]), Ok(true));
        assert_eq!(guess_all(&[3, 2, 4, 5, 6]), Ok(false));
        assert_eq!(guess_all(&[9, 1]), Ok(true));
        assert_eq!(guess_all(&[9]), Ok(true));
        assert_eq!(guess_all::<i32>(&[]), Err(Error::NoCards));
        assert!(matches!(guess_all(&[1, 2, 2]), Err(Error::DuplicateCard(_))));
    }

    #[test]
    fn a_late_mistake_still_loses() {
        // 1 -> 5 higher, 5 -> 2 lower, 2 -> 4 higher. The last pair is free.
        assert_eq!(guess_all(&[1, 5, 2, 4, 3]), Ok(true));
        // 3 with {4, 5, 1} guesses higher; 4 -> right. 4 with {5, 1} ties,
        // guesses lower, and 5 is above.
        assert_eq!(guess_all(&[3, 4, 5, 1]), Ok(false));
        assert_eq!(guess_all_with(&[3, 4, 5, 1], TieBreak::Higher), Ok(true));
    }

    #[test]
    fn permutations_are_complete_and_distinct() {
        let mut items = [0, 1, 2, 3, 4];
        let mut seen = HashSet::new();
        for_each_permutation(&mut items, |ordering| {
            seen.insert(ordering.to_vec());
        });
        assert_eq!(seen.len(), 120);

        let mut empty: [u8; 0] = [];
        let mut visits = 0;
        for_each_permutation(&mut empty, |_| visits += 1);
        assert_eq!(visits, 1);
    }

    #[test]
    fn brute_force_small_decks() {
        assert_eq!(
            brute_force_probability(3),
            Ok(BruteForceSummary {
                successes: 5,
                total: 6
            })
        );
        assert_eq!(brute_force_probability(1).unwrap().probability(), 1.0);
        assert_eq!(brute_force_probability(2).unwrap().probability(), 1.0);
        assert_eq!(
            brute_force_probability(11),
            Err(Error::TooManyCards { n: 11, max: 10 })
        );
    }

    #[test]
    fn tie_break_does_not_change_the_odds() {
        for n in 3..=7 {
            assert_eq!(
                brute_force_probability_with(n, TieBreak::Lower),
                brute_force_probability_with(n, TieBreak::Higher)
            );
        }
    }
}
