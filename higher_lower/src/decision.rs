use std::cmp::Ordering;
use std::fmt::Debug;

use crate::statearray::ensure_distinct;
use crate::{Error, Guess, State, TieBreak};

/// The optimal call in an abstracted state: guess higher while the up card
/// sits at or below the middle rank `(n - 1) / 2`, lower above it.
///
/// The midpoint is compared exactly (`2 * up` against `n - 1`), so the
/// middle card of an odd-sized deck guesses higher.
pub fn optimal_guess(state: State) -> Guess {
    if 2 * state.up() + 1 > state.n() {
        Guess::Lower
    } else {
        Guess::Higher
    }
}

/// Whether the optimal call with the up card at rank `up` is right about the
/// down card at rank `down`, with `n` cards remaining in total.
pub fn first_right(up: usize, down: usize, n: usize) -> bool {
    debug_assert!(up < n && down < n && up != down);
    (up > down) == (2 * up + 1 > n)
}

/// Guess by counting the face-down cards on either side of the up card.
pub(crate) fn majority_guess<T: Ord>(up: &T, downs: &[T], tie_break: TieBreak) -> Guess {
    let higher = downs.iter().filter(|down| *down > up).count();
    let lower = downs.len() - higher;
    match higher.cmp(&lower) {
        Ordering::Greater => Guess::Higher,
        Ordering::Less => Guess::Lower,
        Ordering::Equal => tie_break.guess(),
    }
}

/// Note that the callers must ensure there are at least 2 distinct cards.
pub(crate) fn first_guess_is_right<T: Ord>(cards: &[T], tie_break: TieBreak) -> bool {
    let (up, downs) = (&cards[0], &cards[1..]);
    majority_guess(up, downs, tie_break).is_right(up, &downs[0])
}

/// Takes the remaining cards (up card first, then the face-down cards in
/// the order they will be turned) and reports whether the majority-count
/// guess is right about the next card. Ties guess lower.
pub fn guess_first<T: Ord + Debug>(cards: &[T]) -> Result<bool, Error> {
    guess_first_with(cards, TieBreak::default())
}

pub fn guess_first_with<T: Ord + Debug>(cards: &[T], tie_break: TieBreak) -> Result<bool, Error> {
    if cards.len() < 2 {
        return Err(Error::TooFewCards {
            needed: 2,
            got: cards.len(),
        });
    }
    ensure_distinct(cards)?;
    Ok(first_guess_is_right(cards, tie_break))
}
