use tracing::{debug, trace};

use crate::decision::first_right;
use crate::{Error, State, StateArray};

pub mod table;

/// Number of states the memoized recurrence visits while solving a deck of
/// `n >= 2` cards from an empty cache.
pub fn expected_cache_len(n: usize) -> usize {
    (n * (n + 1) / 2).saturating_sub(1)
}

/// Owns the memo table for the success probability of each abstracted
/// state. Entries never go stale, so one solver can serve many decks; clear
/// it only to measure how many states a single run touches.
#[derive(Debug, Default)]
pub struct Solver {
    solution: StateArray<f64>,
}

impl Solver {
    pub fn new() -> Self {
        Default::default()
    }

    /// Probability of guessing every card of an `n`-card deck, averaging
    /// over the rank of the first up card.
    pub fn p_all(&mut self, n: usize) -> Result<f64, Error> {
        if n == 0 {
            return Err(Error::NoCards);
        }

        let mut total = 0.0;
        for up in 0..n {
            total += self.p_given(State::new_unchecked(up, n));
        }
        let p = total / n as f64;

        debug!(n, p, cache_len = self.solution.len(), "solved deck");
        Ok(p)
    }

    /// Probability of guessing all remaining cards from `state`.
    pub fn p_given(&mut self, state: State) -> f64 {
        memoization_find_probability(state, &mut self.solution);
        self.solution[state]
    }

    pub fn cache_len(&self) -> usize {
        self.solution.len()
    }

    pub fn clear(&mut self) {
        debug!(cache_len = self.solution.len(), "clearing solver cache");
        self.solution.clear();
    }
}

fn memoization_find_probability(state: State, solution: &mut StateArray<f64>) {
    if solution.contains_state(state) {
        return;
    }

    let (up, n) = (state.up(), state.n());
    // At most one face-down card left.
    if n <= 2 {
        solution[state] = 1.0;
        return;
    }

    trace!(up, n, "evaluating state");
    let mut total = 0.0;
    for down in (0..n).filter(|&down| down != up) {
        // A wrong call ends the game, so that card contributes nothing.
        let p = if first_right(up, down, n) {
            let next_state = state.after_reveal(down);
            memoization_find_probability(next_state, solution);
            solution[next_state]
        } else {
            0.0
        };
        total += p;
    }

    solution[state] = total / (n - 1) as f64;
}
