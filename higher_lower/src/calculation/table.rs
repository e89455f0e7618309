use tracing::debug;

use crate::decision::optimal_guess;
use crate::{Error, Guess, State};

/// Bottom-up form of the same recurrence, one deck size at a time, without
/// recursion. Useful when the deck is large enough that recursing once per
/// card is a concern.
///
/// For a fixed up card, the cards the optimal call gets right form one
/// contiguous run of ranks (everything above it, or everything below it), so
/// each entry is a prefix or suffix sum over the previous row.
#[derive(Debug, Clone)]
pub struct ProbabilityTable {
    // Success probability for each up rank with `p_all.len()` cards left.
    top_row: Vec<f64>,
    // p_all[m - 1] is the success probability for a deck of m cards.
    p_all: Vec<f64>,
}

impl ProbabilityTable {
    pub fn build(number_of_cards: usize) -> Result<Self, Error> {
        if number_of_cards == 0 {
            return Err(Error::NoCards);
        }

        // Up to two cards the game cannot be lost.
        let mut row = vec![1.0; number_of_cards.min(2)];
        let mut p_all = vec![1.0; row.len()];
        for n in 3..=number_of_cards {
            row = next_row(&row, n);
            p_all.push(row.iter().sum::<f64>() / n as f64);
        }

        debug!(number_of_cards, "built probability table");
        Ok(Self {
            top_row: row,
            p_all,
        })
    }

    pub fn number_of_cards(&self) -> usize {
        self.p_all.len()
    }

    /// Success probability for a deck of `n` cards, for any `n` up to the
    /// size the table was built for.
    pub fn p_all(&self, n: usize) -> Option<f64> {
        n.checked_sub(1).and_then(|i| self.p_all.get(i)).copied()
    }

    /// Success probability with the full deck remaining and the up card at
    /// rank `up`.
    pub fn p_given(&self, up: usize) -> Option<f64> {
        self.top_row.get(up).copied()
    }
}

/// `previous` holds the probabilities with `n - 1` cards left.
fn next_row(previous: &[f64], n: usize) -> Vec<f64> {
    // prefix[i] = previous[..i].sum(), suffix[i] = previous[i..].sum()
    let mut prefix = vec![0.0; n];
    let mut suffix = vec![0.0; n];
    for i in 0..n - 1 {
        prefix[i + 1] = prefix[i] + previous[i];
    }
    for i in (0..n - 1).rev() {
        suffix[i] = suffix[i + 1] + previous[i];
    }

    (0..n)
        .map(|up| {
            // Cards above `up` renumber to ranks up..n-1, cards below keep
            // ranks 0..up.
            let right = match optimal_guess(State::new_unchecked(up, n)) {
                Guess::Higher => suffix[up],
                Guess::Lower => prefix[up],
            };
            right / (n - 1) as f64
        })
        .collect()
}
