use std::collections::HashMap;
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use crate::Error;

/// A situation abstracted down to what decides the odds: `n` cards remain
/// (the up card included) and the up card has rank `up` among them, counting
/// from 0 in ascending order.
///
/// Any two concrete situations that share `(up, n)` have the same chance of
/// being guessed through to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    up: usize,
    n: usize,
}

impl State {
    pub fn new(up: usize, n: usize) -> Result<State, Error> {
        if up >= n {
            return Err(Error::InvalidState { up, n });
        }
        Ok(State { up, n })
    }

    /// Callers must guarantee `up < n`.
    pub(crate) const fn new_unchecked(up: usize, n: usize) -> State {
        State { up, n }
    }

    /// Abstracts a concrete sequence of remaining cards, up card first.
    pub fn from_cards<T: Ord + Debug>(cards: &[T]) -> Result<State, Error> {
        let up_card = cards.first().ok_or(Error::NoCards)?;
        ensure_distinct(cards)?;
        let up = cards.iter().filter(|card| *card < up_card).count();
        Ok(State { up, n: cards.len() })
    }

    pub fn up(&self) -> usize {
        self.up
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// The state once the card of rank `down` is turned over and becomes the
    /// new up card.
    ///
    /// Note that this method won't check that `down` is a valid rank other
    /// than the up card's.
    pub fn after_reveal(&self, down: usize) -> State {
        debug_assert!(down < self.n && down != self.up);
        State {
            up: renumber(down, self.up),
            n: self.n - 1,
        }
    }

    fn hash_value(&self) -> u64 {
        ((self.n as u64) << 32) | self.up as u64
    }
}

/// Rank of a down card once the up card (rank `up`) has left the deck.
pub fn renumber(down: usize, up: usize) -> usize {
    if up < down {
        down - 1
    } else {
        down
    }
}

pub(crate) fn ensure_distinct<T: Ord + Debug>(cards: &[T]) -> Result<(), Error> {
    let mut sorted: Vec<&T> = cards.iter().collect();
    sorted.sort_unstable();
    match sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(Error::DuplicateCard(format!("{:?}", pair[0]))),
        None => Ok(()),
    }
}

/// This struct provide a convenient way to use State as the index of the
/// array.
#[derive(Debug, Default, Clone)]
pub struct StateArray<T: Default> {
    data: HashMap<u64, T>,
}

impl<T: Default> StateArray<T> {
    pub fn new() -> StateArray<T> {
        StateArray {
            data: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn contains_state(&self, index: State) -> bool {
        self.data.contains_key(&index.hash_value())
    }

    pub fn get(&self, index: State) -> Option<&T> {
        self.data.get(&index.hash_value())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Default> Index<State> for StateArray<T> {
    type Output = T;
    fn index(&self, index: State) -> &Self::Output {
        &self.data[&index.hash_value()]
    }
}

impl<T: Default> IndexMut<State> for StateArray<T> {
    fn index_mut(&mut self, index: State) -> &mut Self::Output {
        self.data.entry(index.hash_value()).or_default()
    }
}
