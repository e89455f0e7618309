pub mod calculation;
pub mod decision;
mod error;
pub mod oracle;
pub mod simulation;
mod statearray;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

pub use calculation::{expected_cache_len, table::ProbabilityTable, Solver};
pub use decision::{first_right, guess_first, guess_first_with, optimal_guess};
pub use error::Error;
pub use oracle::{brute_force_probability, guess_all, guess_all_with, BruteForceSummary};
pub use simulation::{SimulationSettings, SimulationSummary};
pub use statearray::{renumber, State, StateArray};

/// The call a player makes about the next face-down card.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Whether this guess about `down`, made while `up` is showing, is right.
    pub fn is_right<T: Ord>(self, up: &T, down: &T) -> bool {
        match self {
            Guess::Higher => down > up,
            Guess::Lower => down < up,
        }
    }

    pub fn opposite(self) -> Guess {
        match self {
            Guess::Higher => Guess::Lower,
            Guess::Lower => Guess::Higher,
        }
    }
}

/// Which way the majority-count rule guesses when as many face-down cards
/// are above the up card as below it. Either choice is optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum TieBreak {
    Higher,
    Lower,
}

impl TieBreak {
    pub fn guess(self) -> Guess {
        match self {
            TieBreak::Higher => Guess::Higher,
            TieBreak::Lower => Guess::Lower,
        }
    }
}

impl Default for TieBreak {
    /// A strict `higher > lower` majority test, i.e. ties guess lower.
    fn default() -> Self {
        TieBreak::Lower
    }
}

/// Probability that the optimal player calls every card of a shuffled deck
/// of `n` distinct cards correctly. Uses a fresh [`Solver`].
pub fn p_all(n: usize) -> Result<f64, Error> {
    Solver::new().p_all(n)
}
