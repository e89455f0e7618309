pub mod deck;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::oracle::all_guesses_right;
use crate::{Error, TieBreak};

use self::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub number_of_cards: usize,
    pub games: u64,
    pub tie_break: TieBreak,
    /// Fixed seed for a reproducible run. A fresh thread RNG otherwise.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub games: u64,
    pub wins: u64,
}

impl SimulationSummary {
    /// Fraction of games won. 0 when no game was played.
    pub fn rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Deals `settings.games` shuffled decks and plays each with the
/// majority-count policy.
pub fn simulate(settings: &SimulationSettings) -> Result<SimulationSummary, Error> {
    match settings.seed {
        Some(seed) => simulate_with_rng(settings, &mut StdRng::seed_from_u64(seed)),
        None => simulate_with_rng(settings, &mut rand::thread_rng()),
    }
}

pub fn simulate_with_rng<R: Rng + ?Sized>(
    settings: &SimulationSettings,
    rng: &mut R,
) -> Result<SimulationSummary, Error> {
    let mut deck = Deck::new(settings.number_of_cards)?;
    let mut summary = SimulationSummary::default();
    for _ in 0..settings.games {
        deck.shuffle(rng);
        summary.games += 1;
        if all_guesses_right(deck.cards(), settings.tie_break) {
            summary.wins += 1;
        }
    }

    debug!(
        number_of_cards = settings.number_of_cards,
        games = summary.games,
        wins = summary.wins,
        "simulation finished"
    );
    Ok(summary)
}
