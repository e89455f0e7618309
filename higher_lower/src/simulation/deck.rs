use rand::seq::SliceRandom;
use rand::Rng;

use crate::statearray::ensure_distinct;
use crate::{Error, State};

/// A deck of distinct cards in dealing order. The first card is the one
/// turned face up at the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<u32>,
}

impl Deck {
    /// Creates a deck of `number_of_cards` cards in ascending order.
    pub fn new(number_of_cards: usize) -> Result<Deck, Error> {
        if number_of_cards == 0 {
            return Err(Error::NoCards);
        }
        Ok(Deck {
            cards: (0..number_of_cards as u32).collect(),
        })
    }

    /// Keeps the given dealing order. Every card must be distinct.
    pub fn from_cards(cards: Vec<u32>) -> Result<Deck, Error> {
        if cards.is_empty() {
            return Err(Error::NoCards);
        }
        ensure_distinct(&cards)?;
        Ok(Deck { cards })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[u32] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The abstracted state after `revealed` cards have been turned over,
    /// or None once no card remains.
    pub fn state_after(&self, revealed: usize) -> Option<State> {
        let remaining = self.cards.get(revealed..)?;
        State::from_cards(remaining).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_deck_is_ordered() {
        let deck = Deck::new(5).unwrap();
        assert_eq!(deck.cards(), &[0, 1, 2, 3, 4]);
        assert_eq!(deck.len(), 5);
        assert!(!deck.is_empty());
        assert_eq!(Deck::new(0), Err(Error::NoCards));
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = Deck::new(20).unwrap();
        deck.shuffle(&mut StdRng::seed_from_u64(42));
        let mut cards = deck.cards().to_vec();
        cards.sort_unstable();
        assert_eq!(cards, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        assert!(Deck::from_cards(vec![4, 8, 15]).is_ok());
        assert_eq!(
            Deck::from_cards(vec![4, 8, 4]),
            Err(Error::DuplicateCard(String::from("4")))
        );
        assert_eq!(Deck::from_cards(vec![]), Err(Error::NoCards));
    }

    #[test]
    fn state_after_follows_the_deal() {
        let deck = Deck::from_cards(vec![30, 10, 20, 40]).unwrap();
        assert_eq!(deck.state_after(0), Some(State::new(2, 4).unwrap()));
        assert_eq!(deck.state_after(1), Some(State::new(0, 3).unwrap()));
        assert_eq!(deck.state_after(3), Some(State::new(0, 1).unwrap()));
        assert_eq!(deck.state_after(4), None);
        assert_eq!(deck.state_after(9), None);
    }
}
