//! Property-based tests for the decision rule and state abstraction.

use proptest::prelude::*;

use higher_lower::{first_right, guess_first, optimal_guess, renumber, Guess, Solver, State};

/// Strategy: a deck size with an up rank and a distinct down rank.
fn up_down_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (2..60usize).prop_flat_map(|n| (Just(n), 0..n, 0..n - 1)).prop_map(|(n, up, d)| {
        // Skip over `up` so the down rank is always distinct.
        let down = if d >= up { d + 1 } else { d };
        (n, up, down)
    })
}

proptest! {
    // 1. Renumbered ranks stay inside the smaller deck
    #[test]
    fn renumber_stays_in_range((n, up, down) in up_down_strategy()) {
        prop_assert!(renumber(down, up) < n - 1);
    }

    // 2. Renumbering equals re-ranking the remaining cards
    #[test]
    fn renumber_equals_resorting((n, up, down) in up_down_strategy()) {
        let mut remaining: Vec<usize> = (0..n).filter(|&card| card != up).collect();
        remaining.sort_unstable();
        let position = remaining.iter().position(|&card| card == down).unwrap();
        prop_assert_eq!(renumber(down, up), position);
    }

    // 3. The abstract rule agrees with the concrete one away from ties
    #[test]
    fn first_right_matches_guess_first((n, up, down) in up_down_strategy()) {
        prop_assume!(2 * up + 1 != n);
        let mut cards = vec![up, down];
        cards.extend((0..n).filter(|&card| card != up && card != down));
        prop_assert_eq!(first_right(up, down, n), guess_first(&cards).unwrap());
    }

    // 4. Only the up card's rank matters, not the card values
    #[test]
    fn state_ignores_card_values(
        values in prop::collection::btree_set(-1000i64..1000, 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut cards: Vec<i64> = values.into_iter().collect();
        let up_index = pick.index(cards.len());
        cards.swap(0, up_index);
        let state = State::from_cards(&cards).unwrap();
        prop_assert_eq!(state.up(), up_index);
        prop_assert_eq!(state.n(), cards.len());
    }

    // 5. The number of correct down cards matches the guess direction
    #[test]
    fn right_count_matches_guess_direction((n, up, _down) in up_down_strategy()) {
        let right = (0..n).filter(|&d| d != up && first_right(up, d, n)).count();
        let expected = match optimal_guess(State::new(up, n).unwrap()) {
            Guess::Higher => n - 1 - up,
            Guess::Lower => up,
        };
        prop_assert_eq!(right, expected);
    }

    // 6. Probabilities stay in [0, 1]
    #[test]
    fn p_given_is_a_probability((n, up, _down) in up_down_strategy()) {
        let p = Solver::new().p_given(State::new(up, n).unwrap());
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
