/// Precondition failures. Every successful computation yields a finite
/// probability in `[0, 1]`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("at least one card is required")]
    NoCards,
    #[error("at least {needed} cards are required, got {got}")]
    TooFewCards { needed: usize, got: usize },
    #[error("card {0} appears more than once; cards must be distinct")]
    DuplicateCard(String),
    #[error("invalid state: up rank {up} must be below the card count {n}")]
    InvalidState { up: usize, n: usize },
    #[error("enumerating {n}! orderings is not supported (at most {max} cards)")]
    TooManyCards { n: usize, max: usize },
}
