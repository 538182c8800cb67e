//! Deck module - deals the 16 cards of one game
//!
//! The pool holds two copies of every value 1-10. A fresh deck shuffles the pool and
//! keeps the first 16 cards; a seeded deck takes its 16 cards from a decoded seed token.
//!
//! The recorded draw (the "played order") never changes. Cards are dealt from its end,
//! so the last recorded card is the first one placed, and a seed replays the same deal.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{DeckError, SeedError};
use crate::seed::{self, SeedToken};
use crate::types::{Card, COPIES_PER_VALUE, DRAW_LEN, POOL_SIZE};

/// The 20-card pool in ascending order
pub fn card_pool() -> ArrayVec<Card, POOL_SIZE> {
    Card::all()
        .flat_map(|card| std::iter::repeat(card).take(COPIES_PER_VALUE))
        .collect()
}

/// Cards of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Draw as recorded at construction, encoded by the seed
    played: [Card; DRAW_LEN],
    /// Undealt cards; the next card is the last element
    pile: ArrayVec<Card, DRAW_LEN>,
}

impl Deck {
    /// Build a deck that deals `draw` back to front.
    pub fn from_draw(draw: [Card; DRAW_LEN]) -> Self {
        Self {
            played: draw,
            pile: draw.into_iter().collect(),
        }
    }

    /// Shuffle the pool with `rng` and keep the first 16 cards.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = card_pool();
        pool.shuffle(rng);
        Self::from_draw(std::array::from_fn(|i| pool[i]))
    }

    /// Shuffle with the thread-local RNG.
    pub fn fresh() -> Self {
        Self::shuffled(&mut rand::rng())
    }

    /// Deterministic shuffle, for tests and benchmarks.
    pub fn from_rng_seed(seed: u64) -> Self {
        Self::shuffled(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Rebuild the deck a seed token was printed for.
    pub fn from_seed(token: &str) -> Result<Self, SeedError> {
        seed::decode_draw(token).map(Self::from_draw)
    }

    /// Remove and return the next card
    pub fn draw_next(&mut self) -> Result<Card, DeckError> {
        self.pile.pop().ok_or(DeckError::Exhausted)
    }

    /// Peek at the next card without removing it
    pub fn peek(&self) -> Option<Card> {
        self.pile.last().copied()
    }

    pub fn remaining_count(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// The recorded draw, unaffected by dealing
    pub fn played_order(&self) -> &[Card; DRAW_LEN] {
        &self.played
    }

    /// The recorded draw in the order the cards are dealt
    pub fn dealt_order(&self) -> impl Iterator<Item = Card> + '_ {
        self.played.iter().rev().copied()
    }

    /// Seed token that reproduces this deck
    pub fn seed(&self) -> SeedToken {
        seed::encode(&self.played)
    }

    /// Whether [`Deck::seed`] can rebuild this deck (see [`seed::is_replayable`])
    pub fn seed_replayable(&self) -> bool {
        seed::is_replayable(&self.played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(cards: &[Card]) -> [usize; 11] {
        let mut out = [0usize; 11];
        for card in cards {
            out[card.value() as usize] += 1;
        }
        out
    }

    #[test]
    fn test_pool_has_two_of_each_value() {
        let pool = card_pool();
        assert_eq!(pool.len(), POOL_SIZE);
        assert!(counts(&pool)[1..].iter().all(|&n| n == 2));
    }

    #[test]
    fn test_shuffled_draw_comes_from_pool() {
        for seed in 0..50 {
            let deck = Deck::from_rng_seed(seed);
            assert_eq!(deck.remaining_count(), DRAW_LEN);
            assert!(counts(deck.played_order()).iter().all(|&n| n <= 2));
        }
    }

    #[test]
    fn test_rng_seed_is_deterministic() {
        assert_eq!(Deck::from_rng_seed(7), Deck::from_rng_seed(7));
    }

    #[test]
    fn test_deals_from_the_end() {
        let draw = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2, 3, 4, 5, 6].map(|v| Card::new(v).unwrap());
        let mut deck = Deck::from_draw(draw);

        assert_eq!(deck.peek(), Card::new(6));
        assert_eq!(deck.draw_next(), Ok(Card::new(6).unwrap()));
        assert_eq!(deck.draw_next(), Ok(Card::new(5).unwrap()));
        assert_eq!(deck.remaining_count(), 14);

        // The record is untouched by dealing.
        assert_eq!(deck.played_order(), &draw);
        assert_eq!(deck.dealt_order().next(), Card::new(6));
    }

    #[test]
    fn test_exhausted_deck_reports_error() {
        let mut deck = Deck::from_rng_seed(3);
        for _ in 0..DRAW_LEN {
            assert!(deck.draw_next().is_ok());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw_next(), Err(DeckError::Exhausted));
        assert_eq!(deck.peek(), None);
    }

    #[test]
    fn test_seed_rebuilds_replayable_deck() {
        let draw = [4, 10, 2, 2, 9, 1, 8, 3, 7, 5, 6, 1, 10, 4, 3, 9].map(|v| Card::new(v).unwrap());
        let deck = Deck::from_draw(draw);
        assert!(deck.seed_replayable());
        assert_eq!(Deck::from_seed(&deck.seed()), Ok(deck));
    }
}
