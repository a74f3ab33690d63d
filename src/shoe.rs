//! The card source the game deals from.
//!
//! By default the shoe is infinite: every draw picks a rank and a suit
//! uniformly at random, independently of earlier draws, so the same card can
//! show up several times in one round. [`ShoeMode::Finite`] switches to real
//! shuffled decks that are rebuilt once exhausted.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::options::ShoeMode;

/// Dispenses cards to the game.
#[derive(Debug, Clone)]
pub struct Shoe {
    mode: ShoeMode,
    /// Remaining cards of a finite shoe; the next card is popped off the end.
    cards: Vec<Card>,
    /// Cards queued with [`Shoe::stack`], dealt before anything random.
    stacked: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe seeded with the given value.
    #[must_use]
    pub fn new(mode: ShoeMode, seed: u64) -> Self {
        Self::with_rng(mode, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shoe seeded from the operating system's entropy source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(mode: ShoeMode) -> Self {
        Self::with_rng(mode, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(mode: ShoeMode, mut rng: ChaCha8Rng) -> Self {
        let cards = match mode {
            ShoeMode::Infinite => Vec::new(),
            ShoeMode::Finite { decks } => Self::create_decks(decks, &mut rng),
        };

        Self {
            mode,
            cards,
            stacked: VecDeque::new(),
            rng,
        }
    }

    /// Creates and shuffles the specified number of decks.
    fn create_decks(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks.max(1) as usize * DECK_SIZE);

        for _ in 0..num_decks.max(1) {
            for suit in Suit::ALL {
                for rank in RANKS {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns how this shoe produces cards.
    #[must_use]
    pub const fn mode(&self) -> ShoeMode {
        self.mode
    }

    /// Queues cards to be drawn next, in order, ahead of any random draw.
    ///
    /// Used to script rounds in tests and replays.
    pub fn stack(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().copied());
    }

    /// Returns the number of stacked cards not yet drawn.
    #[must_use]
    pub fn stacked_len(&self) -> usize {
        self.stacked.len()
    }

    /// Returns the number of cards left before a finite shoe is rebuilt.
    ///
    /// Always `None` for an infinite shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> Option<usize> {
        match self.mode {
            ShoeMode::Infinite => None,
            ShoeMode::Finite { .. } => Some(self.cards.len()),
        }
    }

    /// Draws one card.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.stacked.pop_front() {
            return card;
        }

        match self.mode {
            ShoeMode::Infinite => {
                let rank = self.rng.random_range(RANKS);
                let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
                Card::new(suit, rank)
            }
            ShoeMode::Finite { decks } => {
                if let Some(card) = self.cards.pop() {
                    card
                } else {
                    tracing::debug!(decks, "shoe exhausted, reshuffling");
                    // create_decks always builds at least one deck
                    self.cards = Self::create_decks(decks, &mut self.rng);
                    self.draw()
                }
            }
        }
    }
}
