//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the whole round flow:
//! betting against a bankroll [`Ledger`], dealing from a [`Shoe`], player
//! hits and stands, the dealer's draw loop, and settlement. Every operation
//! returns a snapshot of the resulting state so a presentation layer (UI,
//! CLI, test harness) can render it without reaching into the engine.
//!
//! # Example
//!
//! ```
//! use starjack::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let ledger = game.place_bet(100).unwrap();
//! assert_eq!(ledger.bankroll, 900);
//!
//! let round = game.deal().unwrap();
//! assert_eq!(round.state, GameState::PlayerTurn);
//!
//! let round = game.stand().unwrap();
//! assert_eq!(round.state, GameState::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use error::{ActionError, BetError, DealError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, is_soft, score};
pub use ledger::Ledger;
pub use options::{GameOptions, ShoeMode};
pub use result::{RoundOutcome, RoundResult};
pub use shoe::Shoe;
pub use snapshot::{DealerCard, LedgerSnapshot, RoundSnapshot};
