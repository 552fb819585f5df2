//! # showdown-engine: Hand Evaluation and Pot Distribution
//!
//! Decides who wins a finished flop-style poker hand and exactly how the pot
//! is split. Every entry point is a pure function of a [`state::TerminalState`]
//! handed over by the game loop: nothing here deals cards, validates betting,
//! mutates stacks, or prints.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`state`] - Terminal hand state: streets, hole cards, board, player outcomes
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`showdown`] - Winner resolution by elimination or showdown
//! - [`pot`] - Chip-conserving pot splits and side-pot layering
//! - [`engine`] - Resolution and payout in a single call
//! - [`logger`] - Settlement records and JSONL hand history
//! - [`errors`] - Error types for unsound terminal states
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::engine::settle;
//! use showdown_engine::state::{
//!     CommunityCards, HoleCards, PlayerOutcome, PlayerStatus, Street, TerminalState,
//! };
//!
//! let c = |r, s| Card::new(r, s);
//! let board = CommunityCards::new(vec![
//!     c(Rank::Queen, Suit::Hearts),
//!     c(Rank::Jack, Suit::Hearts),
//!     c(Rank::Ten, Suit::Hearts),
//!     c(Rank::Nine, Suit::Spades),
//!     c(Rank::Eight, Suit::Clubs),
//! ])
//! .unwrap();
//! let players = vec![
//!     PlayerOutcome::new(
//!         0,
//!         PlayerStatus::Active,
//!         Some(HoleCards::new(c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Diamonds))),
//!     ),
//!     PlayerOutcome::new(
//!         1,
//!         PlayerStatus::Active,
//!         Some(HoleCards::new(c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Diamonds))),
//!     ),
//! ];
//! let state = TerminalState::new(players, board, 200, Street::River);
//!
//! let settlement = settle(&state).unwrap();
//! assert_eq!(settlement.resolution.winners, vec![0]);
//! assert_eq!(settlement.payouts.get(0), 200);
//! assert_eq!(settlement.payouts.get(1), 0);
//! ```
//!
//! ## Refusing Unsound States
//!
//! A showdown before the river has no correct ruling, so it is reported
//! rather than approximated:
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::errors::ShowdownError;
//! use showdown_engine::showdown::resolve;
//! use showdown_engine::state::{
//!     CommunityCards, HoleCards, PlayerOutcome, PlayerStatus, Street, TerminalState,
//! };
//!
//! let c = |r, s| Card::new(r, s);
//! let flop = CommunityCards::new(vec![
//!     c(Rank::Two, Suit::Clubs),
//!     c(Rank::Seven, Suit::Diamonds),
//!     c(Rank::King, Suit::Spades),
//! ])
//! .unwrap();
//! let hole = Some(HoleCards::new(c(Rank::Ace, Suit::Clubs), c(Rank::Ace, Suit::Diamonds)));
//! let players = vec![
//!     PlayerOutcome::new(0, PlayerStatus::Active, hole),
//!     PlayerOutcome::new(1, PlayerStatus::Active, hole),
//! ];
//! let state = TerminalState::new(players, flop, 100, Street::Flop);
//!
//! assert_eq!(
//!     resolve(&state),
//!     Err(ShowdownError::PrematureShowdown { live: 2, community: 3 })
//! );
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod pot;
pub mod showdown;
pub mod state;
