//! Duel Core - Board abstraction and payoff types
//!
//! This crate provides the [`Board`] trait that a deterministic,
//! perfect-information, two-player game implements so the search in
//! `duel_mcts` can play it.
//!
//! # Types
//!
//! - [`Board`] - Trait for game implementations
//! - [`Payoff`] - Terminal payoff for one player in [-1, 1]
//! - [`Payoffs`] - Terminal payoffs keyed by player

mod board;
mod error;
mod types;

pub use board::Board;
pub use error::{DuelError, Result};
pub use types::{Payoff, Payoffs};
