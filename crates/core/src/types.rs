//! Payoff types with enforced invariants.
//!
//! - Payoff: terminal payoff for one player, in range [-1, 1]
//! - Payoffs: the payoff of every player at a terminal state

use crate::{DuelError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A terminal payoff for a single player.
///
/// Invariant: Value is in range [-1, 1] where:
/// - +1 means the player won
/// - -1 means the player lost
/// - 0 means a draw
///
/// Games that score a loss as 0 rather than -1 are also valid.
///
/// # Example
/// ```
/// use duel_core::Payoff;
///
/// let payoff = Payoff::new(1.0).unwrap();
/// assert!(payoff.is_win());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Payoff(f32);

impl Payoff {
    /// Payoff for a win.
    pub const WIN: Self = Self(1.0);

    /// Payoff for a loss.
    pub const LOSS: Self = Self(-1.0);

    /// Payoff for a draw.
    pub const DRAW: Self = Self(0.0);

    /// Create a new payoff.
    ///
    /// # Errors
    /// Returns `DuelError::InvalidPayoff` if the value is outside [-1, 1] or NaN.
    pub fn new(value: f32) -> Result<Self> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(DuelError::InvalidPayoff(format!(
                "payoff {} is outside range [-1, 1]",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    pub fn get(self) -> f32 {
        self.0
    }

    /// True only for the distinguished win payoff.
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Win indicator: 1.0 for a win, 0.0 for anything else.
    pub fn win_signal(self) -> f32 {
        if self.is_win() {
            1.0
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Payoffs of every player at a terminal state.
#[derive(Clone, Debug, PartialEq)]
pub struct Payoffs<P: Copy + Eq + Hash + Debug>(HashMap<P, Payoff>);

impl<P: Copy + Eq + Hash + Debug> Payoffs<P> {
    /// Create payoffs from `(player, payoff)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (P, Payoff)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Payoffs for a decided game: `winner` gets WIN, `loser` gets LOSS.
    pub fn decisive(winner: P, loser: P) -> Self {
        Self::new([(winner, Payoff::WIN), (loser, Payoff::LOSS)])
    }

    /// Payoffs for a drawn game.
    pub fn draw(players: impl IntoIterator<Item = P>) -> Self {
        Self::new(players.into_iter().map(|p| (p, Payoff::DRAW)))
    }

    /// Get the payoff for `player`.
    ///
    /// # Errors
    /// Returns `DuelError::MissingPayoff` if the game reported nothing for `player`.
    pub fn of(&self, player: P) -> Result<Payoff> {
        self.0
            .get(&player)
            .copied()
            .ok_or_else(|| DuelError::MissingPayoff(format!("{:?}", player)))
    }

    /// Number of players with a payoff.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no payoffs were reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
