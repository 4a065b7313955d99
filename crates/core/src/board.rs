use crate::{Payoffs, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// A two-player, turn-based, deterministic game.
///
/// The search never looks inside `State`; it only clones it and hands it back
/// to these methods. Implementations must treat `next_state` as a pure
/// function of its inputs.
pub trait Board {
    /// A complete snapshot of the game position
    type State: Clone;

    /// A move identifier, usable as a map key
    type Action: Copy + Eq + Hash + Debug;

    /// A player identity
    type Player: Copy + Eq + Hash + Debug;

    /// Returns all actions playable from `state`. Empty iff the game has ended.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state (immutable operation)
    fn next_state(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Returns true if no further moves are possible
    fn is_ended(&self, state: &Self::State) -> bool;

    /// Returns the payoff of every player at a terminal state.
    ///
    /// # Errors
    /// Returns [`DuelError::NotTerminal`](crate::DuelError::NotTerminal) when
    /// `state` is not terminal.
    fn points_values(&self, state: &Self::State) -> Result<Payoffs<Self::Player>>;

    /// Returns the player whose decision it is at `state`
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// Returns every claimed box as `(location, owner)`.
    ///
    /// An owner of `None` marks a box that was closed without a winner.
    /// Games without a box resource keep the default, which claims nothing;
    /// the greedy rollout then degrades to uniform play.
    fn owned_boxes(&self, _state: &Self::State) -> Vec<(usize, Option<Self::Player>)> {
        Vec::new()
    }
}
