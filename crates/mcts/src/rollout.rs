//! Rollout policies for MCTS.
//!
//! A rollout plays a position out to the end of the game without growing the
//! tree. The `RolloutPolicy` trait lets the search swap strategies:
//! - `UniformRollout` picks every move uniformly at random
//! - `GreedyRollout` grabs a box whenever a single move can claim one

use duel_core::{Board, Payoffs, Result};
use rand::Rng;
use std::cell::RefCell;

/// Trait for playing a position out to a terminal state.
pub trait RolloutPolicy<B: Board> {
    /// Play from `state` until the board reports the game ended, returning the
    /// terminal payoffs. A state that is already terminal is scored as is.
    ///
    /// # Errors
    /// Propagates any error from `Board::points_values`.
    fn rollout(&self, board: &B, state: &B::State) -> Result<Payoffs<B::Player>>;
}

/// Pick a uniformly random element of a non-empty slice.
fn pick<A: Copy, R: Rng>(rng: &RefCell<R>, actions: &[A]) -> A {
    let idx = rng.borrow_mut().gen_range(0..actions.len());
    actions[idx]
}

/// Play moves chosen by `choose` until the game ends.
fn play_out<B, F>(board: &B, state: &B::State, mut choose: F) -> Result<Payoffs<B::Player>>
where
    B: Board,
    F: FnMut(&B::State) -> Option<B::Action>,
{
    let mut state = state.clone();

    while !board.is_ended(&state) {
        // A non-ended state without moves is the board's bug; points_values reports it
        let Some(action) = choose(&state) else {
            break;
        };
        state = board.next_state(&state, action);
    }

    board.points_values(&state)
}

/// Rollout playing uniformly random legal moves.
pub struct UniformRollout<R: Rng> {
    /// Random number generator (wrapped in RefCell for interior mutability).
    rng: RefCell<R>,
}

impl<R: Rng> UniformRollout<R> {
    /// Create a new uniform rollout policy.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl<B: Board, R: Rng> RolloutPolicy<B> for UniformRollout<R> {
    fn rollout(&self, board: &B, state: &B::State) -> Result<Payoffs<B::Player>> {
        play_out(board, state, |s| {
            let actions = board.legal_actions(s);
            (!actions.is_empty()).then(|| pick(&self.rng, &actions))
        })
    }
}

/// Count the boxes `player` owns at `state`.
pub fn boxes_owned<B: Board>(board: &B, state: &B::State, player: B::Player) -> usize {
    board
        .owned_boxes(state)
        .iter()
        .filter(|(_, owner)| *owner == Some(player))
        .count()
}

/// One-ply greedy rollout.
///
/// At every step the player to move plays the first legal action (in the
/// board's order) that strictly increases the number of boxes they own. If
/// no action claims a box, a uniformly random legal action is played.
pub struct GreedyRollout<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> GreedyRollout<R> {
    /// Create a new greedy rollout policy.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    /// The move this policy plays at `state`, or None if there is none.
    pub fn choose_action<B: Board>(&self, board: &B, state: &B::State) -> Option<B::Action> {
        let actions = board.legal_actions(state);
        if actions.is_empty() {
            return None;
        }

        let player = board.current_player(state);
        let before = boxes_owned(board, state, player);

        let claiming = actions
            .iter()
            .copied()
            .find(|&a| boxes_owned(board, &board.next_state(state, a), player) > before);

        Some(claiming.unwrap_or_else(|| pick(&self.rng, &actions)))
    }
}

impl<B: Board, R: Rng> RolloutPolicy<B> for GreedyRollout<R> {
    fn rollout(&self, board: &B, state: &B::State) -> Result<Payoffs<B::Player>> {
        play_out(board, state, |s| self.choose_action(board, s))
    }
}
