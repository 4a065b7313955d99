//! Reference games for exercising the search.
//!
//! Tic-tac-toe has no boxes to claim, so both rollout policies behave alike
//! on it; ultimate tic-tac-toe gives the greedy rollout something to chase.

pub mod tictactoe;
pub mod ultimate;

pub use tictactoe::{Player, TicTacToe, TicTacToeAction, TicTacToeState};
pub use ultimate::{BoxStatus, UltimateAction, UltimateState, UltimateTicTacToe};
