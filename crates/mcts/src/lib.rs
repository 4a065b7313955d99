//! Adversarial Monte Carlo Tree Search.
//!
//! This crate picks a move for one player of a deterministic, two-player,
//! perfect-information game implementing the `duel_core::Board` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `Board` implementation
//! - **Adversarial UCB**: Own plies maximise the deciding player's win rate,
//!   opponent plies maximise its complement
//! - **Pluggable rollouts**: Uniform-random or one-ply greedy box grabbing
//! - **Fresh tree per decision**: Nothing is kept between calls
//!
//! # Example
//!
//! ```
//! use duel_mcts::{Mcts, MctsConfig, UniformRollout, games::TicTacToe};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = TicTacToe;
//! let state = game.initial_state();
//!
//! let config = MctsConfig::with_simulations(100);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut mcts = Mcts::new(config, UniformRollout::new(rng.clone()), rng);
//!
//! let action = mcts.decide(&game, &state).expect("tic-tac-toe reports payoffs");
//! println!("Best action: {:?}", action);
//! ```

pub mod config;
pub mod games;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;
pub mod ucb;

pub use config::{MctsConfig, RolloutSignal};
pub use rollout::{GreedyRollout, RolloutPolicy, UniformRollout};
pub use search::{decide, ChildStats, GreedyMcts, Mcts, SearchResult, UniformMcts};
