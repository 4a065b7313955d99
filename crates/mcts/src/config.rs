//! MCTS configuration parameters.
//!
//! These parameters control the behavior of the Monte Carlo Tree Search algorithm.

/// How a finished rollout is turned into the value backpropagated up the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RolloutSignal {
    /// 1.0 if the deciding player's payoff is a win, otherwise 0.0.
    #[default]
    WinLoss,

    /// The deciding player's raw payoff.
    Payoff,
}

/// MCTS configuration parameters.
#[derive(Clone, Debug)]
pub struct MctsConfig {
    /// Number of simulations per decision.
    pub num_simulations: usize,

    /// Exploration constant C of the bandit score.
    /// Higher values favor rarely visited children. Must be finite and
    /// non-negative.
    pub exploration: f32,

    /// Value backpropagated after a rollout.
    /// Terminal shortcuts always backpropagate the raw payoff.
    pub rollout_signal: RolloutSignal,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 100,
            exploration: 2.0,
            rollout_signal: RolloutSignal::WinLoss,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified number of simulations.
    pub fn with_simulations(num_simulations: usize) -> Self {
        Self {
            num_simulations,
            ..Default::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn simulations(mut self, n: usize) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set exploration constant.
    ///
    /// # Panics
    /// Panics if `c` is NaN, infinite or negative.
    pub fn exploration(mut self, c: f32) -> Self {
        assert!(
            c.is_finite() && c >= 0.0,
            "exploration constant must be finite and non-negative, got {}",
            c
        );
        self.exploration = c;
        self
    }

    /// Builder pattern: set rollout signal.
    pub fn rollout_signal(mut self, signal: RolloutSignal) -> Self {
        self.rollout_signal = signal;
        self
    }
}
