//! Monte Carlo Tree Search implementation.
//!
//! Every simulation runs select -> (terminal shortcut | expand -> rollout) ->
//! backpropagate against a fresh copy of the real state. Outcomes are credited
//! from the deciding player's point of view only; selection mirrors them on
//! the opponent's plies.

use crate::{
    config::{MctsConfig, RolloutSignal},
    node::NodeId,
    rollout::{GreedyRollout, RolloutPolicy, UniformRollout},
    tree::Tree,
    ucb::{self, Perspective},
};
use duel_core::{Board, Result};
use rand::Rng;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Statistics of one root child after a search.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildStats<A> {
    /// Action leading to the child.
    pub action: A,

    /// Accumulated outcome signal.
    pub wins: f32,

    /// Simulations through the child.
    pub visits: u32,
}

/// Result of an MCTS search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    /// Root child with the most accumulated wins, or None if the root was
    /// never expanded (terminal state or zero simulations).
    pub best_action: Option<A>,

    /// Root children in expansion order.
    pub children: Vec<ChildStats<A>>,

    /// Simulations through the root.
    pub root_visits: u32,

    /// Total nodes built during the search.
    pub tree_size: usize,
}

/// Monte Carlo Tree Search with an adversarial UCB selection.
///
/// Generic over:
/// - `B`: The board being played
/// - `P`: The rollout policy
/// - `R`: The random number generator used for expansion
pub struct Mcts<B: Board, P: RolloutPolicy<B>, R: Rng> {
    config: MctsConfig,
    policy: P,
    rng: R,
    _board: PhantomData<B>,
}

/// MCTS with uniformly random rollouts.
pub type UniformMcts<B, R> = Mcts<B, UniformRollout<R>, R>;

/// MCTS with one-ply greedy box rollouts.
pub type GreedyMcts<B, R> = Mcts<B, GreedyRollout<R>, R>;

impl<B, P, R> Mcts<B, P, R>
where
    B: Board,
    P: RolloutPolicy<B>,
    R: Rng,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, policy: P, rng: R) -> Self {
        Self {
            config,
            policy,
            rng,
            _board: PhantomData,
        }
    }

    /// The configuration this instance searches with.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Pick the action to play at `state`, or None if the search produced no
    /// root children.
    ///
    /// # Errors
    /// Propagates board errors unchanged.
    pub fn decide(&mut self, board: &B, state: &B::State) -> Result<Option<B::Action>> {
        Ok(self.search(board, state)?.best_action)
    }

    /// Run the configured number of simulations from `state`.
    ///
    /// The tree is built fresh and dropped before returning.
    pub fn search(&mut self, board: &B, state: &B::State) -> Result<SearchResult<B::Action>> {
        let tree = self.grow_tree(board, state)?;
        let root = tree.root();

        let children: Vec<ChildStats<B::Action>> = root
            .children
            .iter()
            .map(|&(action, id)| {
                let stats = &tree.get(id).stats;
                ChildStats {
                    action,
                    wins: stats.wins,
                    visits: stats.visits,
                }
            })
            .collect();

        let best_action = most_wins(&children);

        debug!(
            simulations = self.config.num_simulations,
            tree_size = tree.len(),
            root_visits = root.stats.visits,
            action = ?best_action,
            "MCTS decision complete"
        );

        Ok(SearchResult {
            best_action,
            children,
            root_visits: root.stats.visits,
            tree_size: tree.len(),
        })
    }

    /// Build the search tree for `state`.
    pub(crate) fn grow_tree(&mut self, board: &B, state: &B::State) -> Result<Tree<B::Action>> {
        let identity = board.current_player(state);
        let mut tree = Tree::new(board.legal_actions(state));

        for _ in 0..self.config.num_simulations {
            self.simulate(board, &mut tree, state.clone(), identity)?;
        }

        Ok(tree)
    }

    /// Run a single simulation.
    fn simulate(
        &mut self,
        board: &B,
        tree: &mut Tree<B::Action>,
        state: B::State,
        identity: B::Player,
    ) -> Result<()> {
        let (leaf, leaf_state) = self.select(board, tree, state);

        // Nothing left to expand and no children: the game is over here
        if tree.get(leaf).is_terminal_leaf() {
            let payoff = board.points_values(&leaf_state)?.of(identity)?;
            tree.backpropagate(leaf, payoff.get());
            trace!(
                depth = tree.depth(leaf),
                shortcut = true,
                outcome = payoff.get(),
                "MCTS simulation complete"
            );
            return Ok(());
        }

        let (child, child_state) = self.expand(board, tree, leaf, &leaf_state);

        let payoff = self.policy.rollout(board, &child_state)?.of(identity)?;
        let outcome = match self.config.rollout_signal {
            RolloutSignal::WinLoss => payoff.win_signal(),
            RolloutSignal::Payoff => payoff.get(),
        };
        tree.backpropagate(child, outcome);

        trace!(
            depth = tree.depth(child),
            shortcut = false,
            outcome = outcome,
            "MCTS simulation complete"
        );

        Ok(())
    }

    /// Descend while the current node is fully expanded.
    ///
    /// The perspective starts as the deciding player's on the root's children
    /// and flips at every level, independent of who the board says is to move.
    fn select(
        &self,
        board: &B,
        tree: &Tree<B::Action>,
        state: B::State,
    ) -> (NodeId, B::State) {
        let mut current = NodeId::ROOT;
        let mut state = state;
        let mut perspective = Perspective::Own;

        loop {
            let node = tree.get(current);
            if !node.is_fully_expanded() {
                return (current, state);
            }

            let parent_visits = node.stats.visits;
            let mut best = None;
            let mut best_score = f32::NEG_INFINITY;

            for &(action, child_id) in &node.children {
                let score = ucb::score(
                    &tree.get(child_id).stats,
                    parent_visits,
                    self.config.exploration,
                    perspective,
                );

                // Strict comparison: the first child reaching the max wins ties
                if score > best_score {
                    best_score = score;
                    best = Some((action, child_id));
                }
            }

            // INVARIANT: fully expanded nodes have children with comparable scores
            let (action, child_id) =
                best.expect("BUG: select found no child to descend into");

            state = board.next_state(&state, action);
            current = child_id;
            perspective = perspective.flip();
        }
    }

    /// Expand one uniformly chosen untried action of `node_id`.
    ///
    /// # Panics
    /// Panics if the node has no untried actions.
    fn expand(
        &mut self,
        board: &B,
        tree: &mut Tree<B::Action>,
        node_id: NodeId,
        state: &B::State,
    ) -> (NodeId, B::State) {
        let untried = &mut tree.get_mut(node_id).untried_actions;
        assert!(
            !untried.is_empty(),
            "BUG: expand called on node without untried actions"
        );

        let idx = self.rng.gen_range(0..untried.len());
        let action = untried.remove(idx);

        let next_state = board.next_state(state, action);
        let child_id = tree.add_child(node_id, action, board.legal_actions(&next_state));
        (child_id, next_state)
    }
}

/// First child with the strictly greatest accumulated wins.
fn most_wins<A: Copy>(children: &[ChildStats<A>]) -> Option<A> {
    let mut best = None;
    let mut best_wins = f32::NEG_INFINITY;

    for child in children {
        if child.wins > best_wins {
            best_wins = child.wins;
            best = Some(child.action);
        }
    }

    best
}

/// Pick an action for `state` with the default configuration and uniform
/// rollouts, seeded from the thread-local generator.
///
/// # Errors
/// Propagates board errors unchanged.
pub fn decide<B: Board>(board: &B, state: &B::State) -> Result<Option<B::Action>> {
    let mut mcts: UniformMcts<B, _> = Mcts::new(
        MctsConfig::default(),
        UniformRollout::new(rand::thread_rng()),
        rand::thread_rng(),
    );
    mcts.decide(board, state)
}
