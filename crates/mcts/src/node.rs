//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices for cache locality and simpler memory management.

use std::hash::Hash;

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Using indices instead of pointers avoids Rc/RefCell overhead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Statistics for a single MCTS node.
///
/// `wins` is always credited from the deciding player's point of view.
#[derive(Clone, Debug, Default)]
pub struct NodeStats {
    /// Number of simulations that passed through this node.
    pub visits: u32,

    /// Sum of backpropagated outcomes.
    pub wins: f32,
}

impl NodeStats {
    /// Observed win rate for the deciding player.
    ///
    /// Returns 0.0 if the node has never been visited.
    pub fn win_rate(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f32
        }
    }

    /// Record one simulation outcome.
    pub fn record(&mut self, outcome: f32) {
        self.visits += 1;
        self.wins += outcome;
    }
}

/// A node in the MCTS tree.
///
/// An action lives in exactly one of `untried_actions` and `children`, moving
/// from the first to the second when the child is expanded.
#[derive(Clone, Debug)]
pub struct Node<A: Copy + Eq + Hash> {
    /// Parent handle, used only for upward walks (None for root).
    pub parent: Option<NodeId>,

    /// Action that led to this node (None for root).
    pub parent_action: Option<A>,

    /// Children in expansion order: (action, node_id) pairs.
    pub children: Vec<(A, NodeId)>,

    /// Legal actions not yet expanded into children.
    pub untried_actions: Vec<A>,

    /// Node statistics (visits, wins).
    pub stats: NodeStats,
}

impl<A: Copy + Eq + Hash> Node<A> {
    /// Create the root node.
    pub fn root(legal_actions: Vec<A>) -> Self {
        Self {
            parent: None,
            parent_action: None,
            children: Vec::new(),
            untried_actions: legal_actions,
            stats: NodeStats::default(),
        }
    }

    /// Create a child reached from `parent` by playing `action`.
    pub fn child(parent: NodeId, action: A, legal_actions: Vec<A>) -> Self {
        Self {
            parent: Some(parent),
            parent_action: Some(action),
            children: Vec::new(),
            untried_actions: legal_actions,
            stats: NodeStats::default(),
        }
    }

    /// True while selection may descend through this node.
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty() && !self.children.is_empty()
    }

    /// True if no action is left to expand and nothing was ever expanded.
    pub fn is_terminal_leaf(&self) -> bool {
        self.untried_actions.is_empty() && self.children.is_empty()
    }

    /// Look up the child reached by `action`.
    pub fn child_for(&self, action: A) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, id)| *id)
    }
}
