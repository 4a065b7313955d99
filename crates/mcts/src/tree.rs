//! Arena-allocated MCTS tree.
//!
//! Using a Vec<Node> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>.

use crate::node::{Node, NodeId};
use std::hash::Hash;

/// Arena-allocated MCTS tree.
///
/// Nodes are stored in a contiguous vector and referenced by index. A child
/// is owned by the arena and listed in exactly one parent's `children`; the
/// `parent` field is a plain index used to walk back up.
#[derive(Debug)]
pub struct Tree<A: Copy + Eq + Hash> {
    nodes: Vec<Node<A>>,
}

impl<A: Copy + Eq + Hash> Tree<A> {
    /// Create a new tree whose root may still try `legal_actions`.
    pub fn new(legal_actions: Vec<A>) -> Self {
        Self {
            nodes: vec![Node::root(legal_actions)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &Node<A> {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<A> {
        &mut self.nodes[id.0]
    }

    /// Get the root node.
    pub fn root(&self) -> &Node<A> {
        self.get(NodeId::ROOT)
    }

    /// Add a child under `parent` for `action`, returning its ID.
    ///
    /// # Panics
    /// Panics if `action` is still untried at `parent` or already has a child;
    /// the caller must have taken it out of `untried_actions` first.
    pub fn add_child(&mut self, parent: NodeId, action: A, legal_actions: Vec<A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent_node = self.get_mut(parent);
        assert!(
            !parent_node.untried_actions.contains(&action),
            "BUG: child added for an action that is still untried"
        );
        assert!(
            parent_node.child_for(action).is_none(),
            "BUG: action already has a child"
        );
        parent_node.children.push((action, id));
        self.nodes.push(Node::child(parent, action, legal_actions));
        id
    }

    /// Credit `outcome` to `from` and every ancestor up to the root.
    pub fn backpropagate(&mut self, from: NodeId, outcome: f32) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.stats.record(outcome);
            current = node.parent;
        }
    }

    /// Actions leading from the root to `id`, in play order.
    pub fn path_to(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = self.get(id);
        while let (Some(parent), Some(action)) = (current.parent, current.parent_action) {
            actions.push(action);
            current = self.get(parent);
        }
        actions.reverse();
        actions
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).parent;
        }
        depth
    }

    /// Iterate over every node with its ID.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<A>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root with actions 1 and 2, where 1 is expanded and has child 3.
    fn small_tree() -> (Tree<u8>, NodeId, NodeId) {
        let mut tree: Tree<u8> = Tree::new(vec![1, 2]);
        tree.get_mut(NodeId::ROOT).untried_actions.retain(|&a| a != 1);
        let a = tree.add_child(NodeId::ROOT, 1, vec![3]);
        tree.get_mut(a).untried_actions.clear();
        let b = tree.add_child(a, 3, vec![]);
        (tree, a, b)
    }

    #[test]
    fn test_tree_creation() {
        let tree: Tree<u8> = Tree::new(vec![0, 1]);
        assert_eq!(tree.len(), 1); // Root node
        assert!(!tree.is_empty());
        assert_eq!(tree.root().untried_actions, vec![0, 1]);
    }

    #[test]
    fn test_tree_add_child() {
        let (tree, a, b) = small_tree();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root().children, vec![(1, a)]);
        assert_eq!(tree.root().untried_actions, vec![2]);
        assert_eq!(tree.get(b).parent, Some(a));
        assert_eq!(tree.get(b).parent_action, Some(3));
    }

    #[test]
    #[should_panic(expected = "still untried")]
    fn test_add_child_requires_untried_removal() {
        let mut tree: Tree<u8> = Tree::new(vec![1, 2]);
        tree.add_child(NodeId::ROOT, 1, vec![]);
    }

    #[test]
    fn test_backpropagate_reaches_root() {
        let (mut tree, a, b) = small_tree();

        tree.backpropagate(b, 1.0);
        tree.backpropagate(a, 0.0);

        assert_eq!(tree.get(b).stats.visits, 1);
        assert_eq!(tree.get(a).stats.visits, 2);
        assert_eq!(tree.root().stats.visits, 2);
        assert_eq!(tree.get(b).stats.wins, 1.0);
        assert_eq!(tree.get(a).stats.wins, 1.0);
        assert_eq!(tree.root().stats.wins, 1.0);
    }

    #[test]
    fn test_path_and_depth() {
        let (tree, a, b) = small_tree();

        assert_eq!(tree.path_to(NodeId::ROOT), Vec::<u8>::new());
        assert_eq!(tree.path_to(b), vec![1, 3]);
        assert_eq!(tree.depth(NodeId::ROOT), 0);
        assert_eq!(tree.depth(a), 1);
        assert_eq!(tree.depth(b), 2);
    }

    #[test]
    fn test_backpropagate_deep_chain() {
        // Long parent chains must not recurse
        let mut tree: Tree<u32> = Tree::new(vec![0]);
        let mut parent = NodeId::ROOT;
        for i in 0..100_000u32 {
            tree.get_mut(parent).untried_actions.clear();
            parent = tree.add_child(parent, i, vec![i + 1]);
        }

        tree.backpropagate(parent, 1.0);
        assert_eq!(tree.root().stats.visits, 1);
        assert_eq!(tree.depth(parent), 100_000);
    }
}
