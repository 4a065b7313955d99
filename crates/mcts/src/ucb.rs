//! Adversarial bandit scores used during selection.
//!
//! Statistics are always stored from the deciding player's point of view, so
//! on the opponent's plies the exploitation term is mirrored: the opponent's
//! implied win rate is `1 - wins / visits`.

use crate::node::NodeStats;

/// Whose ply a level of the tree models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perspective {
    /// The deciding player chooses among these children.
    Own,
    /// The modeled opponent chooses among these children.
    Opponent,
}

impl Perspective {
    /// The perspective one level further down.
    pub fn flip(self) -> Self {
        match self {
            Perspective::Own => Perspective::Opponent,
            Perspective::Opponent => Perspective::Own,
        }
    }
}

/// `C * sqrt(ln(N_parent) / N_child)`.
///
/// Only defined for `visits > 0` and a finite, non-negative `exploration`.
pub fn explore_term(exploration: f32, parent_visits: u32, visits: u32) -> f32 {
    exploration * ((parent_visits as f32).ln() / visits as f32).sqrt()
}

/// Own-ply score: `wins/visits + explore`.
pub fn ucb_own(child: &NodeStats, parent_visits: u32, exploration: f32) -> f32 {
    if child.visits == 0 {
        return f32::INFINITY;
    }
    child.win_rate() + explore_term(exploration, parent_visits, child.visits)
}

/// Opponent-ply score: `1 - wins/visits + explore`.
pub fn ucb_opponent(child: &NodeStats, parent_visits: u32, exploration: f32) -> f32 {
    if child.visits == 0 {
        return f32::INFINITY;
    }
    1.0 - child.win_rate() + explore_term(exploration, parent_visits, child.visits)
}

/// Score a child from the given perspective.
pub fn score(
    child: &NodeStats,
    parent_visits: u32,
    exploration: f32,
    perspective: Perspective,
) -> f32 {
    match perspective {
        Perspective::Own => ucb_own(child, parent_visits, exploration),
        Perspective::Opponent => ucb_opponent(child, parent_visits, exploration),
    }
}
