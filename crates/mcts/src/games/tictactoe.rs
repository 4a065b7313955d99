//! Tic-tac-toe implementation for MCTS validation.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw,
//! which makes immediate wins and forced blocks easy to set up in tests.

use duel_core::{Board, DuelError, Payoffs, Result};
use std::fmt;

/// Tic-tac-toe player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// The eight winning lines of a 3x3 grid, row-major cell indices.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Owner of a complete line in a 3x3 grid, if any.
pub(crate) fn line_owner(grid: &[Option<Player>; 9]) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let first = grid[line[0]]?;
        (grid[line[1]] == Some(first) && grid[line[2]] == Some(first)).then_some(first)
    })
}

/// Tic-tac-toe board state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Player>; 9],

    /// Current player to move.
    current: Player,

    /// Cached winner (if any).
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::X,
            winner: None,
        }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the piece at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board.get(cell).copied().flatten()
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match self.board[row * 3 + col] {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe action (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeAction(pub u8);

impl TicTacToeAction {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Tic-tac-toe game implementation.
///
/// There are no boxes to claim, so `owned_boxes` keeps the trait default.
#[derive(Clone, Debug)]
pub struct TicTacToe;

impl TicTacToe {
    /// Returns the initial game state
    pub fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::new()
    }

    /// Play a sequence of cells from the initial state.
    pub fn play(&self, cells: &[u8]) -> TicTacToeState {
        cells.iter().fold(self.initial_state(), |state, &cell| {
            self.next_state(&state, TicTacToeAction(cell))
        })
    }
}

impl Board for TicTacToe {
    type State = TicTacToeState;
    type Action = TicTacToeAction;
    type Player = Player;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.winner.is_some() {
            return Vec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| TicTacToeAction(i as u8))
            .collect()
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Self::State {
        let mut new_state = state.clone();
        new_state.board[action.0 as usize] = Some(state.current);
        new_state.current = state.current.opposite();
        new_state.winner = line_owner(&new_state.board);
        new_state
    }

    fn is_ended(&self, state: &Self::State) -> bool {
        state.winner.is_some() || state.is_full()
    }

    fn points_values(&self, state: &Self::State) -> Result<Payoffs<Self::Player>> {
        if let Some(winner) = state.winner {
            Ok(Payoffs::decisive(winner, winner.opposite()))
        } else if state.is_full() {
            Ok(Payoffs::draw([Player::X, Player::O]))
        } else {
            Err(DuelError::NotTerminal)
        }
    }

    fn current_player(&self, state: &Self::State) -> Self::Player {
        state.current
    }
}
