//! Ultimate tic-tac-toe: nine tic-tac-toe boxes arranged in a 3x3 grid.
//!
//! Completing a line inside a box claims it; a box filled without a line is
//! closed as drawn. Claiming three boxes in a line wins the game. The cell a
//! player marks sends the opponent to the box with the same index; when that
//! box is already closed the opponent may play in any open box.
//!
//! Boxes are the resource the greedy rollout chases.

use super::tictactoe::{line_owner, Player};
use duel_core::{Board, DuelError, Payoffs, Result};
use std::fmt;

/// Status of one of the nine boxes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BoxStatus {
    Open,
    Won(Player),
    Drawn,
}

impl BoxStatus {
    fn owner(self) -> Option<Player> {
        match self {
            BoxStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Ultimate tic-tac-toe action: a cell (0-8) inside a box (0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UltimateAction {
    pub board: u8,
    pub cell: u8,
}

impl UltimateAction {
    pub fn new(board: u8, cell: u8) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for UltimateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.board, self.cell)
    }
}

/// Ultimate tic-tac-toe state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct UltimateState {
    /// Marks per box, row-major in both levels.
    cells: [[Option<Player>; 9]; 9],

    boxes: [BoxStatus; 9],

    /// Box the player to move is sent to, None for a free choice.
    forced: Option<usize>,

    current: Player,

    winner: Option<Player>,
}

impl UltimateState {
    /// Create an empty board with X to move anywhere.
    pub fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
            boxes: [BoxStatus::Open; 9],
            forced: None,
            current: Player::X,
            winner: None,
        }
    }

    pub fn box_status(&self, index: usize) -> BoxStatus {
        self.boxes[index]
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Box the player to move must play in, if restricted.
    pub fn forced_box(&self) -> Option<usize> {
        self.forced
    }

    fn all_closed(&self) -> bool {
        self.boxes.iter().all(|b| *b != BoxStatus::Open)
    }
}

impl Default for UltimateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Ultimate tic-tac-toe game implementation.
#[derive(Clone, Debug)]
pub struct UltimateTicTacToe;

impl UltimateTicTacToe {
    pub fn initial_state(&self) -> UltimateState {
        UltimateState::new()
    }

    /// Play a sequence of `(box, cell)` moves from the initial state.
    pub fn play(&self, moves: &[(u8, u8)]) -> UltimateState {
        moves.iter().fold(self.initial_state(), |state, &(b, c)| {
            self.next_state(&state, UltimateAction::new(b, c))
        })
    }
}

impl Board for UltimateTicTacToe {
    type State = UltimateState;
    type Action = UltimateAction;
    type Player = Player;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.winner.is_some() {
            return Vec::new();
        }

        let boxes: Vec<usize> = match state.forced {
            Some(b) if state.boxes[b] == BoxStatus::Open => vec![b],
            _ => (0..9).filter(|&b| state.boxes[b] == BoxStatus::Open).collect(),
        };

        boxes
            .into_iter()
            .flat_map(|b| {
                (0..9)
                    .filter(move |&c| state.cells[b][c].is_none())
                    .map(move |c| UltimateAction::new(b as u8, c as u8))
            })
            .collect()
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Self::State {
        let (b, c) = (action.board as usize, action.cell as usize);
        let mut next = state.clone();

        next.cells[b][c] = Some(state.current);
        if let Some(owner) = line_owner(&next.cells[b]) {
            next.boxes[b] = BoxStatus::Won(owner);
        } else if next.cells[b].iter().all(|cell| cell.is_some()) {
            next.boxes[b] = BoxStatus::Drawn;
        }

        let big: [Option<Player>; 9] = next.boxes.map(BoxStatus::owner);
        next.winner = line_owner(&big);
        next.forced = Some(c);
        next.current = state.current.opposite();
        next
    }

    fn is_ended(&self, state: &Self::State) -> bool {
        state.winner.is_some() || state.all_closed()
    }

    fn points_values(&self, state: &Self::State) -> Result<Payoffs<Self::Player>> {
        if let Some(winner) = state.winner {
            Ok(Payoffs::decisive(winner, winner.opposite()))
        } else if state.all_closed() {
            Ok(Payoffs::draw([Player::X, Player::O]))
        } else {
            Err(DuelError::NotTerminal)
        }
    }

    fn current_player(&self, state: &Self::State) -> Self::Player {
        state.current
    }

    fn owned_boxes(&self, state: &Self::State) -> Vec<(usize, Option<Self::Player>)> {
        state
            .boxes
            .iter()
            .enumerate()
            .filter_map(|(i, status)| match status {
                BoxStatus::Open => None,
                BoxStatus::Won(player) => Some((i, Some(*player))),
                BoxStatus::Drawn => Some((i, None)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Payoff;

    /// X completes the top row of box 0 with its seventh move.
    const CLAIM_BOX_ZERO: [(u8, u8); 7] =
        [(4, 4), (4, 0), (0, 1), (1, 0), (0, 2), (2, 0), (0, 0)];

    #[test]
    fn test_initial_state() {
        let game = UltimateTicTacToe;
        let state = game.initial_state();

        assert_eq!(game.legal_actions(&state).len(), 81);
        assert_eq!(game.current_player(&state), Player::X);
        assert!(!game.is_ended(&state));
        assert!(game.owned_boxes(&state).is_empty());
    }

    #[test]
    fn test_move_sends_opponent_to_box() {
        let game = UltimateTicTacToe;
        let state = game.play(&[(0, 4)]);

        let actions = game.legal_actions(&state);
        assert_eq!(state.forced_box(), Some(4));
        assert_eq!(actions.len(), 9);
        assert!(actions.iter().all(|a| a.board == 4));
        assert_eq!(game.current_player(&state), Player::O);
    }

    #[test]
    fn test_claiming_a_box() {
        let game = UltimateTicTacToe;
        let state = game.play(&CLAIM_BOX_ZERO);

        assert_eq!(state.box_status(0), BoxStatus::Won(Player::X));
        assert_eq!(game.owned_boxes(&state), vec![(0, Some(Player::X))]);
        assert!(!game.is_ended(&state));
    }

    #[test]
    fn test_sent_to_closed_box_plays_anywhere() {
        let game = UltimateTicTacToe;
        // The claiming move marked cell 0, sending O to the closed box 0
        let state = game.play(&CLAIM_BOX_ZERO);
        let actions = game.legal_actions(&state);

        // 72 cells outside box 0, four of them already marked
        assert_eq!(actions.len(), 68);
        assert!(actions.iter().all(|a| a.board != 0));
    }

    #[test]
    fn test_big_line_wins() {
        let game = UltimateTicTacToe;
        let mut state = game.initial_state();
        state.boxes[0] = BoxStatus::Won(Player::X);
        state.boxes[1] = BoxStatus::Won(Player::X);
        state.cells[2][0] = Some(Player::X);
        state.cells[2][1] = Some(Player::X);
        state.forced = Some(2);

        let state = game.next_state(&state, UltimateAction::new(2, 2));

        assert_eq!(state.winner(), Some(Player::X));
        assert!(game.is_ended(&state));
        assert!(game.legal_actions(&state).is_empty());
        let payoffs = game.points_values(&state).unwrap();
        assert_eq!(payoffs.of(Player::X).unwrap(), Payoff::WIN);
        assert_eq!(payoffs.of(Player::O).unwrap(), Payoff::LOSS);
    }

    #[test]
    fn test_full_box_is_drawn() {
        let game = UltimateTicTacToe;
        let mut state = game.initial_state();
        // X O X / X O O / O X _ : X to move fills cell 8 without a line
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
        ];
        for (i, mark) in marks.iter().enumerate() {
            state.cells[3][i] = Some(*mark);
        }
        state.forced = Some(3);

        let state = game.next_state(&state, UltimateAction::new(3, 8));

        assert_eq!(state.box_status(3), BoxStatus::Drawn);
        assert_eq!(game.owned_boxes(&state), vec![(3, None)]);
    }

    #[test]
    fn test_all_boxes_closed_is_draw() {
        let game = UltimateTicTacToe;
        let mut state = game.initial_state();
        state.boxes = [BoxStatus::Drawn; 9];
        state.boxes[0] = BoxStatus::Won(Player::O);

        assert!(game.is_ended(&state));
        assert!(game.legal_actions(&state).is_empty());
        let payoffs = game.points_values(&state).unwrap();
        assert_eq!(payoffs.of(Player::X).unwrap(), Payoff::DRAW);
    }

    #[test]
    fn test_points_values_not_terminal() {
        let game = UltimateTicTacToe;
        assert_eq!(
            game.points_values(&game.initial_state()),
            Err(DuelError::NotTerminal)
        );
    }
}
