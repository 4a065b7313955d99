//! Scenario tests: the search on concrete tic-tac-toe and ultimate positions.
//!
//! Immediate wins and forced blocks have a single correct answer, so a
//! search with a few hundred simulations must find it for any seed.

use duel_core::Board;
use duel_mcts::games::{TicTacToe, TicTacToeAction, UltimateAction, UltimateTicTacToe};
use duel_mcts::{GreedyMcts, GreedyRollout, Mcts, MctsConfig, UniformMcts, UniformRollout};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a uniform-rollout search with the given seed.
fn uniform<B: Board>(seed: u64, simulations: usize) -> UniformMcts<B, ChaCha8Rng> {
    let config = MctsConfig::with_simulations(simulations);
    let rng = ChaCha8Rng::seed_from_u64(seed);
    Mcts::new(config, UniformRollout::new(rng.clone()), rng)
}

/// Create a greedy-rollout search with the given seed.
fn greedy<B: Board>(seed: u64, simulations: usize) -> GreedyMcts<B, ChaCha8Rng> {
    let config = MctsConfig::with_simulations(simulations);
    let rng = ChaCha8Rng::seed_from_u64(seed);
    Mcts::new(config, GreedyRollout::new(rng.clone()), rng)
}

#[test]
fn test_takes_immediate_win() {
    let game = TicTacToe;
    // X _ X
    // O O _
    // _ _ _
    // X to move, cell 1 wins
    let state = game.play(&[0, 3, 2, 4]);

    for seed in 0..5 {
        let mut mcts = uniform::<TicTacToe>(seed, 500);
        let action = mcts.decide(&game, &state).unwrap();
        assert_eq!(action, Some(TicTacToeAction(1)), "seed {}", seed);
    }
}

#[test]
fn test_blocks_immediate_loss() {
    let game = TicTacToe;
    // X X _
    // _ O _
    // _ _ _
    // O to move, must block at 2
    let state = game.play(&[0, 4, 1]);

    for seed in 0..5 {
        let mut mcts = uniform::<TicTacToe>(seed, 1000);
        let action = mcts.decide(&game, &state).unwrap();
        assert_eq!(action, Some(TicTacToeAction(2)), "seed {}", seed);
    }
}

#[test]
fn test_winning_move_has_most_wins() {
    let game = TicTacToe;
    let state = game.play(&[0, 3, 2, 4]);

    let mut mcts = uniform::<TicTacToe>(7, 500);
    let result = mcts.search(&game, &state).unwrap();

    let winning = result
        .children
        .iter()
        .find(|c| c.action == TicTacToeAction(1))
        .unwrap();
    // Every pass through the winning child lands on a terminal win
    assert_eq!(winning.wins, winning.visits as f32);
    assert_eq!(result.root_visits, 500);
}

#[test]
fn test_self_play_reaches_the_end() {
    let game = TicTacToe;

    for seed in 0..3 {
        let mut x = uniform::<TicTacToe>(seed, 200);
        let mut o = uniform::<TicTacToe>(seed + 100, 200);
        let mut state = game.initial_state();
        let mut moves = 0;

        while !game.is_ended(&state) {
            let mcts = if moves % 2 == 0 { &mut x } else { &mut o };
            let action = mcts.decide(&game, &state).unwrap().unwrap();
            assert!(game.legal_actions(&state).contains(&action));
            state = game.next_state(&state, action);
            moves += 1;
        }

        assert!(moves <= 9);
        assert!(game.points_values(&state).is_ok());
    }
}

#[test]
fn test_greedy_rollout_claims_available_box() {
    let game = UltimateTicTacToe;
    // X holds cells 3 and 5 of box 0 and is sent back there
    let state = game.play(&[(4, 4), (4, 0), (0, 3), (3, 0), (0, 5), (5, 0)]);
    let policy = GreedyRollout::new(ChaCha8Rng::seed_from_u64(0));

    assert_eq!(state.forced_box(), Some(0));
    assert_eq!(
        policy.choose_action(&game, &state),
        Some(UltimateAction::new(0, 4))
    );
}

#[test]
fn test_greedy_rollout_takes_first_claiming_cell() {
    let game = UltimateTicTacToe;
    // X holds cells 3, 4 and 8 of box 0 and is sent back there.
    // Cell 0 (0-4-8) and cell 5 (3-4-5) both claim the box.
    let state = game.play(&[(0, 3), (3, 0), (0, 4), (4, 0), (0, 8), (8, 0)]);
    assert_eq!(state.forced_box(), Some(0));

    for seed in 0..10 {
        let policy = GreedyRollout::new(ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(
            policy.choose_action(&game, &state),
            Some(UltimateAction::new(0, 0)),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_ultimate_search_returns_legal_action() {
    let game = UltimateTicTacToe;
    let state = game.play(&[(4, 4), (4, 0)]);

    let mut uniform_search = uniform::<UltimateTicTacToe>(3, 60);
    let mut greedy_search = greedy::<UltimateTicTacToe>(3, 60);

    for action in [
        uniform_search.decide(&game, &state).unwrap(),
        greedy_search.decide(&game, &state).unwrap(),
    ] {
        let action = action.expect("live position yields an action");
        assert!(game.legal_actions(&state).contains(&action));
        // X was sent to box 0
        assert_eq!(action.board, 0);
    }
}

#[test]
fn test_finished_game_has_no_action() {
    let game = TicTacToe;
    let state = game.play(&[0, 3, 1, 4, 2]);

    let mut mcts = uniform::<TicTacToe>(0, 50);
    assert_eq!(mcts.decide(&game, &state).unwrap(), None);
}
