//! CPU strategy tests.

use noughts_tictactoe::engine::{heuristic, minimax};
use noughts_tictactoe::{Board, Difficulty, MoveEngine, Player};

fn board_from(marks: &str) -> Board {
    let mut board = Board::new();
    for (index, mark) in marks.chars().enumerate() {
        match mark {
            'X' => board.place(index, Player::X).unwrap(),
            'O' => board.place(index, Player::O).unwrap(),
            _ => {}
        }
    }
    board
}

/// Plays out every line of play where `cpu` uses minimax and the opponent
/// tries every legal move, asserting the CPU never loses.
fn assert_never_loses(board: Board, to_move: Player, cpu: Player) -> usize {
    if let Some(winner) = board.winner() {
        assert_eq!(winner, cpu, "CPU lost:\n{}", board.display());
        return 1;
    }
    if board.is_full() {
        return 1;
    }

    if to_move == cpu {
        let index = minimax::best_move(&board, cpu).expect("board is not full");
        let mut next = board;
        next.place(index, cpu).unwrap();
        assert_never_loses(next, to_move.opponent(), cpu)
    } else {
        board
            .empty_indices()
            .into_iter()
            .map(|index| {
                let mut next = board;
                next.place(index, to_move).unwrap();
                assert_never_loses(next, to_move.opponent(), cpu)
            })
            .sum()
    }
}

#[test]
fn test_hard_as_o_never_loses_against_any_line() {
    let games = assert_never_loses(Board::new(), Player::X, Player::O);
    assert!(games > 0);
}

#[test]
fn test_hard_as_x_never_loses_against_any_line() {
    let games = assert_never_loses(Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let mut engine = MoveEngine::with_seed(0);
    while board.winner().is_none() && !board.is_full() {
        let index = engine
            .select_move(&board, Difficulty::Hard, to_move)
            .unwrap();
        board.place(index, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}

#[test]
fn test_hard_beats_or_draws_weaker_strategies() {
    for seed in 0..10 {
        for weaker in [Difficulty::Easy, Difficulty::Medium] {
            let mut board = Board::new();
            let mut to_move = Player::X;
            let mut engine = MoveEngine::with_seed(seed);
            while board.winner().is_none() && !board.is_full() {
                let difficulty = if to_move == Player::O {
                    Difficulty::Hard
                } else {
                    weaker
                };
                let index = engine.select_move(&board, difficulty, to_move).unwrap();
                board.place(index, to_move).unwrap();
                to_move = to_move.opponent();
            }
            assert_ne!(board.winner(), Some(Player::X), "seed {}", seed);
        }
    }
}

#[test]
fn test_hard_prefers_faster_win() {
    // O O . / X X . / X . .  Winning now (2) beats blocking first.
    let board = board_from("OO.XX.X..");
    assert_eq!(minimax::best_move(&board, Player::O), Some(2));
}

#[test]
fn test_medium_takes_win_despite_threat() {
    // X X . / O O . / X . .  Both sides threaten; O completes row 2.
    let board = board_from("XX.OO.X..");
    for seed in 0..5 {
        let mut engine = MoveEngine::with_seed(seed);
        assert_eq!(
            engine.select_move(&board, Difficulty::Medium, Player::O),
            Ok(5)
        );
    }
}

#[test]
fn test_medium_blocks_only_threat() {
    // . . . / X X . / O . .
    let board = board_from("...XX.O..");
    for seed in 0..5 {
        let mut engine = MoveEngine::with_seed(seed);
        assert_eq!(
            engine.select_move(&board, Difficulty::Medium, Player::O),
            Ok(5)
        );
    }
}

#[test]
fn test_medium_as_x_blocks_o() {
    // O . . / X O . / X . .  O threatens 8; X has no win of its own.
    let board = board_from("O..XO.X..");
    assert_eq!(heuristic::winning_move(&board, Player::X), None);
    let mut engine = MoveEngine::with_seed(11);
    assert_eq!(
        engine.select_move(&board, Difficulty::Medium, Player::X),
        Ok(8)
    );
}

#[test]
fn test_easy_moves_are_empty_cells() {
    let board = board_from("X.O.X.O..");
    let empty = board.empty_indices();
    let mut engine = MoveEngine::with_seed(2024);
    for _ in 0..100 {
        let index = engine
            .select_move(&board, Difficulty::Easy, Player::X)
            .unwrap();
        assert!(empty.contains(&index));
    }
}
