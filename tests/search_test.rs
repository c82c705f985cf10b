//! Tests for the minimax searcher: tactical scenarios, tie-breaking,
//! the perfect-play draw, and equivalence of pruned and unpruned search
//! over the whole reachable state space.

use perfect_play::{GameState, Move, Player, Position, Searcher, Square};
use std::collections::{HashMap, HashSet};

/// Applies a sequence of (row, col) moves, alternating from X.
fn play(moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new();
    for &(row, col) in moves {
        let pos = Position::from_row_col(row, col).expect("test coordinates in range");
        let mover = state.to_move();
        state.apply(Move::new(mover, pos)).expect("legal move");
    }
    state
}

#[test]
fn completes_the_winning_row() {
    // X holds (0,0) and (0,1) with X to move: (0,2) wins now. O's
    // column-one pair is dead, its top square is X's.
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 1)]);
    assert_eq!(state.to_move(), Player::X);

    let chosen = Searcher::new().best_move(&state);
    assert_eq!(chosen, Position::TopRight);
}

#[test]
fn blocks_the_opponent_when_it_cannot_win() {
    // X at (0,0) and (0,1), O at (1,1), O to move: O has no win of its
    // own and must block the top row at (0,2).
    let state = play(&[(0, 0), (1, 1), (0, 1)]);
    assert_eq!(state.to_move(), Player::O);

    let chosen = Searcher::new().best_move(&state);
    assert_eq!(chosen, Position::TopRight);
}

#[test]
fn first_move_from_empty_board_breaks_ties_row_major() {
    // Every opening move draws under perfect play, so the tie-break
    // contract forces the lexicographically-first square.
    let chosen = Searcher::new().best_move(&GameState::new());
    assert_eq!(chosen, Position::TopLeft);
}

#[test]
fn self_play_from_empty_board_is_a_draw() {
    let mut state = GameState::new();
    let searcher = Searcher::new();

    while !state.is_terminal() {
        let mover = state.to_move();
        let position = searcher.best_move(&state);
        state.apply(Move::new(mover, position)).expect("legal move");
    }

    // Tic-tac-toe is a theoretical draw; the first mover must never lose.
    assert!(state.is_draw());
}

#[test]
fn search_reports_the_score_with_the_move() {
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 1)]);
    let result = Searcher::new().search(&state);
    assert_eq!(result.position, Position::TopRight);
    assert_eq!(result.score, 1);
}

// ─────────────────────────────────────────────────────────────
//  Unpruned reference search
// ─────────────────────────────────────────────────────────────

/// Compact memo key for a board (the side to move follows from it).
fn encode(state: &GameState) -> String {
    let mut key = String::with_capacity(9);
    for square in state.board().squares() {
        key.push(match square {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        });
    }
    key
}

/// Exhaustive minimax without pruning, scored from X's perspective:
/// X maximizes, O minimizes.
fn solve(state: &mut GameState, memo: &mut HashMap<String, i8>) -> i8 {
    let key = encode(state);
    if let Some(value) = memo.get(&key) {
        return *value;
    }

    let value = if let Some(winner) = state.winner() {
        match winner {
            Player::X => 1,
            Player::O => -1,
        }
    } else if state.is_draw() {
        0
    } else {
        let mover = state.to_move();
        let mut best: i8 = match mover {
            Player::X => -2,
            Player::O => 2,
        };
        for pos in state.available_moves() {
            let mov = Move::new(mover, pos);
            state.apply(mov).expect("enumerated move is legal");
            let child = solve(state, memo);
            state.undo(mov).expect("applied move undoes");
            best = match mover {
                Player::X => best.max(child),
                Player::O => best.min(child),
            };
        }
        best
    };

    memo.insert(key, value);
    value
}

/// Root selection with the same first-strict-best tie-break as the
/// pruned searcher, but no pruning anywhere.
fn best_move_unpruned(state: &GameState, memo: &mut HashMap<String, i8>) -> Position {
    let mover = state.to_move();
    let mut scratch = state.clone();
    let mut best_position = None;
    let mut best_value: i8 = match mover {
        Player::X => -2,
        Player::O => 2,
    };

    for pos in state.available_moves() {
        let mov = Move::new(mover, pos);
        scratch.apply(mov).expect("enumerated move is legal");
        let value = solve(&mut scratch, memo);
        scratch.undo(mov).expect("applied move undoes");

        let better = match mover {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if better {
            best_value = value;
            best_position = Some(pos);
        }
    }

    best_position.expect("non-terminal state has at least one move")
}

fn compare_everywhere(
    state: &mut GameState,
    seen: &mut HashSet<String>,
    memo: &mut HashMap<String, i8>,
    searcher: &Searcher,
) {
    if !seen.insert(encode(state)) {
        return;
    }
    if state.is_terminal() {
        return;
    }

    let pruned = searcher.best_move(state);
    let unpruned = best_move_unpruned(state, memo);
    assert_eq!(
        pruned,
        unpruned,
        "pruning changed the decision at:\n{}",
        state.board()
    );

    for pos in state.available_moves() {
        let mov = Move::new(state.to_move(), pos);
        state.apply(mov).expect("enumerated move is legal");
        compare_everywhere(state, seen, memo, searcher);
        state.undo(mov).expect("applied move undoes");
    }
}

#[test]
fn pruning_never_changes_the_chosen_move() {
    let mut state = GameState::new();
    let mut seen = HashSet::new();
    let mut memo = HashMap::new();
    let searcher = Searcher::new();

    compare_everywhere(&mut state, &mut seen, &mut memo, &searcher);

    assert!(seen.len() > 5000, "expected thousands of unique states");
}
