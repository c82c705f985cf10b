//! Adversarial move selection: minimax with alpha-beta pruning.
//!
//! The game tree is small enough (at most 9! leaves) for exhaustive
//! search, so there is no heuristic evaluation and no depth cutoff.
//! The searcher owns a private clone of the state and walks the tree
//! with the apply/undo primitives, so every recursion path leaves the
//! clone exactly as it found it and callers observe a pure function.

use crate::action::Move;
use crate::position::Position;
use crate::state::GameState;
use crate::types::Player;
use tracing::{debug, instrument};

/// Game-theoretic value of a position for the side searched for:
/// +1 win, 0 draw, -1 loss.
pub type Score = i8;

/// Sentinel above any reachable score, used for alpha/beta bounds.
const INF: Score = 2;

/// The chosen move together with its game-theoretic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The selected position.
    pub position: Position,
    /// Outcome under perfect play by both sides, from the perspective
    /// of the side the search ran for.
    pub score: Score,
}

/// Unbeatable opponent for tic-tac-toe.
///
/// Holds no state between calls; each search is a pure function of the
/// supplied [`GameState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher;

impl Searcher {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the optimal move for the side to move.
    ///
    /// # Panics
    ///
    /// Panics if the state is terminal. Calling the searcher without
    /// first checking [`GameState::is_terminal`] is a programming
    /// error, not a recoverable condition.
    #[instrument(skip_all)]
    pub fn best_move(&self, state: &GameState) -> Position {
        self.search(state).position
    }

    /// Full search: the optimal move and its score for the side to move.
    ///
    /// Moves are examined in row-major order and the first move
    /// achieving the strict maximum wins ties. That ordering is part of
    /// the contract, not an accident: callers and tests may rely on the
    /// lexicographically-first optimal move being chosen.
    ///
    /// # Panics
    ///
    /// Panics if the state is terminal (see [`Searcher::best_move`]).
    #[instrument(skip_all)]
    pub fn search(&self, state: &GameState) -> SearchResult {
        assert!(
            !state.is_terminal(),
            "search invoked on a terminal state"
        );

        let side = state.to_move();
        let mut scratch = state.clone();
        let mut nodes = 0u64;

        let mut best_position = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for pos in state.available_moves() {
            let mov = Move::new(side, pos);
            scratch.apply(mov).expect("enumerated move must be legal");
            let score = minimax(&mut scratch, side, 1, alpha, INF, &mut nodes);
            scratch.undo(mov).expect("applied move must undo");

            if score > best_score {
                best_score = score;
                best_position = Some(pos);
            }
            alpha = alpha.max(score);
        }

        let position = best_position.expect("non-terminal state has at least one move");
        debug!(%side, %position, best_score, nodes, "search complete");

        SearchResult {
            position,
            score: best_score,
        }
    }
}

/// Recursive minimax over the remaining game tree.
///
/// `side` is the player the score is measured for; whether a node
/// maximizes or minimizes follows from whose turn it is, since turns
/// alternate strictly. `depth` is tracked for diagnostics only and
/// never shapes the score: a win in one ply scores the same as a win
/// in five.
fn minimax(
    state: &mut GameState,
    side: Player,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    // Leaf scoring, in priority order; mutually exclusive under the
    // single-winner invariant.
    if let Some(winner) = state.winner() {
        return if winner == side { 1 } else { -1 };
    }
    if state.is_draw() {
        return 0;
    }

    let mover = state.to_move();
    let maximizing = mover == side;
    let mut best = if maximizing { -INF } else { INF };

    for pos in state.available_moves() {
        let mov = Move::new(mover, pos);
        state.apply(mov).expect("enumerated move must be legal");
        let score = minimax(state, side, depth + 1, alpha, beta, nodes);
        state.undo(mov).expect("applied move must undo");

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        // Remaining siblings cannot affect the decision.
        if beta <= alpha {
            break;
        }
    }

    best
}
