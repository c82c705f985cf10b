//! Tic-tac-toe engine with an unbeatable minimax opponent.
//!
//! Two components make up the core:
//!
//! - **[`GameState`]**: a 3x3 board, the side to move, and the derived
//!   predicates (winner, draw, terminal, legal moves).
//! - **[`Searcher`]**: exhaustive minimax with alpha-beta pruning over
//!   [`GameState`], returning the game-theoretically optimal move for
//!   the side to move.
//!
//! A driver holds a [`GameState`], asks the [`Searcher`] for a move on
//! the automated side's turn, applies it, and repeats until the state
//! reports terminal.
//!
//! # Example
//!
//! ```
//! use perfect_play::{GameState, Move, Searcher};
//!
//! let mut state = GameState::new();
//! let searcher = Searcher::new();
//!
//! while !state.is_terminal() {
//!     let mover = state.to_move();
//!     let position = searcher.best_move(&state);
//!     state.apply(Move::new(mover, position))?;
//! }
//!
//! // Perfect play by both sides always ends in a draw.
//! assert!(state.is_draw());
//! # Ok::<(), perfect_play::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod position;
mod search;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{
    BalancedMarks, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MovesMatchVacancies, SingleWinner,
};
pub use position::Position;
pub use search::{Score, SearchResult, Searcher};
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};
