//! Game state and forward-play rules.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state: the board plus the side to move.
///
/// X always moves first from the empty board, and the side to move
/// alternates strictly with every applied move. Status is derived from
/// the board rather than stored, so [`GameState::undo`] needs nothing
/// beyond reverting the square and the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Applies a move: places the mark and flips the side to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already has a winner or is drawn.
    /// - [`MoveError::SquareOccupied`] if the target square is not empty.
    /// - [`MoveError::WrongPlayer`] if the move's player is not the side to move.
    #[instrument(skip(self), fields(mov = %mov))]
    pub fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        self.board.set(mov.position, Square::Occupied(mov.player));
        self.to_move = mov.player.opponent();
        Ok(())
    }

    /// Reverts a move: clears the square and restores the prior side to move.
    ///
    /// This is the search primitive that makes in-place tree traversal
    /// reversible; forward play never removes a mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UndoMismatch`] unless the square holds the
    /// move's mark and the move's player is the one who just moved.
    #[instrument(skip(self), fields(mov = %mov))]
    pub fn undo(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.board.get(mov.position) != Square::Occupied(mov.player)
            || self.to_move != mov.player.opponent()
        {
            return Err(MoveError::UndoMismatch(mov.position));
        }

        self.board.set(mov.position, Square::Empty);
        self.to_move = mov.player;
        Ok(())
    }

    /// Returns the winner, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// True iff the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && self.winner().is_none()
    }

    /// True iff the game has a winner or is drawn.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// The derived game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(p) => GameStatus::Won(p),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// All empty positions, in strict row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
