//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

use crate::state::GameState;
use crate::types::{Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: mark counts are consistent with strict turn alternation.
///
/// After N placed marks, X holds ceil(N/2) of them and the side to move
/// is X exactly when N is even.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        match state.to_move() {
            Player::X => x_count == o_count,
            Player::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "mark counts must match strict turn alternation"
    }
}

/// Invariant: at most one player holds a completed line.
///
/// [`crate::Board::winner`] assumes this rather than enforcing it; the
/// invariant makes the assumption checkable.
pub struct SingleWinner;

impl Invariant<GameState> for SingleWinner {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let mut x_wins = false;
        let mut o_wins = false;

        // Probe each player independently: overwrite nothing, just ask
        // whether a line of each mark exists.
        for player in [Player::X, Player::O] {
            let mut probe = board.clone();
            for pos in crate::Position::ALL {
                if probe.get(pos) == Square::Occupied(player.opponent()) {
                    probe.set(pos, Square::Empty);
                }
            }
            match (player, probe.winner()) {
                (Player::X, Some(Player::X)) => x_wins = true,
                (Player::O, Some(Player::O)) => o_wins = true,
                _ => {}
            }
        }

        !(x_wins && o_wins)
    }

    fn description() -> &'static str {
        "at most one player may hold a completed line"
    }
}

/// Invariant: move enumeration matches board vacancies exactly.
pub struct MovesMatchVacancies;

impl Invariant<GameState> for MovesMatchVacancies {
    fn holds(state: &GameState) -> bool {
        let moves = state.available_moves();
        let empties = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s == Square::Empty)
            .count();

        moves.len() == empties && moves.iter().all(|pos| state.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "available moves must be exactly the empty squares"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (BalancedMarks, SingleWinner, MovesMatchVacancies);
