//! Error taxonomy for the rules engine.
//!
//! Every failure is an explicit value, a pure function of (state, input).
//! No operation ever leaves a board or game partially mutated on any
//! error path.

use thiserror::Error;

use crate::board::Coord;

/// Errors that can occur during engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GoError {
    /// Board side length is not one of 9, 13, 19.
    #[error("invalid board size {0} (expected 9, 13 or 19)")]
    InvalidBoardSize(u8),

    /// Coordinate is outside the board.
    #[error("point {row},{col} is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The point is already occupied by a stone.
    #[error("point {0} is already occupied")]
    PositionOccupied(Coord),

    /// The move would immediately retake a ko.
    #[error("move at {0} retakes the ko")]
    KoViolation(Coord),

    /// The move would leave the placing player's own group without
    /// liberties while capturing nothing.
    #[error("move at {0} is suicide")]
    SuicideMove(Coord),

    /// A coordinate string could not be parsed.
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinateSyntax(String),

    /// The game has already finished.
    #[error("game is not in progress")]
    GameNotActive,

    /// A history token stream is malformed at the given byte offset.
    #[error("malformed history token at byte {offset}")]
    HistoryDecodeError { offset: usize },
}
