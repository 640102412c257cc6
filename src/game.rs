//! The per-game state machine.
//!
//! A [`GameState`] owns its board, capture tallies, ko point, and move
//! history, and is mutated only through [`play`](GameState::play),
//! [`pass`](GameState::pass), [`resign`](GameState::resign) and
//! [`finish_scoring`](GameState::finish_scoring). There is no shared or
//! global state; callers serialize access per game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Captures, Color, Coord};
use crate::constants::DEFAULT_KOMI_HALF_POINTS;
use crate::error::GoError;
use crate::render;
use crate::rules::{MoveOutcome, validate_and_execute};
use crate::score::{Points, ScoreResult, ScoringMethod, Winner, calculate_score};

/// What a move does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Place(Coord),
    Pass,
    Resign,
}

/// A move together with the color that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub color: Color,
    pub kind: MoveKind,
}

impl Move {
    pub fn place(color: Color, coord: Coord) -> Self {
        Move {
            color,
            kind: MoveKind::Place(coord),
        }
    }

    pub fn pass(color: Color) -> Self {
        Move {
            color,
            kind: MoveKind::Pass,
        }
    }

    pub fn resign(color: Color) -> Self {
        Move {
            color,
            kind: MoveKind::Resign,
        }
    }
}

/// Game lifecycle. `InProgress` is initial; the other states are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    /// Two consecutive passes; ready for scoring.
    FinishedPass,
    FinishedResignation { winner: Color },
    FinishedScored { winner: Winner },
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

/// A single game of Go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Color,
    ko: Option<Coord>,
    captures: Captures,
    consecutive_passes: u8,
    move_history: Vec<Move>,
    komi: Points,
    status: Status,
}

impl GameState {
    /// A fresh game with the default 6.5 komi. Black moves first.
    pub fn new(size: u8) -> Result<Self, GoError> {
        Self::with_komi(size, Points::from_half_points(DEFAULT_KOMI_HALF_POINTS))
    }

    pub fn with_komi(size: u8, komi: Points) -> Result<Self, GoError> {
        Ok(GameState {
            board: Board::new(size)?,
            current_player: Color::Black,
            ko: None,
            captures: Captures::new(),
            consecutive_passes: 0,
            move_history: Vec::new(),
            komi,
            status: Status::InProgress,
        })
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn ko(&self) -> Option<Coord> {
        self.ko
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn komi(&self) -> Points {
        self.komi
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_history.len() as u32
    }

    /// The winner, if the game has been decided.
    pub fn winner(&self) -> Option<Winner> {
        match self.status {
            Status::InProgress | Status::FinishedPass => None,
            Status::FinishedResignation { winner } => Some(match winner {
                Color::Black => Winner::Black,
                Color::White => Winner::White,
            }),
            Status::FinishedScored { winner } => Some(winner),
        }
    }

    // -- Transitions --

    /// Place a stone for the player to move.
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome, GoError> {
        if self.status.is_terminal() {
            return Err(GoError::GameNotActive);
        }
        let color = self.current_player;
        let (board, outcome) = validate_and_execute(&self.board, coord, color, self.ko)?;

        self.board = board;
        self.captures.add(color, outcome.captures);
        self.ko = outcome.ko;
        self.consecutive_passes = 0;
        self.move_history.push(Move::place(color, coord));
        self.current_player = color.opposite();
        debug!(%color, %coord, captures = outcome.captures, "played");
        Ok(outcome)
    }

    /// Pass. Clears the ko point; two consecutive passes end the game.
    pub fn pass(&mut self) -> Result<(), GoError> {
        if self.status.is_terminal() {
            return Err(GoError::GameNotActive);
        }
        let color = self.current_player;
        self.ko = None;
        self.consecutive_passes += 1;
        self.move_history.push(Move::pass(color));
        self.current_player = color.opposite();
        if self.consecutive_passes >= 2 {
            self.status = Status::FinishedPass;
            debug!("two consecutive passes, game over");
        }
        Ok(())
    }

    /// Resign. The opponent wins immediately.
    ///
    /// Resignation is a result, not a move: it flips the status but is
    /// not appended to the history, so encoded histories carry only
    /// Place and Pass tokens.
    pub fn resign(&mut self) -> Result<(), GoError> {
        if self.status.is_terminal() {
            return Err(GoError::GameNotActive);
        }
        let winner = self.current_player.opposite();
        self.status = Status::FinishedResignation { winner };
        debug!(%winner, "resignation");
        Ok(())
    }

    /// Score the game and move to `FinishedScored`.
    ///
    /// Accepted while in progress (players may agree to count early) and
    /// after two passes; rejected from other terminal states.
    pub fn finish_scoring(&mut self, method: ScoringMethod) -> Result<ScoreResult, GoError> {
        match self.status {
            Status::InProgress | Status::FinishedPass => {}
            _ => return Err(GoError::GameNotActive),
        }
        let result = self.score(method);
        self.status = Status::FinishedScored {
            winner: result.winner,
        };
        debug!(winner = %result.winner, black = %result.black_score, white = %result.white_score, "scored");
        Ok(result)
    }

    /// Score the current position without changing the game status.
    pub fn score(&self, method: ScoringMethod) -> ScoreResult {
        calculate_score(
            &self.board,
            self.captures.get(Color::Black),
            self.captures.get(Color::White),
            self.komi,
            method,
        )
    }

    // -- Restore --

    /// Rebuild a game by replaying a recorded history, e.g. one decoded
    /// from [`crate::history::decode`]. Each move is applied as its own
    /// color, so histories with handicap-style consecutive moves replay
    /// too.
    pub fn replay(size: u8, komi: Points, moves: &[Move]) -> Result<Self, GoError> {
        let mut game = GameState::with_komi(size, komi)?;
        for m in moves {
            game.current_player = m.color;
            match m.kind {
                MoveKind::Place(coord) => {
                    game.play(coord)?;
                }
                MoveKind::Pass => game.pass()?,
                MoveKind::Resign => game.resign()?,
            }
        }
        Ok(game)
    }

    // -- Display --

    /// Render the current position as fixed-width text.
    pub fn render(&self) -> String {
        let last_move = match self.move_history.last() {
            Some(Move {
                kind: MoveKind::Place(coord),
                ..
            }) => Some(*coord),
            _ => None,
        };
        render::render(
            &self.board,
            last_move,
            self.ko,
            self.move_count(),
            self.current_player,
            &self.captures,
        )
    }
}
