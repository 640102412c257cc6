//! Tengen: a Go (baduk/weiqi) rules engine.
//!
//! A deterministic state-transition engine: board representation, move
//! legality (capture, suicide, simple ko), territory and area scoring,
//! compact move-history serialization, and text rendering. The crate
//! performs no I/O; persistence, protocols, and user interaction belong
//! to the services that call it.
//!
//! ## Modules
//!
//! - [`board`] - Board storage and the core value types
//! - [`constants`] - Board sizes, column letters, default komi
//! - [`coord`] - Human coordinate notation (A–T skipping I, bottom-up rows)
//! - [`error`] - The error taxonomy
//! - [`game`] - The per-game state machine
//! - [`group`] - Connected groups and liberty counting
//! - [`history`] - SGF-like move-history codec
//! - [`render`] - Deterministic text board rendering
//! - [`rules`] - Move validation and execution
//! - [`score`] - Territory counting and scoring
//!
//! ## Example
//!
//! ```
//! use tengen::coord::parse_coordinate;
//! use tengen::game::GameState;
//!
//! let mut game = GameState::new(9)?;
//! game.play(parse_coordinate("D4", 9)?)?;
//! game.play(parse_coordinate("G5", 9)?)?;
//! println!("{}", game.render());
//! # Ok::<(), tengen::GoError>(())
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod group;
pub mod history;
pub mod render;
pub mod rules;
pub mod score;

pub use board::{Board, Captures, Color, Coord};
pub use error::GoError;
pub use game::{GameState, Move, MoveKind, Status};
pub use rules::MoveOutcome;
pub use score::{Points, ScoreResult, ScoringMethod, Winner};
