//! Move validation and execution.
//!
//! A placement is validated and applied on a scratch copy of the board;
//! the copy is committed only when the move is legal, so the caller's
//! board is never observed in a partially mutated state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Color, Coord};
use crate::error::GoError;
use crate::group::{chain_liberties, collect_group, find_group};

/// What a successful placement did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Number of opponent stones removed.
    pub captures: u32,
    /// The removed stones.
    pub captured: Vec<Coord>,
    /// Ko point created by this move, if any.
    pub ko: Option<Coord>,
}

/// Validate a placement and return the successor board with its outcome.
///
/// Check order: bounds, occupancy, ko, capture resolution, suicide.
/// `ko` is the point an immediate recapture is barred from, carried by
/// the caller from the previous move's outcome.
///
/// The ko point of the outcome is set iff exactly one stone was captured
/// and the placed stone itself is left with exactly one adjacent empty
/// point (the simple single-stone ko rule; longer repetition cycles are
/// not tracked).
pub fn validate_and_execute(
    board: &Board,
    coord: Coord,
    color: Color,
    ko: Option<Coord>,
) -> Result<(Board, MoveOutcome), GoError> {
    if !board.on_board(coord) {
        return Err(GoError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        });
    }
    if board.stone_at(coord).is_some() {
        return Err(GoError::PositionOccupied(coord));
    }
    if ko == Some(coord) {
        debug!(%coord, %color, "rejected: retakes ko");
        return Err(GoError::KoViolation(coord));
    }

    let mut scratch = board.clone();
    scratch.set(coord, Some(color))?;

    // Remove every adjacent opponent group left without liberties.
    let opponent = color.opposite();
    let mut visited = vec![false; scratch.area()];
    let mut captured: Vec<Coord> = Vec::new();
    for n in scratch.neighbors(coord) {
        if scratch.stone_at(n) != Some(opponent) || visited[scratch.idx(n)] {
            continue;
        }
        let chain = collect_group(&scratch, n, &mut visited);
        if chain_liberties(&scratch, &chain).is_empty() {
            captured.extend(chain);
        }
    }
    for &p in &captured {
        scratch.set(p, None)?;
    }

    if captured.is_empty() && find_group(&scratch, coord).liberties.is_empty() {
        debug!(%coord, %color, "rejected: suicide");
        return Err(GoError::SuicideMove(coord));
    }

    // Simple ko: a single capture where the new stone itself keeps only
    // the vacated point as an adjacent empty point.
    let adjacent_empty = scratch
        .neighbors(coord)
        .into_iter()
        .filter(|&n| scratch.stone_at(n).is_none())
        .count();
    let new_ko = if captured.len() == 1 && adjacent_empty == 1 {
        Some(captured[0])
    } else {
        None
    };

    if !captured.is_empty() {
        debug!(%coord, %color, captures = captured.len(), ko = ?new_ko, "captured stones");
    }

    let outcome = MoveOutcome {
        captures: captured.len() as u32,
        captured,
        ko: new_ko,
    };
    Ok((scratch, outcome))
}
