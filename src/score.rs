//! Territory counting and scoring.
//!
//! Scores and komi are exact half-point values ([`Points`]); no floating
//! point is involved anywhere, so equal scores compare equal and a draw
//! is a real outcome.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Color, Coord};

/// An exact point value stored as a count of half-points.
///
/// `Points::from_half_points(13)` displays as `"6.5"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Points(i32);

impl Points {
    pub const fn from_half_points(half_points: i32) -> Self {
        Points(half_points)
    }

    pub const fn from_points(points: i32) -> Self {
        Points(points * 2)
    }

    /// The raw half-point count, for storage.
    pub const fn half_points(self) -> i32 {
        self.0
    }
}

impl Add for Points {
    type Output = Points;
    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sub for Points {
    type Output = Points;
    fn sub(self, rhs: Points) -> Points {
        Points(self.0 - rhs.0)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs % 2 == 0 {
            write!(f, "{sign}{}", abs / 2)
        } else {
            write!(f, "{sign}{}.5", abs / 2)
        }
    }
}

/// Failure to parse a [`Points`] decimal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid point value {0:?}")]
pub struct ParsePointsError(String);

impl FromStr for Points {
    type Err = ParsePointsError;

    /// Accepts exact decimals: `"7"`, `"6.5"`, `"-0.5"`, `"3.0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointsError(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, half) = match body.split_once('.') {
            None => (body, 0),
            Some((w, "5")) => (w, 1),
            Some((w, "0")) => (w, 0),
            Some(_) => return Err(err()),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let whole: i32 = whole.parse().map_err(|_| err())?;
        let magnitude = whole * 2 + half;
        Ok(Points(if negative { -magnitude } else { magnitude }))
    }
}

/// Scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMethod {
    /// Japanese rules: territory plus prisoners.
    Territory,
    /// Chinese rules: territory plus live stones.
    Area,
}

/// Outcome of a scored game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => write!(f, "black"),
            Winner::White => write!(f, "white"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// Empty-region classification of a board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Territory {
    pub black_points: u32,
    pub white_points: u32,
    pub black_cells: Vec<Coord>,
    pub white_cells: Vec<Coord>,
}

/// Classify every maximal connected empty region.
///
/// A region is credited to a color only when every stone on its boundary
/// is that color. Regions bordering both colors, or no stones at all,
/// are neutral. Classification depends only on bordering colors, never
/// on distance: one lone black stone on an otherwise empty board earns
/// the entire remaining area.
pub fn count_territory(board: &Board) -> Territory {
    let mut territory = Territory::default();
    let mut visited = vec![false; board.area()];

    for row in 0..board.size() {
        for col in 0..board.size() {
            let start = Coord::new(row, col);
            if visited[board.idx(start)] || board.stone_at(start).is_some() {
                continue;
            }

            // Flood-fill one empty region, recording which colors border it.
            let mut region = Vec::new();
            let mut saw_black = false;
            let mut saw_white = false;
            let mut stack = vec![start];
            while let Some(p) = stack.pop() {
                let i = board.idx(p);
                if visited[i] {
                    continue;
                }
                visited[i] = true;
                region.push(p);
                for n in board.neighbors(p) {
                    match board.stone_at(n) {
                        None => {
                            if !visited[board.idx(n)] {
                                stack.push(n);
                            }
                        }
                        Some(Color::Black) => saw_black = true,
                        Some(Color::White) => saw_white = true,
                    }
                }
            }

            match (saw_black, saw_white) {
                (true, false) => {
                    territory.black_points += region.len() as u32;
                    territory.black_cells.extend(region);
                }
                (false, true) => {
                    territory.white_points += region.len() as u32;
                    territory.white_cells.extend(region);
                }
                _ => {} // dame, or a board with no stones at all
            }
        }
    }

    territory
}

/// Full scoring breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub method: ScoringMethod,
    pub black_territory: u32,
    pub white_territory: u32,
    pub black_captures: u32,
    pub white_captures: u32,
    pub black_stones: u32,
    pub white_stones: u32,
    pub komi: Points,
    pub black_score: Points,
    pub white_score: Points,
    pub winner: Winner,
}

/// Score a played-out board.
///
/// Japanese (`Territory`): territory + prisoners, komi to White.
/// Chinese (`Area`): territory + live stones, komi to White; captures
/// are reported but implicit in the area count.
pub fn calculate_score(
    board: &Board,
    black_captures: u32,
    white_captures: u32,
    komi: Points,
    method: ScoringMethod,
) -> ScoreResult {
    let territory = count_territory(board);
    let (black_stones, white_stones) = board.count_stones();

    let (black_score, white_score) = match method {
        ScoringMethod::Territory => (
            Points::from_points((territory.black_points + black_captures) as i32),
            Points::from_points((territory.white_points + white_captures) as i32) + komi,
        ),
        ScoringMethod::Area => (
            Points::from_points((territory.black_points + black_stones) as i32),
            Points::from_points((territory.white_points + white_stones) as i32) + komi,
        ),
    };

    let winner = match black_score.cmp(&white_score) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::White,
        std::cmp::Ordering::Equal => Winner::Draw,
    };

    ScoreResult {
        method,
        black_territory: territory.black_points,
        white_territory: territory.white_points,
        black_captures,
        white_captures,
        black_stones,
        white_stones,
        komi,
        black_score,
        white_score,
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_display() {
        assert_eq!(Points::from_half_points(13).to_string(), "6.5");
        assert_eq!(Points::from_points(80).to_string(), "80");
        assert_eq!(Points::from_half_points(0).to_string(), "0");
        assert_eq!(Points::from_half_points(-1).to_string(), "-0.5");
        assert_eq!(Points::from_half_points(-15).to_string(), "-7.5");
    }

    #[test]
    fn points_parse() {
        assert_eq!("6.5".parse::<Points>().unwrap(), Points::from_half_points(13));
        assert_eq!("7".parse::<Points>().unwrap(), Points::from_points(7));
        assert_eq!("3.0".parse::<Points>().unwrap(), Points::from_points(3));
        assert_eq!("-0.5".parse::<Points>().unwrap(), Points::from_half_points(-1));
        for bad in ["", "6.25", "six", "6.", ".5", "--1"] {
            assert!(bad.parse::<Points>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn points_display_parse_roundtrip() {
        for half in -40..=40 {
            let p = Points::from_half_points(half);
            assert_eq!(p.to_string().parse::<Points>().unwrap(), p);
        }
    }

    #[test]
    fn points_arithmetic_is_exact() {
        let mut total = Points::default();
        for _ in 0..10 {
            total += Points::from_half_points(1);
        }
        assert_eq!(total, Points::from_points(5));
        assert_eq!(
            Points::from_points(7) - Points::from_half_points(13),
            Points::from_half_points(1)
        );
    }
}
