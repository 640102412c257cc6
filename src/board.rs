//! Board storage and the core value types.
//!
//! The board is a flat `Vec<Option<Color>>` indexed row-major, with the
//! side length fixed at creation. Row 0 is the top edge; display notation
//! (bottom-up numbering, A–T columns) lives in [`crate::coord`].

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::LEGAL_SIZES;
use crate::error::GoError;

/// Stone color. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A point on the board. Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// `"row,col"`, the format the persistence layer stores ko points in.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GoError::InvalidCoordinateSyntax(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        Ok(Coord {
            row: row.trim().parse().map_err(|_| err())?,
            col: col.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Prisoner tallies, indexed by the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    black: u32,
    white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stones captured *by* the given color.
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: Color, count: u32) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

/// A square Go board. Size is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board. Only 9, 13 and 19 are legal sizes.
    pub fn new(size: u8) -> Result<Self, GoError> {
        if !LEGAL_SIZES.contains(&size) {
            return Err(GoError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of points on the board.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub(crate) fn idx(&self, coord: Coord) -> usize {
        coord.row as usize * self.size as usize + coord.col as usize
    }

    pub fn on_board(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Bounds-checked read.
    pub fn get(&self, coord: Coord) -> Result<Option<Color>, GoError> {
        if !self.on_board(coord) {
            return Err(GoError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        Ok(self.cells[self.idx(coord)])
    }

    /// Lenient read: out-of-range points read as empty.
    pub fn stone_at(&self, coord: Coord) -> Option<Color> {
        if self.on_board(coord) {
            self.cells[self.idx(coord)]
        } else {
            None
        }
    }

    /// Bounds-checked write. `None` clears the point.
    pub fn set(&mut self, coord: Coord, cell: Option<Color>) -> Result<(), GoError> {
        if !self.on_board(coord) {
            return Err(GoError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        let i = self.idx(coord);
        self.cells[i] = cell;
        Ok(())
    }

    /// The 2–4 orthogonally adjacent in-bounds points.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut v = Vec::with_capacity(4);
        if coord.row > 0 {
            v.push(Coord::new(coord.row - 1, coord.col));
        }
        if coord.row + 1 < self.size {
            v.push(Coord::new(coord.row + 1, coord.col));
        }
        if coord.col > 0 {
            v.push(Coord::new(coord.row, coord.col - 1));
        }
        if coord.col + 1 < self.size {
            v.push(Coord::new(coord.row, coord.col + 1));
        }
        v
    }

    /// Count stones on the board as `(black, white)`.
    pub fn count_stones(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
        (black, white)
    }

    /// Row-major snapshot with 0 = empty, 1 = black, 2 = white, the
    /// persistence layer's board format.
    pub fn to_cells(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| match cell {
                None => 0,
                Some(Color::Black) => 1,
                Some(Color::White) => 2,
            })
            .collect()
    }

    /// Rebuild a board from a [`to_cells`](Board::to_cells) snapshot.
    ///
    /// Fails with `InvalidBoardSize` when the size is illegal or the
    /// snapshot length does not match it. Bytes other than 1 and 2 read
    /// as empty.
    pub fn from_cells(size: u8, cells: &[u8]) -> Result<Self, GoError> {
        let mut board = Board::new(size)?;
        if cells.len() != board.area() {
            return Err(GoError::InvalidBoardSize(size));
        }
        for (slot, &byte) in board.cells.iter_mut().zip(cells) {
            *slot = match byte {
                1 => Some(Color::Black),
                2 => Some(Color::White),
                _ => None,
            };
        }
        Ok(board)
    }
}

/// Plain debugging grid; the presentation-grade rendering with coordinate
/// labels and markers is [`crate::render::render`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.stone_at(Coord::new(row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: u8,
    cells: Vec<u8>,
}

// Serde goes through the byte-cells snapshot so the wire format matches
// what the persistence layer stores.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BoardRepr {
            size: self.size,
            cells: self.to_cells(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = BoardRepr::deserialize(deserializer)?;
        Board::from_cells(repr.size, &repr.cells).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_sizes() {
        for size in [0, 5, 10, 20, 255] {
            assert_eq!(Board::new(size), Err(GoError::InvalidBoardSize(size)));
        }
        for size in [9, 13, 19] {
            assert!(Board::new(size).is_ok());
        }
    }

    #[test]
    fn get_set_bounds() {
        let mut board = Board::new(9).unwrap();
        assert_eq!(board.get(Coord::new(8, 8)), Ok(None));
        assert_eq!(
            board.get(Coord::new(9, 0)),
            Err(GoError::OutOfBounds { row: 9, col: 0 })
        );
        board.set(Coord::new(4, 4), Some(Color::Black)).unwrap();
        assert_eq!(board.get(Coord::new(4, 4)), Ok(Some(Color::Black)));
        assert!(board.set(Coord::new(0, 9), Some(Color::White)).is_err());
    }

    #[test]
    fn neighbor_counts() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.neighbors(Coord::new(0, 0)).len(), 2);
        assert_eq!(board.neighbors(Coord::new(0, 4)).len(), 3);
        assert_eq!(board.neighbors(Coord::new(4, 4)).len(), 4);
        assert_eq!(board.neighbors(Coord::new(8, 8)).len(), 2);
    }

    #[test]
    fn cells_snapshot_roundtrip() {
        let mut board = Board::new(9).unwrap();
        board.set(Coord::new(0, 0), Some(Color::Black)).unwrap();
        board.set(Coord::new(8, 8), Some(Color::White)).unwrap();
        let cells = board.to_cells();
        assert_eq!(cells[0], 1);
        assert_eq!(cells[80], 2);
        assert_eq!(Board::from_cells(9, &cells).unwrap(), board);
        assert!(Board::from_cells(9, &cells[1..]).is_err());
    }

    #[test]
    fn coord_string_roundtrip() {
        let c = Coord::new(3, 15);
        assert_eq!(c.to_string(), "3,15");
        assert_eq!("3,15".parse::<Coord>().unwrap(), c);
        assert!("3;15".parse::<Coord>().is_err());
        assert!("x,y".parse::<Coord>().is_err());
    }
}
