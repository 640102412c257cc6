//! Human coordinate notation.
//!
//! Columns are the letters A–T skipping I; rows are numbered 1..size
//! counted from the bottom edge. Internally row 0 is the top edge, so
//! `"A1"` on a 9x9 board is `Coord { row: 8, col: 0 }`.

use crate::board::Coord;
use crate::constants::{COLUMN_LETTERS, LEGAL_SIZES};
use crate::error::GoError;

/// Parse standard notation such as `"D4"` or `"q16"`.
pub fn parse_coordinate(text: &str, size: u8) -> Result<Coord, GoError> {
    let err = || GoError::InvalidCoordinateSyntax(text.to_string());
    if !LEGAL_SIZES.contains(&size) {
        return Err(GoError::InvalidBoardSize(size));
    }

    let mut chars = text.chars();
    let letter = chars.next().ok_or_else(err)?.to_ascii_uppercase();
    let col = COLUMN_LETTERS[..size as usize]
        .iter()
        .position(|&l| l == letter)
        .ok_or_else(err)? as u8;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let number: u32 = digits.parse().map_err(|_| err())?;
    if number < 1 || number > size as u32 {
        return Err(err());
    }

    Ok(Coord::new(size - number as u8, col))
}

/// Exact inverse of [`parse_coordinate`].
pub fn format_coordinate(coord: Coord, size: u8) -> Result<String, GoError> {
    if !LEGAL_SIZES.contains(&size) {
        return Err(GoError::InvalidBoardSize(size));
    }
    if coord.row >= size || coord.col >= size {
        return Err(GoError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        });
    }
    let letter = COLUMN_LETTERS[coord.col as usize];
    Ok(format!("{}{}", letter, size - coord.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corners() {
        // "A1" is the bottom-left corner.
        assert_eq!(parse_coordinate("A1", 9).unwrap(), Coord::new(8, 0));
        assert_eq!(parse_coordinate("A9", 9).unwrap(), Coord::new(0, 0));
        assert_eq!(parse_coordinate("T19", 19).unwrap(), Coord::new(0, 18));
        assert_eq!(parse_coordinate("t1", 19).unwrap(), Coord::new(18, 18));
    }

    #[test]
    fn skips_i_column() {
        // "J" is column index 8; "I" is never a valid column letter.
        assert_eq!(parse_coordinate("J1", 9).unwrap(), Coord::new(8, 8));
        assert!(matches!(
            parse_coordinate("I5", 19),
            Err(GoError::InvalidCoordinateSyntax(_))
        ));
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "5", "A", "A0", "A10", "Z3", "K5", "D4x", "4D"] {
            assert!(
                matches!(
                    parse_coordinate(text, 9),
                    Err(GoError::InvalidCoordinateSyntax(_))
                ),
                "expected syntax error for {text:?}"
            );
        }
    }

    #[test]
    fn format_is_inverse_of_parse() {
        for size in LEGAL_SIZES {
            for row in 0..size {
                for col in 0..size {
                    let coord = Coord::new(row, col);
                    let text = format_coordinate(coord, size).unwrap();
                    assert_eq!(parse_coordinate(&text, size).unwrap(), coord);
                }
            }
        }
    }

    #[test]
    fn format_bounds() {
        assert!(matches!(
            format_coordinate(Coord::new(9, 0), 9),
            Err(GoError::OutOfBounds { .. })
        ));
    }
}
