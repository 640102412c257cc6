//! Compact move-history serialization.
//!
//! Each move is one SGF-like token: a color letter followed by a
//! bracketed coordinate pair in the lowercase `a..s` alphabet (column
//! first, then row, counted from the top-left), or empty brackets for a
//! pass. `"B[dp]W[]"` is Black at column 3, row 15, then a White pass.
//!
//! This internal alphabet is deliberately distinct from the human A–T
//! display notation. Resignations are a game result, not a move, and
//! encode to nothing.

use crate::board::{Color, Coord};
use crate::constants::MAX_SIZE;
use crate::error::GoError;
use crate::game::{Move, MoveKind};

/// Encode a move sequence as a token stream.
pub fn encode(moves: &[Move]) -> String {
    let mut out = String::with_capacity(moves.len() * 5);
    for m in moves {
        let letter = match m.color {
            Color::Black => 'B',
            Color::White => 'W',
        };
        match m.kind {
            MoveKind::Place(coord) => {
                out.push(letter);
                out.push('[');
                out.push((b'a' + coord.col) as char);
                out.push((b'a' + coord.row) as char);
                out.push(']');
            }
            MoveKind::Pass => {
                out.push(letter);
                out.push_str("[]");
            }
            MoveKind::Resign => {}
        }
    }
    out
}

/// Decode a token stream produced by [`encode`].
///
/// Fails with `HistoryDecodeError` carrying the byte offset of the
/// first malformed byte.
pub fn decode(tokens: &str) -> Result<Vec<Move>, GoError> {
    let bytes = tokens.as_bytes();
    let mut moves = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let color = match bytes[i] {
            b'B' => Color::Black,
            b'W' => Color::White,
            _ => return Err(GoError::HistoryDecodeError { offset: i }),
        };
        if bytes.get(i + 1) != Some(&b'[') {
            return Err(GoError::HistoryDecodeError { offset: i + 1 });
        }

        if bytes.get(i + 2) == Some(&b']') {
            moves.push(Move::pass(color));
            i += 3;
            continue;
        }

        let col = decode_letter(bytes, i + 2)?;
        let row = decode_letter(bytes, i + 3)?;
        if bytes.get(i + 4) != Some(&b']') {
            return Err(GoError::HistoryDecodeError { offset: i + 4 });
        }
        moves.push(Move::place(color, Coord::new(row, col)));
        i += 5;
    }

    Ok(moves)
}

fn decode_letter(bytes: &[u8], offset: usize) -> Result<u8, GoError> {
    match bytes.get(offset) {
        Some(&b) if b >= b'a' && b < b'a' + MAX_SIZE => Ok(b - b'a'),
        _ => Err(GoError::HistoryDecodeError { offset }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_tokens() {
        let moves = [
            Move::place(Color::Black, Coord::new(15, 3)),
            Move::pass(Color::White),
            Move::place(Color::White, Coord::new(0, 0)),
        ];
        assert_eq!(encode(&moves), "B[dp]W[]W[aa]");
    }

    #[test]
    fn resign_encodes_to_nothing() {
        let moves = [Move::pass(Color::Black), Move::resign(Color::White)];
        assert_eq!(encode(&moves), "B[]");
    }

    #[test]
    fn decode_reports_offsets() {
        for (tokens, offset) in [
            ("X[aa]", 0),
            ("B(aa)", 1),
            ("B[Aa]", 2),
            ("B[a", 3),
            ("B[aab", 4),
            ("B[aa]W", 6),
            ("B[zz]", 2),
        ] {
            assert_eq!(
                decode(tokens),
                Err(GoError::HistoryDecodeError { offset }),
                "tokens {tokens:?}"
            );
        }
    }

    #[test]
    fn decode_empty_stream() {
        assert_eq!(decode("").unwrap(), vec![]);
    }

    #[test]
    fn roundtrip() {
        let moves = vec![
            Move::place(Color::Black, Coord::new(4, 4)),
            Move::place(Color::White, Coord::new(2, 6)),
            Move::pass(Color::Black),
            Move::place(Color::White, Coord::new(18, 18)),
            Move::pass(Color::White),
            Move::pass(Color::Black),
        ];
        assert_eq!(decode(&encode(&moves)).unwrap(), moves);
    }
}
