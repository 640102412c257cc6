//! Deterministic text rendering of a board.
//!
//! Pure function of its inputs: identical inputs always produce the
//! identical string. Column letters run A–T skipping I, row numbers
//! count up from the bottom edge. The last move is bracketed and the ko
//! point marked with `*`.

use crate::board::{Board, Captures, Color, Coord};
use crate::constants::COLUMN_LETTERS;

/// Render a board with its game context as a fixed-width grid.
pub fn render(
    board: &Board,
    last_move: Option<Coord>,
    ko: Option<Coord>,
    move_count: u32,
    to_move: Color,
    captures: &Captures,
) -> String {
    let size = board.size() as usize;
    let mut out = String::new();

    let mut label_row = String::from("  ");
    for &letter in &COLUMN_LETTERS[..size] {
        label_row.push_str(&format!(" {letter} "));
    }

    out.push_str(&label_row);
    out.push('\n');

    for row in 0..board.size() {
        let number = board.size() - row;
        out.push_str(&format!("{number:>2}"));
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            let cell = match board.stone_at(coord) {
                Some(Color::Black) if last_move == Some(coord) => "[X]",
                Some(Color::White) if last_move == Some(coord) => "[O]",
                Some(Color::Black) => " X ",
                Some(Color::White) => " O ",
                None if ko == Some(coord) => " * ",
                None => " . ",
            };
            out.push_str(cell);
        }
        out.push_str(&format!("{number:>2}"));
        out.push('\n');
    }

    out.push_str(&label_row);
    out.push('\n');
    out.push_str(&format!("move {move_count}, {to_move} to play\n"));
    out.push_str(&format!(
        "captures: black {}, white {}\n",
        captures.get(Color::Black),
        captures.get(Color::White)
    ));
    out
}
