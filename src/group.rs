//! Connected stone groups and their liberties.
//!
//! Flood fill uses an explicit stack and board-sized visited buffers,
//! never recursion, so a 19x19 board stays within O(area) work and
//! constant stack depth.

use crate::board::{Board, Coord};

/// A maximal set of same-colored connected stones and the empty points
/// adjacent to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub stones: Vec<Coord>,
    pub liberties: Vec<Coord>,
}

/// Flood-fill the group containing `coord`.
///
/// Returns an empty group if the starting point is empty or off the
/// board.
pub fn find_group(board: &Board, coord: Coord) -> Group {
    let Some(color) = board.stone_at(coord) else {
        return Group::default();
    };

    let mut visited = vec![false; board.area()];
    let mut liberty_seen = vec![false; board.area()];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    let mut stack = vec![coord];

    while let Some(p) = stack.pop() {
        let i = board.idx(p);
        if visited[i] {
            continue;
        }
        visited[i] = true;
        stones.push(p);

        for n in board.neighbors(p) {
            let ni = board.idx(n);
            match board.stone_at(n) {
                None => {
                    if !liberty_seen[ni] {
                        liberty_seen[ni] = true;
                        liberties.push(n);
                    }
                }
                Some(c) if c == color && !visited[ni] => stack.push(n),
                _ => {}
            }
        }
    }

    Group { stones, liberties }
}

/// Flood-fill one group using a shared visited buffer, so capture
/// resolution never collects the same group twice.
pub(crate) fn collect_group(board: &Board, start: Coord, visited: &mut [bool]) -> Vec<Coord> {
    let Some(color) = board.stone_at(start) else {
        return Vec::new();
    };

    let mut stones = Vec::new();
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        let i = board.idx(p);
        if visited[i] {
            continue;
        }
        visited[i] = true;
        stones.push(p);

        for n in board.neighbors(p) {
            if board.stone_at(n) == Some(color) && !visited[board.idx(n)] {
                stack.push(n);
            }
        }
    }

    stones
}

/// Unique empty points adjacent to a pre-computed group.
pub(crate) fn chain_liberties(board: &Board, chain: &[Coord]) -> Vec<Coord> {
    let mut seen = vec![false; board.area()];
    let mut libs = Vec::new();
    for &p in chain {
        for n in board.neighbors(p) {
            let ni = board.idx(n);
            if board.stone_at(n).is_none() && !seen[ni] {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }
    libs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new(9).unwrap();
        for &(r, c) in black {
            board.set(Coord::new(r, c), Some(Color::Black)).unwrap();
        }
        for &(r, c) in white {
            board.set(Coord::new(r, c), Some(Color::White)).unwrap();
        }
        board
    }

    #[test]
    fn empty_start_gives_empty_group() {
        let board = Board::new(9).unwrap();
        let group = find_group(&board, Coord::new(4, 4));
        assert!(group.stones.is_empty());
        assert!(group.liberties.is_empty());
    }

    #[test]
    fn single_stone_center_has_four_liberties() {
        let board = board_with(&[(4, 4)], &[]);
        let group = find_group(&board, Coord::new(4, 4));
        assert_eq!(group.stones, vec![Coord::new(4, 4)]);
        assert_eq!(group.liberties.len(), 4);
    }

    #[test]
    fn corner_stone_has_two_liberties() {
        let board = board_with(&[(0, 0)], &[]);
        let group = find_group(&board, Coord::new(0, 0));
        assert_eq!(group.liberties.len(), 2);
    }

    #[test]
    fn connected_stones_share_liberties() {
        // Two stones in a row: 6 liberties, each counted once.
        let board = board_with(&[(4, 4), (4, 5)], &[]);
        let group = find_group(&board, Coord::new(4, 4));
        assert_eq!(group.stones.len(), 2);
        assert_eq!(group.liberties.len(), 6);
    }

    #[test]
    fn opponent_stones_reduce_liberties() {
        let board = board_with(&[(4, 4)], &[(4, 5), (3, 4)]);
        let group = find_group(&board, Coord::new(4, 4));
        assert_eq!(group.liberties.len(), 2);
    }

    #[test]
    fn diagonal_stones_are_not_connected() {
        let board = board_with(&[(4, 4), (5, 5)], &[]);
        let group = find_group(&board, Coord::new(4, 4));
        assert_eq!(group.stones, vec![Coord::new(4, 4)]);
    }
}
