// This file is part of the sightline library.
// Copyright (C) 2026 The sightline developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Lines of the board and how two squares relate to each other.
//!
//! # Examples
//!
//! ```
//! use sightline::{line, Line, Square};
//!
//! assert_eq!(Line::between(Square::A1, Square::H8), Some(Line::UpRight));
//! assert_eq!(Line::between(Square::B1, Square::C3), Some(Line::KnightJump));
//! assert_eq!(Line::between(Square::A1, Square::C4), None);
//!
//! let inner = line::between(Square::E1, Square::E4);
//! assert_eq!(inner.count(), 2);
//! assert!(inner.contains(Square::E2) && inner.contains(Square::E3));
//! ```

use crate::square::{Delta, Square, SquareSet, BOARD_SIZE};

/// The relation between the origin and destination of a move.
///
/// `Row`, `Column`, `UpRight` and `DownRight` are lines of sight and the
/// four families of the [`LineIndex`](crate::LineIndex). `KnightJump`
/// relates two squares without a line between them.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Line {
    Row,
    Column,
    /// Row and column increase together. Identified by `column - row`.
    UpRight,
    /// Row decreases as column increases. Identified by `row + column`.
    DownRight,
    KnightJump,
}

impl Line {
    /// The four line families, in index order.
    pub const FAMILIES: [Line; 4] = [Line::Row, Line::Column, Line::UpRight, Line::DownRight];

    /// Classifies a delta, or `None` if it is zero or relates the squares
    /// neither by a line nor by a knight jump.
    pub const fn of_delta(delta: Delta) -> Option<Line> {
        let (dr, dc) = (delta.row, delta.col);
        if dr == 0 && dc == 0 {
            None
        } else if dr == 0 {
            Some(Line::Row)
        } else if dc == 0 {
            Some(Line::Column)
        } else if dr == dc {
            Some(Line::UpRight)
        } else if dr == -dc {
            Some(Line::DownRight)
        } else if (dr.abs() == 1 && dc.abs() == 2) || (dr.abs() == 2 && dc.abs() == 1) {
            Some(Line::KnightJump)
        } else {
            None
        }
    }

    /// Classifies the relation from `a` to `b`.
    #[inline]
    pub fn between(a: Square, b: Square) -> Option<Line> {
        Line::of_delta(a.delta_to(b))
    }

    /// The line of sight through both squares, ignoring knight jumps.
    #[inline]
    pub fn shared(a: Square, b: Square) -> Option<Line> {
        Line::between(a, b).filter(|line| line.is_line_of_sight())
    }

    #[inline]
    pub const fn is_straight(self) -> bool {
        matches!(self, Line::Row | Line::Column)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Line::UpRight | Line::DownRight)
    }

    #[inline]
    pub const fn is_line_of_sight(self) -> bool {
        !matches!(self, Line::KnightJump)
    }

    /// Identifies the line of this family passing through `sq`, offset to
    /// start at zero.
    pub(crate) fn key(self, sq: Square) -> usize {
        let (row, col) = (sq.row() as usize, sq.col() as usize);
        match self {
            Line::Row => row,
            Line::Column => col,
            Line::UpRight => col + (BOARD_SIZE as usize - 1) - row,
            Line::DownRight => row + col,
            Line::KnightJump => panic!("knight jump is not a line family"),
        }
    }

    /// Position of `sq` along the line of this family through it. Squares
    /// on the same line are ordered by it.
    pub(crate) fn ordinal(self, sq: Square) -> u32 {
        match self {
            Line::Row => sq.col(),
            Line::Column | Line::UpRight | Line::DownRight => sq.row(),
            Line::KnightJump => panic!("knight jump is not a line family"),
        }
    }
}

/// Squares strictly between `a` and `b`, or the empty set if they do not
/// share a line of sight.
pub fn between(a: Square, b: Square) -> SquareSet {
    let mut result = SquareSet::EMPTY;
    if Line::shared(a, b).is_some() {
        let step = a.delta_to(b).signum();
        let mut sq = a;
        while let Some(next) = sq.offset(step) {
            if next == b {
                break;
            }
            result.add(next);
            sq = next;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Line::between(Square::A1, Square::A8), Some(Line::Column));
        assert_eq!(Line::between(Square::A1, Square::H1), Some(Line::Row));
        assert_eq!(Line::between(Square::C1, Square::H6), Some(Line::UpRight));
        assert_eq!(Line::between(Square::H6, Square::C1), Some(Line::UpRight));
        assert_eq!(Line::between(Square::A8, Square::H1), Some(Line::DownRight));
        assert_eq!(Line::between(Square::G1, Square::F3), Some(Line::KnightJump));
        assert_eq!(Line::between(Square::G1, Square::E4), None);
        assert_eq!(Line::between(Square::G1, Square::G1), None);
        assert_eq!(Line::shared(Square::G1, Square::F3), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Line::UpRight.key(Square::A1), 7);
        assert_eq!(Line::UpRight.key(Square::H8), 7);
        assert_eq!(Line::UpRight.key(Square::A8), 0);
        assert_eq!(Line::UpRight.key(Square::H1), 14);
        assert_eq!(Line::DownRight.key(Square::A1), 0);
        assert_eq!(Line::DownRight.key(Square::H8), 14);
        assert_eq!(Line::DownRight.key(Square::A8), Line::DownRight.key(Square::H1));

        for sq in Square::all() {
            assert!(Line::Row.key(sq) < 8);
            assert!(Line::Column.key(sq) < 8);
            assert!(Line::UpRight.key(sq) < 15);
            assert!(Line::DownRight.key(sq) < 15);
        }
    }

    #[test]
    fn test_between() {
        assert!(between(Square::E1, Square::E2).is_empty());
        assert!(between(Square::G1, Square::F3).is_empty());
        assert_eq!(between(Square::H8, Square::E5).count(), 2);
        assert!(between(Square::H8, Square::E5).contains(Square::F6));
        assert_eq!(between(Square::A1, Square::H1).count(), 6);
    }
}
