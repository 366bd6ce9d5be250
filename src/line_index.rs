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

use crate::{
    board::Board,
    line::Line,
    square::{Square, BOARD_SIZE},
    types::{PieceId, PieceSet},
};

const ROWS: usize = BOARD_SIZE as usize;
const DIAGONALS: usize = 2 * BOARD_SIZE as usize - 1;

/// The control map: for every row, column and diagonal, the pieces
/// standing on it.
///
/// Each piece on the board is in exactly four buckets, one per line
/// family, namely those of the lines through its square.
///
/// # Examples
///
/// ```
/// use sightline::{Board, Color, LineIndex, Square};
///
/// let mut board = Board::empty();
/// let rook = board.spawn(Color::White.rook(), Square::A1);
/// let bishop = board.spawn(Color::Black.bishop(), Square::H8);
/// let lines = LineIndex::from_board(&board);
///
/// // Both stand on the long diagonal, so each sees the other.
/// assert!(lines.sharing(Square::D4).contains(rook));
/// assert!(lines.sharing(Square::D4).contains(bishop));
/// assert!(!lines.sharing(Square::B3).contains(bishop));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineIndex {
    rows: [PieceSet; ROWS],
    columns: [PieceSet; ROWS],
    up_right: [PieceSet; DIAGONALS],
    down_right: [PieceSet; DIAGONALS],
}

impl LineIndex {
    pub const fn empty() -> LineIndex {
        LineIndex {
            rows: [PieceSet::EMPTY; ROWS],
            columns: [PieceSet::EMPTY; ROWS],
            up_right: [PieceSet::EMPTY; DIAGONALS],
            down_right: [PieceSet::EMPTY; DIAGONALS],
        }
    }

    /// Indexes every piece currently on the board.
    pub fn from_board(board: &Board) -> LineIndex {
        let mut lines = LineIndex::empty();
        for (id, _, sq) in board.pieces() {
            lines.add(id, sq);
        }
        lines
    }

    fn family(&self, line: Line) -> &[PieceSet] {
        match line {
            Line::Row => &self.rows,
            Line::Column => &self.columns,
            Line::UpRight => &self.up_right,
            Line::DownRight => &self.down_right,
            Line::KnightJump => panic!("knight jump is not a line family"),
        }
    }

    fn family_mut(&mut self, line: Line) -> &mut [PieceSet] {
        match line {
            Line::Row => &mut self.rows,
            Line::Column => &mut self.columns,
            Line::UpRight => &mut self.up_right,
            Line::DownRight => &mut self.down_right,
            Line::KnightJump => panic!("knight jump is not a line family"),
        }
    }

    /// Inserts a piece into the four buckets of `sq`.
    pub fn add(&mut self, id: PieceId, sq: Square) {
        for line in Line::FAMILIES {
            let key = line.key(sq);
            self.family_mut(line)[key].add(id);
        }
    }

    /// Removes a piece from the four buckets of `sq`, the last square it
    /// was indexed on.
    ///
    /// # Panics
    ///
    /// Panics if the piece is not indexed on `sq`.
    pub fn remove(&mut self, id: PieceId, sq: Square) {
        for line in Line::FAMILIES {
            let key = line.key(sq);
            let bucket = &mut self.family_mut(line)[key];
            assert!(bucket.contains(id), "piece {id} is not indexed on {sq}");
            bucket.discard(id);
        }
    }

    /// Pieces on the line of family `line` through `sq`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is [`Line::KnightJump`].
    pub fn bucket(&self, line: Line, sq: Square) -> PieceSet {
        self.family(line)[line.key(sq)]
    }

    /// Pieces sharing a row, column or diagonal with `sq`, including a
    /// piece on `sq` itself.
    pub fn sharing(&self, sq: Square) -> PieceSet {
        Line::FAMILIES
            .into_iter()
            .fold(PieceSet::EMPTY, |acc, line| acc | self.bucket(line, sq))
    }

    /// Every indexed piece.
    pub fn indexed(&self) -> PieceSet {
        self.rows.iter().fold(PieceSet::EMPTY, |acc, &row| acc | row)
    }

    /// Tests if the buckets match the squares of the pieces on `board`
    /// exactly.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        *self == LineIndex::from_board(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_add_remove() {
        let mut board = Board::empty();
        let queen = board.spawn(Color::White.queen(), Square::D1);
        let mut lines = LineIndex::from_board(&board);
        assert!(lines.bucket(Line::Row, Square::H1).contains(queen));
        assert!(lines.bucket(Line::Column, Square::D8).contains(queen));
        assert!(lines.bucket(Line::UpRight, Square::H5).contains(queen));
        assert!(lines.bucket(Line::DownRight, Square::A4).contains(queen));
        assert!(!lines.bucket(Line::DownRight, Square::A5).contains(queen));

        lines.remove(queen, Square::D1);
        assert!(lines.indexed().is_empty());
        assert_eq!(lines, LineIndex::empty());

        lines.add(queen, Square::D4);
        board.remove(queen, Square::D1);
        board.place(queen, Square::D4);
        assert!(lines.is_consistent_with(&board));
    }

    #[test]
    #[should_panic(expected = "is not indexed on d5")]
    fn test_remove_from_wrong_square() {
        let mut board = Board::empty();
        let queen = board.spawn(Color::White.queen(), Square::D1);
        let mut lines = LineIndex::from_board(&board);
        lines.remove(queen, Square::D5);
    }

    #[test]
    fn test_sharing() {
        let mut board = Board::empty();
        let king = board.spawn(Color::White.king(), Square::E1);
        let knight = board.spawn(Color::Black.knight(), Square::F3);
        let rook = board.spawn(Color::Black.rook(), Square::A5);
        let lines = LineIndex::from_board(&board);

        let around_e2 = lines.sharing(Square::E2);
        assert!(around_e2.contains(king));
        assert!(around_e2.contains(knight));
        assert!(!around_e2.contains(rook));
        assert!(lines.sharing(Square::E1).contains(king));
        assert_eq!(lines.sharing(Square::A1), PieceSet::from_elem(king) | PieceSet::from_elem(rook));
    }

    #[test]
    fn test_inconsistent() {
        let mut board = Board::empty();
        let pawn = board.spawn(Color::White.pawn(), Square::A2);
        let lines = LineIndex::from_board(&board);
        board.remove(pawn, Square::A2);
        board.place(pawn, Square::A3);
        assert!(!lines.is_consistent_with(&board));
    }
}
