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

use core::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{
    color::Color,
    role::Role,
    square::{Square, BOARD_SIZE},
    types::{Piece, PieceId, PieceSet},
};

#[derive(Copy, Clone, Debug)]
struct Slot {
    piece: Piece,
    square: Option<Square>,
}

/// Squares and the pieces standing on them.
///
/// The board owns an arena of pieces. A square refers to its occupant by
/// [`PieceId`], and a piece refers back to its square by index. Both
/// references are kept in agreement by [`Board::place()`] and
/// [`Board::remove()`], which treat any mismatch as a bug in the caller.
///
/// # Examples
///
/// ```
/// use sightline::{Board, Color, Square};
///
/// let mut board = Board::empty();
/// let king = board.spawn(Color::White.king(), Square::E1);
/// assert_eq!(board.occupant(Square::E1), Some(king));
/// assert_eq!(board.square_of(king), Some(Square::E1));
/// assert!(!board.is_occupied(Square::E2));
/// ```
#[derive(Clone)]
pub struct Board {
    squares: [Option<PieceId>; 64],
    slots: ArrayVec<Slot, 64>,
}

impl Board {
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
            slots: ArrayVec::new_const(),
        }
    }

    /// Creates a new piece in the arena and places it on `sq`.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is occupied.
    #[track_caller]
    pub fn spawn(&mut self, piece: Piece, sq: Square) -> PieceId {
        assert!(
            self.squares[sq.index()].is_none(),
            "cannot spawn {piece} on occupied square {sq}"
        );
        let id = PieceId(self.slots.len() as u8);
        self.slots.push(Slot {
            piece,
            square: None,
        });
        self.place(id, sq);
        id
    }

    /// Gets the square at `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    #[track_caller]
    pub fn square_at(&self, row: i32, col: i32) -> Square {
        match Square::from_coords(row, col) {
            Some(sq) => sq,
            None => panic!("square ({row}, {col}) is out of bounds"),
        }
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant(sq).map(|id| self.piece(id))
    }

    /// Gets the color and role of a piece.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this board.
    #[track_caller]
    #[inline]
    pub fn piece(&self, id: PieceId) -> Piece {
        self.slots[id.index()].piece
    }

    /// Gets the square of a piece, or `None` once it has been captured.
    #[track_caller]
    #[inline]
    pub fn square_of(&self, id: PieceId) -> Option<Square> {
        self.slots[id.index()].square
    }

    /// Number of pieces ever placed, including captured pieces.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pieces currently on the board, in handle order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.square
                .map(|sq| (PieceId(i as u8), slot.piece, sq))
        })
    }

    /// Pieces of one color currently on the board.
    pub fn by_color(&self, color: Color) -> PieceSet {
        self.pieces()
            .filter(|&(_, piece, _)| piece.color == color)
            .map(|(id, _, _)| id)
            .collect()
    }

    /// Pieces of one color and role currently on the board.
    pub fn by_piece(&self, piece: Piece) -> PieceSet {
        self.pieces()
            .filter(|&(_, p, _)| p == piece)
            .map(|(id, _, _)| id)
            .collect()
    }

    /// The king of `color`, if it is on the board.
    pub fn king_of(&self, color: Color) -> Option<PieceId> {
        self.by_piece(Role::King.of(color)).first()
    }

    /// Places a piece that currently has no square on an empty square.
    ///
    /// # Panics
    ///
    /// Panics if the piece already stands somewhere or the square is
    /// occupied.
    #[track_caller]
    pub fn place(&mut self, id: PieceId, sq: Square) {
        let slot = &mut self.slots[id.index()];
        assert!(
            slot.square.is_none(),
            "piece {id} must be removed from {:?} before being placed on {sq}",
            slot.square
        );
        assert!(
            self.squares[sq.index()].is_none(),
            "square {sq} must be empty before placing piece {id} on it"
        );
        slot.square = Some(sq);
        self.squares[sq.index()] = Some(id);
    }

    /// Removes a piece from the square it stands on.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not the occupant of `sq`.
    #[track_caller]
    pub fn remove(&mut self, id: PieceId, sq: Square) {
        assert_eq!(
            self.squares[sq.index()],
            Some(id),
            "occupant of {sq} must be the piece to remove"
        );
        let slot = &mut self.slots[id.index()];
        assert_eq!(
            slot.square,
            Some(sq),
            "piece {id} must stand on the square it is removed from"
        );
        slot.square = None;
        self.squares[sq.index()] = None;
    }

    /// Moves `id` from `from` to `to`, first taking `capture` off `to`.
    #[track_caller]
    pub(crate) fn relocate(
        &mut self,
        id: PieceId,
        from: Square,
        to: Square,
        capture: Option<PieceId>,
    ) {
        if let Some(captured) = capture {
            self.remove(captured, to);
        }
        self.remove(id, from);
        self.place(id, to);
    }

    /// Checks that every square and every piece refer to each other.
    pub fn is_consistent(&self) -> bool {
        let squares_agree = Square::all().all(|sq| {
            self.squares[sq.index()].map_or(true, |id| {
                self.slots
                    .get(id.index())
                    .is_some_and(|slot| slot.square == Some(sq))
            })
        });
        let pieces_agree = self.pieces().all(|(id, _, sq)| self.occupant(sq) == Some(id));
        squares_agree && pieces_agree
    }

    /// Color and role on every square, indexed by row and then column.
    pub fn grid(&self) -> [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (_, piece, sq) in self.pieces() {
            grid[sq.row() as usize][sq.col() as usize] = Some(piece);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Display for Board {
    /// Renders the board with White at the bottom, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row * BOARD_SIZE + col);
                f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
                f.write_char(if col + 1 < BOARD_SIZE { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_spawn_and_lookup() {
        let mut board = Board::empty();
        let rook = board.spawn(Color::Black.rook(), Square::H8);
        let pawn = board.spawn(Color::White.pawn(), Square::A2);
        assert_eq!(board.piece_at(Square::H8), Some(Color::Black.rook()));
        assert_eq!(board.piece(pawn), Color::White.pawn());
        assert_eq!(board.by_color(Color::Black).single(), Some(rook));
        assert_eq!(board.len(), 2);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_remove_then_place() {
        let mut board = Board::empty();
        let knight = board.spawn(Color::White.knight(), Square::B1);
        board.remove(knight, Square::B1);
        assert_eq!(board.square_of(knight), None);
        assert_eq!(board.occupant(Square::B1), None);
        board.place(knight, Square::C3);
        assert_eq!(board.square_of(knight), Some(Square::C3));
        assert!(board.is_consistent());
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    #[should_panic(expected = "must be empty")]
    fn test_place_on_occupied() {
        let mut board = Board::empty();
        board.spawn(Color::White.king(), Square::E1);
        let queen = board.spawn(Color::White.queen(), Square::D1);
        board.remove(queen, Square::D1);
        board.place(queen, Square::E1);
    }

    #[test]
    #[should_panic(expected = "before being placed")]
    fn test_place_twice() {
        let mut board = Board::empty();
        let queen = board.spawn(Color::White.queen(), Square::D1);
        board.place(queen, Square::D4);
    }

    #[test]
    #[should_panic(expected = "occupant of")]
    fn test_remove_wrong_piece() {
        let mut board = Board::empty();
        let a = board.spawn(Color::White.rook(), Square::A1);
        board.spawn(Color::White.rook(), Square::H1);
        board.remove(a, Square::H1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_square_at_out_of_bounds() {
        Board::empty().square_at(8, 0);
    }

    #[test]
    fn test_display_and_grid() {
        let mut board = Board::empty();
        board.spawn(Color::White.king(), Square::E1);
        board.spawn(Color::Black.king(), Square::E8);
        let text = board.to_string();
        assert!(text.starts_with(". . . . k . . .\n"));
        assert!(text.ends_with(". . . . K . . .\n"));
        assert_eq!(board.grid()[0][4], Some(Color::White.king()));
        assert_eq!(board.grid()[7][4], Some(Color::Black.king()));
        assert_eq!(board.square_at(3, 4), Square::E4);
    }
}
