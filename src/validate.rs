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

//! The gates a candidate move passes on its way to a terminal scope.

use crate::{
    board::Board,
    check, deltas,
    line::{self, Line},
    line_index::LineIndex,
    m::Move,
    pins,
    role::Role,
    scope::Scope,
    square::{Coord, Square},
    types::PieceId,
};

/// Whether the king safety gate is applied.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Safety<'a> {
    /// Legal move generation. `in_check` tells if the side of the moving
    /// piece is currently in check.
    Enforced { lines: &'a LineIndex, in_check: bool },
    /// Threat queries, which ignore whether the own king stays safe.
    Ignored,
}

/// Classifies the move of piece `id` to `target`.
///
/// Returns `None` if `target` is off the board. Otherwise the returned move
/// has a terminal scope.
///
/// # Panics
///
/// Panics if the piece is not on the board.
#[track_caller]
pub(crate) fn classify(board: &Board, id: PieceId, target: Coord, safety: Safety<'_>) -> Option<Move> {
    target.square().map(|to| classify_square(board, id, to, safety))
}

/// Classifies the move of piece `id` to the square `to`. The returned move
/// has a terminal scope.
///
/// # Panics
///
/// Panics if the piece is not on the board.
#[track_caller]
pub(crate) fn classify_square(board: &Board, id: PieceId, to: Square, safety: Safety<'_>) -> Move {
    let Some(from) = board.square_of(id) else {
        panic!("piece {id} is not on the board");
    };
    let mut m = Move::hypothetical(board, id, from, to);

    loop {
        let next = match m.scope() {
            Scope::Hypothetical => {
                if deltas::reaches(m.piece(), from, to.coord()) {
                    Scope::BoardConstrained
                } else {
                    Scope::Invalid
                }
            }
            Scope::BoardConstrained => {
                if is_unobstructed(board, &m) {
                    Scope::Unobstructed
                } else {
                    Scope::Invalid
                }
            }
            Scope::Unobstructed => {
                if is_legal(board, &m, safety) {
                    Scope::Legal
                } else {
                    Scope::Invalid
                }
            }
            Scope::Legal => settle(&m),
            Scope::Step | Scope::Capture | Scope::Invalid => break,
        };
        m.advance(next);
    }

    m
}

/// No piece stands strictly between origin and destination. Knight jumps
/// and king steps have no squares in between. The pawn double step is
/// walked like a slider.
fn is_unobstructed(board: &Board, m: &Move) -> bool {
    line::between(m.from(), m.to())
        .into_iter()
        .all(|sq| !board.is_occupied(sq))
}

fn is_legal(board: &Board, m: &Move, safety: Safety<'_>) -> bool {
    if m.captured().is_some_and(|piece| piece.color == m.color()) {
        return false;
    }

    match safety {
        Safety::Ignored => true,
        Safety::Enforced { lines, in_check } => {
            !pins::reveals_check(board, lines, m)
                && !((in_check || m.role() == Role::King) && check::exposes_king(board, m))
        }
    }
}

/// Splits legal moves into steps and captures. Pawns step only along their
/// column and capture only diagonally.
fn settle(m: &Move) -> Scope {
    let occupied = m.is_capture();
    if m.role() == Role::Pawn {
        match m.line() {
            Some(Line::Column) if !occupied => Scope::Step,
            Some(line) if line.is_diagonal() && occupied => Scope::Capture,
            _ => Scope::Invalid,
        }
    } else if occupied {
        Scope::Capture
    } else {
        Scope::Step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn ignored(board: &Board, id: PieceId, to: Square) -> Move {
        classify(board, id, to.coord(), Safety::Ignored).expect("on the board")
    }

    #[test]
    fn test_off_board() {
        let mut board = Board::empty();
        let rook = board.spawn(Color::White.rook(), Square::A1);
        assert_eq!(classify(&board, rook, Coord::new(0, -1), Safety::Ignored), None);
        assert_eq!(classify(&board, rook, Coord::new(8, 0), Safety::Ignored), None);
    }

    #[test]
    fn test_not_hypothetical() {
        let mut board = Board::empty();
        let bishop = board.spawn(Color::White.bishop(), Square::C1);
        let m = ignored(&board, bishop, Square::C4);
        assert_eq!(m.scope(), Scope::Invalid);
        assert_eq!(m.trail(), crate::Scopes::HYPOTHETICAL | crate::Scopes::INVALID);
    }

    #[test]
    fn test_obstructed() {
        let mut board = Board::empty();
        let rook = board.spawn(Color::White.rook(), Square::A1);
        board.spawn(Color::Black.pawn(), Square::A4);
        assert_eq!(ignored(&board, rook, Square::A3).scope(), Scope::Step);
        assert_eq!(ignored(&board, rook, Square::A4).scope(), Scope::Capture);
        assert_eq!(ignored(&board, rook, Square::A5).scope(), Scope::Invalid);
    }

    #[test]
    fn test_friendly_destination() {
        let mut board = Board::empty();
        let knight = board.spawn(Color::White.knight(), Square::G1);
        board.spawn(Color::White.pawn(), Square::F3);
        let m = ignored(&board, knight, Square::F3);
        assert_eq!(m.scope(), Scope::Invalid);
        assert!(m.trail().contains(crate::Scopes::UNOBSTRUCTED));
        assert!(!m.trail().contains(crate::Scopes::LEGAL));
    }

    #[test]
    fn test_pawn_split() {
        let mut board = Board::empty();
        let pawn = board.spawn(Color::White.pawn(), Square::E2);
        board.spawn(Color::Black.knight(), Square::E4);
        board.spawn(Color::Black.knight(), Square::D3);

        assert_eq!(ignored(&board, pawn, Square::E3).scope(), Scope::Step);
        assert_eq!(ignored(&board, pawn, Square::E4).scope(), Scope::Invalid);
        assert_eq!(ignored(&board, pawn, Square::D3).scope(), Scope::Capture);
        assert_eq!(ignored(&board, pawn, Square::F3).scope(), Scope::Invalid);
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        let mut board = Board::empty();
        let pawn = board.spawn(Color::Black.pawn(), Square::D7);
        board.spawn(Color::White.bishop(), Square::D6);
        let m = ignored(&board, pawn, Square::D5);
        assert_eq!(m.scope(), Scope::Invalid);
        assert!(!m.trail().contains(crate::Scopes::UNOBSTRUCTED));
    }

    #[test]
    fn test_every_trail_is_valid() {
        let mut board = Board::empty();
        let queen = board.spawn(Color::White.queen(), Square::D4);
        board.spawn(Color::White.pawn(), Square::D6);
        board.spawn(Color::Black.pawn(), Square::F6);
        for to in Square::all() {
            let m = ignored(&board, queen, to);
            assert!(m.scope().is_terminal());
            assert!(m.trail().is_valid_trail(), "{m} has trail {:?}", m.trail());
        }
    }
}
