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

use core::fmt;

use log::trace;

use crate::{
    board::Board,
    color::Color,
    deltas,
    line::Line,
    line_index::LineIndex,
    m::Move,
    square::Square,
    types::{PieceId, PieceSet},
    validate::{self, Safety},
};

/// Which side, if any, has its king attacked after a move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CheckStatus {
    NoCheck,
    WhiteUnderCheck,
    BlackUnderCheck,
}

impl CheckStatus {
    /// The status of `color` being in check, or not.
    pub const fn of(color: Color, in_check: bool) -> CheckStatus {
        match (in_check, color) {
            (false, _) => CheckStatus::NoCheck,
            (true, Color::White) => CheckStatus::WhiteUnderCheck,
            (true, Color::Black) => CheckStatus::BlackUnderCheck,
        }
    }

    /// The side in check.
    pub const fn checked(self) -> Option<Color> {
        match self {
            CheckStatus::NoCheck => None,
            CheckStatus::WhiteUnderCheck => Some(Color::White),
            CheckStatus::BlackUnderCheck => Some(Color::Black),
        }
    }

    pub const fn is_check(self) -> bool {
        !matches!(self, CheckStatus::NoCheck)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckStatus::NoCheck => "no check",
            CheckStatus::WhiteUnderCheck => "white under check",
            CheckStatus::BlackUnderCheck => "black under check",
        })
    }
}

/// Tests if the piece `id` threatens `sq`, ignoring the safety of its own
/// king.
pub(crate) fn threatens(board: &Board, id: PieceId, sq: Square) -> bool {
    validate::classify(board, id, sq.coord(), Safety::Ignored).is_some_and(|m| m.is_playable())
}

/// Pieces close enough to `sq` to possibly threaten it: those sharing a
/// line with it and those a knight jump away.
pub(crate) fn candidates(board: &Board, lines: &LineIndex, sq: Square) -> PieceSet {
    lines.sharing(sq) | knights_around(board, sq)
}

/// Pieces standing a knight jump away from `sq`, whatever their role.
pub(crate) fn knights_around(board: &Board, sq: Square) -> PieceSet {
    deltas::knight_jumps(sq)
        .filter_map(|jump| board.occupant(jump))
        .collect()
}

/// Pieces of `!color` threatening the king of `color`.
pub(crate) fn checkers(board: &Board, lines: &LineIndex, color: Color) -> PieceSet {
    let Some(king_sq) = board.king_of(color).and_then(|king| board.square_of(king)) else {
        return PieceSet::EMPTY;
    };
    (candidates(board, lines, king_sq) & board.by_color(!color))
        .into_iter()
        .filter(|&id| threatens(board, id, king_sq))
        .collect()
}

/// Tests if the own king is threatened once `m` has been played. The move
/// is simulated on a copy of the board.
pub(crate) fn exposes_king(board: &Board, m: &Move) -> bool {
    let mut after = board.clone();
    after.relocate(m.id(), m.from(), m.to(), m.capture());

    let Some(king_sq) = after
        .king_of(m.color())
        .and_then(|king| after.square_of(king))
    else {
        return false;
    };

    let exposed = after.pieces().any(|(id, piece, sq)| {
        piece.color != m.color() && Line::between(sq, king_sq).is_some() && threatens(&after, id, king_sq)
    });
    if exposed {
        trace!("{m} leaves the {} king on {king_sq} attacked", m.color());
    }
    exposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::square::Coord;

    #[test]
    fn test_threatens() {
        let mut board = Board::empty();
        let pawn = board.spawn(Color::White.pawn(), Square::E4);
        let rook = board.spawn(Color::Black.rook(), Square::D5);
        board.spawn(Color::Black.knight(), Square::F5);
        assert!(threatens(&board, pawn, Square::D5));
        assert!(threatens(&board, pawn, Square::F5));
        assert!(threatens(&board, pawn, Square::E5));
        assert!(!threatens(&board, pawn, Square::E6));
        assert!(threatens(&board, rook, Square::D1));
        assert!(!threatens(&board, rook, Square::G5));
    }

    #[test]
    fn test_checkers() {
        let mut board = Board::empty();
        board.spawn(Color::White.king(), Square::E1);
        let knight = board.spawn(Color::Black.knight(), Square::D3);
        let bishop = board.spawn(Color::Black.bishop(), Square::B4);
        board.spawn(Color::Black.rook(), Square::E8);
        board.spawn(Color::White.pawn(), Square::E4);
        board.spawn(Color::Black.king(), Square::H8);
        let lines = LineIndex::from_board(&board);

        let checkers = checkers(&board, &lines, Color::White);
        assert_eq!(checkers, PieceSet::from_elem(knight) | PieceSet::from_elem(bishop));
        assert!(super::checkers(&board, &lines, Color::Black).is_empty());
    }

    #[test]
    fn test_exposes_king() {
        let mut board = Board::empty();
        let king = board.spawn(Color::White.king(), Square::E1);
        board.spawn(Color::Black.rook(), Square::D8);
        board.spawn(Color::Black.pawn(), Square::G3);

        let step = |to: Square| {
            validate::classify(&board, king, to.coord(), Safety::Ignored).expect("on the board")
        };
        assert!(exposes_king(&board, &step(Square::D1)));
        assert!(exposes_king(&board, &step(Square::F2)));
        assert!(!exposes_king(&board, &step(Square::F1)));
        assert!(!exposes_king(&board, &step(Square::E2)));
        assert!(validate::classify(&board, king, Coord::new(-1, 4), Safety::Ignored).is_none());
    }

    #[test]
    fn test_status() {
        assert_eq!(CheckStatus::of(Color::White, true), CheckStatus::WhiteUnderCheck);
        assert_eq!(CheckStatus::of(Color::Black, false), CheckStatus::NoCheck);
        assert_eq!(CheckStatus::BlackUnderCheck.checked(), Some(Color::Black));
        assert_eq!(CheckStatus::BlackUnderCheck.to_string(), "black under check");
    }
}
