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

use bitflags::bitflags;
use log::debug;

use crate::{
    board::Board,
    check::{self, CheckStatus},
    color::Color,
    deltas,
    line_index::LineIndex,
    m::{LegalMoves, Move, MoveList},
    setup::Setup,
    square::{Coord, Square, SquareSet},
    types::{PieceId, PieceSet},
    validate::{self, Safety},
};

bitflags! {
    /// Reasons for a [`Setup`] not being playable.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// A side has no king.
        const MISSING_KING = 1 << 0;
        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 1;
    }
}

/// Error when trying to create a [`Position`] from a [`Setup`] that the
/// engine cannot play from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionError {
    kinds: PositionErrorKinds,
}

impl PositionError {
    pub const fn kinds(&self) -> PositionErrorKinds {
        self.kinds
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position")?;
        let mut separator = ": ";
        for (kind, reason) in [
            (PositionErrorKinds::MISSING_KING, "missing king"),
            (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
        ] {
            if self.kinds.contains(kind) {
                f.write_str(separator)?;
                f.write_str(reason)?;
                separator = ", ";
            }
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

/// A board, its [`LineIndex`] and the side to move.
///
/// This is the single context passed to every move generation and
/// execution operation. The line index is kept in step with the board by
/// [`Position::execute_move()`].
///
/// # Examples
///
/// ```
/// use sightline::{Coord, Position, Scope, Square};
///
/// let pos = Position::new();
/// let knight = pos.board().occupant(Square::G1).expect("knight on g1");
///
/// let legals = pos.compute_legal_moves(knight);
/// assert_eq!(legals.steps().len(), 2);
/// assert!(legals.captures().is_empty());
///
/// let m = pos.create_move(knight, Coord::new(1, 4)).expect("on the board");
/// assert_eq!(m.scope(), Scope::Invalid); // e2 holds a white pawn
/// assert_eq!(pos.create_move(knight, Coord::new(-1, 5)), None);
/// ```
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    lines: LineIndex,
    turn: Color,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Position {
        Position::from_setup_unchecked(&Setup::standard())
    }

    /// Sets up a position. Pieces get their handles in square order.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] unless each side has exactly one king.
    pub fn from_setup(setup: &Setup) -> Result<Position, PositionError> {
        let mut kinds = PositionErrorKinds::empty();
        for color in Color::ALL {
            match setup.pieces().filter(|&(_, piece)| piece == color.king()).count() {
                0 => kinds |= PositionErrorKinds::MISSING_KING,
                1 => (),
                _ => kinds |= PositionErrorKinds::TOO_MANY_KINGS,
            }
        }
        if kinds.is_empty() {
            Ok(Position::from_setup_unchecked(setup))
        } else {
            Err(PositionError { kinds })
        }
    }

    fn from_setup_unchecked(setup: &Setup) -> Position {
        let mut board = Board::empty();
        for (sq, piece) in setup.pieces() {
            board.spawn(piece, sq);
        }
        Position {
            lines: LineIndex::from_board(&board),
            board,
            turn: setup.turn,
        }
    }

    pub fn to_setup(&self) -> Setup {
        let mut setup = Setup::empty();
        for (_, piece, sq) in self.board.pieces() {
            setup.put(sq, piece);
        }
        setup.turn = self.turn;
        setup
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[track_caller]
    fn square_of(&self, id: PieceId) -> Square {
        match self.board.square_of(id) {
            Some(sq) => sq,
            None => panic!("piece {id} is not on the board"),
        }
    }

    /// Pieces of `!color` threatening the king of `color`.
    pub fn checkers(&self, color: Color) -> PieceSet {
        check::checkers(&self.board, &self.lines, color)
    }

    pub fn is_check(&self, color: Color) -> bool {
        self.checkers(color).any()
    }

    fn safety(&self, color: Color) -> Safety<'_> {
        Safety::Enforced {
            lines: &self.lines,
            in_check: self.is_check(color),
        }
    }

    fn legal_moves_with(&self, id: PieceId, safety: Safety<'_>) -> LegalMoves {
        let from = self.square_of(id);
        let mut legals = LegalMoves::new();
        for target in deltas::hypothetical_targets(self.board.piece(id), from) {
            if let Some(m) = validate::classify(&self.board, id, target, safety) {
                if m.is_playable() {
                    legals.push(m);
                }
            }
        }
        legals
    }

    /// The legal moves of the piece `id`, split into steps and captures.
    ///
    /// Legal moves do not depend on whose turn it is.
    ///
    /// # Panics
    ///
    /// Panics if the piece is not on the board.
    #[track_caller]
    pub fn compute_legal_moves(&self, id: PieceId) -> LegalMoves {
        let color = self.board.piece(id).color;
        self.legal_moves_with(id, self.safety(color))
    }

    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let safety = self.safety(self.turn);
        let mut moves = MoveList::new();
        for id in self.board.by_color(self.turn) {
            moves.extend(self.legal_moves_with(id, safety).iter().copied());
        }
        moves
    }

    /// Squares the piece `id` threatens: its steps and captures with no
    /// regard for the safety of its own king.
    ///
    /// # Panics
    ///
    /// Panics if the piece is not on the board.
    #[track_caller]
    pub fn compute_threatened_squares(&self, id: PieceId) -> SquareSet {
        let from = self.square_of(id);
        deltas::hypothetical_targets(self.board.piece(id), from)
            .filter_map(|target| validate::classify(&self.board, id, target, Safety::Ignored))
            .filter(Move::is_playable)
            .map(|m| m.to())
            .collect()
    }

    /// Classifies the move of piece `id` to `to`.
    ///
    /// Returns `None` exactly if `to` is off the board. Otherwise the move
    /// has a terminal scope, possibly [`Scope::Invalid`](crate::Scope::Invalid).
    ///
    /// # Panics
    ///
    /// Panics if the piece is not on the board.
    #[track_caller]
    pub fn create_move(&self, id: PieceId, to: Coord) -> Option<Move> {
        let color = self.board.piece(id).color;
        validate::classify(&self.board, id, to, self.safety(color))
    }

    /// Classifies the move of piece `id` to the square `to`.
    #[track_caller]
    pub(crate) fn classify(&self, id: PieceId, to: Square) -> Move {
        let color = self.board.piece(id).color;
        validate::classify_square(&self.board, id, to, self.safety(color))
    }

    /// Plays a step or capture: updates the line index and the board, and
    /// passes the turn to the other side.
    ///
    /// # Panics
    ///
    /// Panics if the move is not classified [`Scope::Step`](crate::Scope::Step)
    /// or [`Scope::Capture`](crate::Scope::Capture), or does not match the
    /// board.
    #[track_caller]
    pub fn execute_move(&mut self, m: &Move) {
        assert!(
            m.is_playable(),
            "cannot execute {m} classified {}",
            m.scope()
        );
        assert_eq!(
            self.board.square_of(m.id()),
            Some(m.from()),
            "{m} does not start on the square of its piece"
        );

        if let Some(captured) = m.capture() {
            self.lines.remove(captured, m.to());
        }
        self.lines.remove(m.id(), m.from());
        self.board.relocate(m.id(), m.from(), m.to(), m.capture());
        self.lines.add(m.id(), m.to());
        self.turn = !m.color();

        debug!("executed {m}");
    }

    /// Pieces collinear with `from` or `to`. After a move between these
    /// squares only their legal moves can have changed by line of sight.
    pub fn affected_pieces(&self, from: Square, to: Square) -> PieceSet {
        self.lines.sharing(from) | self.lines.sharing(to)
    }

    /// Tests if `last_move`, already executed, left the opponent of the
    /// mover in check. Only the mover's pieces collinear with the origin
    /// or destination are examined.
    pub fn check_status(&self, last_move: &Move) -> CheckStatus {
        let mover = last_move.color();
        let defender = !mover;
        let Some(king_sq) = self
            .board
            .king_of(defender)
            .and_then(|king| self.board.square_of(king))
        else {
            return CheckStatus::NoCheck;
        };

        let candidates = self.affected_pieces(last_move.from(), last_move.to())
            & self.board.by_color(mover);
        let in_check = candidates
            .into_iter()
            .any(|id| check::threatens(&self.board, id, king_sq));
        CheckStatus::of(defender, in_check)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::scope::Scope;

    fn pos(setup: &str) -> Position {
        Position::from_setup(&setup.parse().expect("valid setup")).expect("playable")
    }

    fn at(pos: &Position, sq: Square) -> PieceId {
        pos.board().occupant(sq).expect("occupied")
    }

    #[test]
    fn test_position_error() {
        let err = Position::from_setup(&"8/8/8/8/8/8/8/4K3".parse().expect("valid"))
            .expect_err("black king missing");
        assert_eq!(err.kinds(), PositionErrorKinds::MISSING_KING);
        assert_eq!(err.to_string(), "illegal position: missing king");

        let err = Position::from_setup(&"k7/8/8/8/8/8/8/KK6".parse().expect("valid"))
            .expect_err("two white kings");
        assert_eq!(err.kinds(), PositionErrorKinds::TOO_MANY_KINGS);

        let err = Position::from_setup(&Setup::empty()).expect_err("no kings");
        assert_eq!(err.kinds(), PositionErrorKinds::MISSING_KING);
    }

    #[test]
    fn test_starting_moves() {
        let pos = Position::new();
        assert_eq!(pos.legal_moves().len(), 20);
        assert!(!pos.is_check(Color::White));
        assert_eq!(pos.to_setup(), Setup::standard());
    }

    #[test]
    fn test_execute() {
        let mut pos = Position::new();
        let pawn = at(&pos, Square::E2);
        let m = pos.create_move(pawn, Square::E4.coord()).expect("on the board");
        assert_eq!(m.scope(), Scope::Step);
        pos.execute_move(&m);
        assert_eq!(pos.board().occupant(Square::E4), Some(pawn));
        assert_eq!(pos.board().occupant(Square::E2), None);
        assert!(pos.lines().is_consistent_with(pos.board()));
        assert_eq!(pos.turn(), Color::Black);
        assert_eq!(pos.check_status(&m), CheckStatus::NoCheck);
    }

    #[test]
    #[should_panic(expected = "cannot execute")]
    fn test_execute_invalid() {
        let mut pos = Position::new();
        let rook = at(&pos, Square::A1);
        let m = pos.create_move(rook, Square::A4.coord()).expect("on the board");
        assert_eq!(m.scope(), Scope::Invalid);
        pos.execute_move(&m);
    }

    #[test]
    fn test_capture_updates_lines() {
        let mut pos = pos("4k3/8/8/3p4/4P3/8/8/4K3 w");
        let pawn = at(&pos, Square::E4);
        let victim = at(&pos, Square::D5);
        let m = pos.create_move(pawn, Square::D5.coord()).expect("on the board");
        assert_eq!(m.scope(), Scope::Capture);
        assert_eq!(m.capture(), Some(victim));
        pos.execute_move(&m);
        assert_eq!(pos.board().square_of(victim), None);
        assert!(!pos.lines().indexed().contains(victim));
        assert!(pos.lines().is_consistent_with(pos.board()));
    }

    #[test]
    fn test_check_status() {
        let mut pos = pos("4k3/8/8/8/8/8/8/R3K3 w");
        let rook = at(&pos, Square::A1);
        let m = pos.create_move(rook, Square::A8.coord()).expect("on the board");
        pos.execute_move(&m);
        assert_eq!(pos.check_status(&m), CheckStatus::BlackUnderCheck);
        assert!(pos.is_check(Color::Black));

        let king = at(&pos, Square::E8);
        let legals = pos.compute_legal_moves(king);
        let destinations = legals.destinations();
        assert!(!destinations.contains(Square::D8));
        assert!(!destinations.contains(Square::F8));
        assert!(destinations.contains(Square::D7));
        assert!(destinations.contains(Square::E7));
        assert!(destinations.contains(Square::F7));
        assert_eq!(legals.len(), 3);
    }

    #[test]
    fn test_discovered_check() {
        let mut pos = pos("4k3/8/8/8/8/8/4N3/4R1K1 w");
        let knight = at(&pos, Square::E2);
        let m = pos.create_move(knight, Square::C3.coord()).expect("on the board");
        pos.execute_move(&m);
        assert_eq!(pos.check_status(&m), CheckStatus::BlackUnderCheck);
    }

    #[test]
    fn test_threatened_squares_ignore_pins() {
        let pos = pos("k3r3/8/8/8/8/8/4B3/4K3 w");
        let bishop = at(&pos, Square::E2);
        assert!(pos.compute_legal_moves(bishop).is_empty());
        let threatened = pos.compute_threatened_squares(bishop);
        assert!(threatened.contains(Square::A6));
        assert!(threatened.contains(Square::H5));
        assert!(!threatened.contains(Square::E1));
        assert_eq!(threatened.count(), 9);
    }
}
