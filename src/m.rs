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

use core::{
    fmt,
    fmt::{Display, Write as _},
};

use arrayvec::ArrayVec;
use log::trace;

use crate::{
    board::Board,
    color::Color,
    line::Line,
    role::Role,
    scope::{Scope, Scopes},
    square::{Square, SquareSet},
    types::{Piece, PieceId},
};

/// A candidate move of a piece and its classification.
///
/// Moves are created by [`Position::create_move()`](crate::Position::create_move)
/// and [`Position::compute_legal_moves()`](crate::Position::compute_legal_moves),
/// already advanced to a terminal [`Scope`]. Only moves classified
/// [`Scope::Step`] or [`Scope::Capture`] can be executed.
///
/// # Display
///
/// `Move` implements [`Display`] using long algebraic notation, e.g.
/// `Nb1-c3` or `e4xd5`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    id: PieceId,
    piece: Piece,
    from: Square,
    to: Square,
    capture: Option<PieceId>,
    captured: Option<Piece>,
    line: Option<Line>,
    scope: Scope,
    trail: Scopes,
}

impl Move {
    /// Starts a [`Scope::Hypothetical`] move of the piece `id` to `to`.
    /// Records the occupant of `to` at this time, whatever its color.
    pub(crate) fn hypothetical(board: &Board, id: PieceId, from: Square, to: Square) -> Move {
        let capture = board.occupant(to);
        Move {
            id,
            piece: board.piece(id),
            from,
            to,
            capture,
            captured: capture.map(|c| board.piece(c)),
            line: Line::between(from, to),
            scope: Scope::Hypothetical,
            trail: Scopes::HYPOTHETICAL,
        }
    }

    #[track_caller]
    pub(crate) fn advance(&mut self, next: Scope) {
        trace!("{self}: {} -> {next}", self.scope);
        self.scope = self.scope.advance(next);
        self.trail |= next.flag();
    }

    /// Handle of the moving piece.
    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.piece.role
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Handle of the piece standing on the destination, if any.
    #[inline]
    pub const fn capture(&self) -> Option<PieceId> {
        self.capture
    }

    /// Color and role of the piece standing on the destination, if any.
    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Relation between origin and destination, or `None` if there is
    /// neither a line nor a knight jump between them.
    #[inline]
    pub const fn line(&self) -> Option<Line> {
        self.line
    }

    #[inline]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Every scope the move has been in, including the current one.
    #[inline]
    pub const fn trail(&self) -> Scopes {
        self.trail
    }

    /// Tests if the move is classified [`Scope::Step`] or
    /// [`Scope::Capture`].
    #[inline]
    pub const fn is_playable(&self) -> bool {
        self.scope.is_playable()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.piece.role != Role::Pawn {
            f.write_char(self.piece.role.upper_char())?;
        }
        write!(
            f,
            "{}{}{}",
            self.from,
            if self.capture.is_some() { 'x' } else { '-' },
            self.to
        )
    }
}

/// Moves of a single piece. A queen in the center has the most, 27.
pub type PieceMoves = ArrayVec<Move, 32>;

/// Moves of a whole side.
pub type MoveList = ArrayVec<Move, 256>;

/// The legal moves of a piece, split by their terminal scope.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LegalMoves {
    steps: PieceMoves,
    captures: PieceMoves,
}

impl LegalMoves {
    pub const fn new() -> LegalMoves {
        LegalMoves {
            steps: PieceMoves::new_const(),
            captures: PieceMoves::new_const(),
        }
    }

    /// Files a move under its scope.
    ///
    /// # Panics
    ///
    /// Panics if the move is not playable.
    #[track_caller]
    pub(crate) fn push(&mut self, m: Move) {
        match m.scope() {
            Scope::Step => self.steps.push(m),
            Scope::Capture => self.captures.push(m),
            scope => panic!("{m} classified {scope} is not a legal move"),
        }
    }

    /// Moves to empty squares.
    pub fn steps(&self) -> &[Move] {
        &self.steps
    }

    /// Moves onto enemy pieces.
    pub fn captures(&self) -> &[Move] {
        &self.captures
    }

    /// Moves classified `scope`. Empty unless `scope` is
    /// [`Scope::Step`] or [`Scope::Capture`].
    pub fn get(&self, scope: Scope) -> &[Move] {
        match scope {
            Scope::Step => &self.steps,
            Scope::Capture => &self.captures,
            _ => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.steps.iter().chain(self.captures.iter())
    }

    pub fn len(&self) -> usize {
        self.steps.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.captures.is_empty()
    }

    /// The legal move to `to`, if any.
    pub fn find(&self, to: Square) -> Option<&Move> {
        self.iter().find(|m| m.to() == to)
    }

    /// Destination squares of all legal moves.
    pub fn destinations(&self) -> SquareSet {
        self.iter().map(Move::to).collect()
    }
}
