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

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use arrayvec::ArrayVec;
use log::debug;

use crate::{
    board::Board,
    check::{self, CheckStatus},
    color::{ByColor, Color},
    m::{LegalMoves, Move},
    position::{Position, PositionError},
    setup::Setup,
    square::Square,
    types::{PieceId, PieceSet},
};

/// Error when a move cannot be played in a [`Session`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// No piece stands on the origin square.
    Empty { from: Square },
    /// The piece on the origin square does not belong to the side to move.
    WrongTurn { from: Square, turn: Color },
    /// The move is not a legal step or capture. Carries its classification.
    Illegal { m: Move },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Empty { from } => write!(f, "no piece on {from}"),
            PlayError::WrongTurn { from, turn } => {
                write!(f, "piece on {from} cannot move, {turn} to move")
            }
            PlayError::Illegal { m } => write!(f, "illegal move {m} ({})", m.scope()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {}

#[derive(Clone, Debug, Default)]
struct Cached {
    legals: LegalMoves,
    stamp: u32,
}

/// A game in progress: a [`Position`] and the legal moves of every piece,
/// refreshed incrementally after each move.
///
/// After a move only pieces whose legal moves can have changed are
/// recomputed: those collinear with the origin or destination, those a
/// knight jump away from either, both kings, and every piece of a side
/// that is or was in check. Each recomputed entry is stamped with the
/// current [generation](Session::generation()).
///
/// # Examples
///
/// ```
/// use sightline::{Session, Square};
///
/// let mut session = Session::new();
/// session.play(Square::E2, Square::E4)?;
/// session.play(Square::E7, Square::E5)?;
/// assert!(session.play(Square::E4, Square::E5).is_err());
///
/// let knight = session.board().occupant(Square::G1).expect("knight");
/// assert_eq!(session.legal_moves(knight).steps().len(), 3);
/// # Ok::<_, sightline::PlayError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    pos: Position,
    cache: ArrayVec<Cached, 64>,
    generation: u32,
    checked: ByColor<bool>,
    status: CheckStatus,
    #[cfg(feature = "alloc")]
    history: Vec<Move>,
}

impl Session {
    /// A game from the standard starting position.
    pub fn new() -> Session {
        Session::from_position(Position::new())
    }

    /// # Errors
    ///
    /// Returns [`PositionError`] if the setup is not playable.
    pub fn from_setup(setup: &Setup) -> Result<Session, PositionError> {
        Position::from_setup(setup).map(Session::from_position)
    }

    pub fn from_position(pos: Position) -> Session {
        let cache = (0..pos.board().len())
            .map(|index| Cached {
                legals: match pos.board().square_of(PieceId(index as u8)) {
                    Some(_) => pos.compute_legal_moves(PieceId(index as u8)),
                    None => LegalMoves::new(),
                },
                stamp: 0,
            })
            .collect();
        let checked = ByColor::new_with(|color| pos.is_check(color));
        let status = checked
            .find(|&in_check| in_check)
            .map_or(CheckStatus::NoCheck, |color| CheckStatus::of(color, true));
        Session {
            pos,
            cache,
            generation: 0,
            checked,
            status,
            #[cfg(feature = "alloc")]
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.pos
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.pos.board()
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    /// Number of moves executed so far.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Check status after the last executed move.
    #[inline]
    pub fn check_status(&self) -> CheckStatus {
        self.status
    }

    /// Cached legal moves of the piece `id`. Empty once it is captured.
    #[track_caller]
    pub fn legal_moves(&self, id: PieceId) -> &LegalMoves {
        &self.cache[id.index()].legals
    }

    /// Generation at which the legal moves of `id` were last computed.
    #[track_caller]
    pub fn stamp(&self, id: PieceId) -> u32 {
        self.cache[id.index()].stamp
    }

    /// Moves executed so far, oldest first.
    #[cfg(feature = "alloc")]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Executes a step or capture and refreshes the legal moves of the
    /// pieces it can have affected. Returns the refreshed pieces.
    ///
    /// # Panics
    ///
    /// Panics if the move is not playable on the current board, as
    /// [`Position::execute_move()`] does.
    #[track_caller]
    pub fn execute_move(&mut self, m: &Move) -> PieceSet {
        self.pos.execute_move(m);
        self.generation += 1;

        let board = self.pos.board();
        let mut refresh = self.pos.affected_pieces(m.from(), m.to())
            | check::knights_around(board, m.from())
            | check::knights_around(board, m.to())
            | board.by_piece(Color::White.king())
            | board.by_piece(Color::Black.king());

        let checked = ByColor::new_with(|color| self.pos.is_check(color));
        for color in Color::ALL {
            if *checked.get(color) || *checked.get(color) != *self.checked.get(color) {
                refresh |= board.by_color(color);
            }
        }
        self.checked = checked;

        if let Some(captured) = m.capture() {
            self.cache[captured.index()] = Cached {
                legals: LegalMoves::new(),
                stamp: self.generation,
            };
        }
        for id in refresh {
            self.cache[id.index()] = Cached {
                legals: self.pos.compute_legal_moves(id),
                stamp: self.generation,
            };
        }

        let status = self.pos.check_status(m);
        if status != self.status {
            debug!("check status after {m}: {status}");
        }
        self.status = status;

        debug!(
            "executed {m} at generation {}, refreshed {} pieces",
            self.generation,
            refresh.count()
        );

        #[cfg(feature = "alloc")]
        self.history.push(*m);

        refresh
    }

    /// Plays the piece on `from` to `to` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if `from` is empty, holds a piece of the side
    /// not to move, or the move is not a legal step or capture.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, PlayError> {
        let id = self
            .board()
            .occupant(from)
            .ok_or(PlayError::Empty { from })?;
        let turn = self.turn();
        if self.board().piece(id).color != turn {
            return Err(PlayError::WrongTurn { from, turn });
        }

        let m = match self.legal_moves(id).find(to) {
            Some(m) => *m,
            None => {
                return Err(PlayError::Illegal {
                    m: self.pos.classify(id, to),
                })
            }
        };

        self.execute_move(&m);
        Ok(m)
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::Scope;

    fn assert_fresh(session: &Session) {
        for (id, _, _) in session.board().pieces() {
            assert_eq!(
                session.legal_moves(id),
                &session.position().compute_legal_moves(id),
                "stale cache for {id}"
            );
        }
    }

    #[test]
    fn test_play() {
        let mut session = Session::new();
        let m = session.play(Square::G1, Square::F3).expect("legal");
        assert_eq!(m.scope(), Scope::Step);
        assert_eq!(session.turn(), Color::Black);
        assert_eq!(session.generation(), 1);
        assert_fresh(&session);
        #[cfg(feature = "alloc")]
        assert_eq!(session.history(), &[m]);
    }

    #[test]
    fn test_play_errors() {
        let mut session = Session::new();
        assert_eq!(
            session.play(Square::E4, Square::E5),
            Err(PlayError::Empty { from: Square::E4 })
        );
        assert_eq!(
            session.play(Square::E7, Square::E5),
            Err(PlayError::WrongTurn {
                from: Square::E7,
                turn: Color::White
            })
        );
        match session.play(Square::E2, Square::E5) {
            Err(PlayError::Illegal { m }) => assert_eq!(m.scope(), Scope::Invalid),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_check_and_capture() {
        let mut session = Session::new();
        for (from, to) in [
            (Square::E2, Square::E4),
            (Square::F7, Square::F6),
            (Square::D1, Square::H5),
        ] {
            session.play(from, to).expect("legal");
            assert_fresh(&session);
        }
        assert_eq!(session.check_status(), CheckStatus::BlackUnderCheck);

        // Only g6 blocks.
        let legal_count: usize = session
            .board()
            .by_color(Color::Black)
            .into_iter()
            .map(|id| session.legal_moves(id).len())
            .sum();
        assert_eq!(legal_count, 1);

        let pawn = session.board().occupant(Square::G7).expect("pawn");
        session.play(Square::G7, Square::G6).expect("legal");
        assert_eq!(session.check_status(), CheckStatus::NoCheck);
        assert_fresh(&session);

        let queen = session.board().occupant(Square::H5).expect("queen");
        let m = session.play(Square::H5, Square::G6).expect("legal");
        assert_eq!(m.scope(), Scope::Capture);
        assert_eq!(m.capture(), Some(pawn));
        assert!(session.legal_moves(pawn).is_empty());
        assert_eq!(session.stamp(queen), session.generation());
        assert_fresh(&session);
    }
}
