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

//! Hypothetical deltas: every destination a piece could conceivably reach
//! from its square on an empty, unbounded board.
//!
//! # Examples
//!
//! ```
//! use sightline::{deltas, Color, Square};
//!
//! let pawn = deltas::hypothetical_deltas(Color::White.pawn(), Square::E2);
//! assert_eq!(pawn.len(), 4); // single step, double step, two diagonals
//!
//! let queen = deltas::hypothetical_deltas(Color::Black.queen(), Square::D8);
//! assert_eq!(queen.len(), 56);
//! ```

use arrayvec::ArrayVec;

use crate::{
    role::Role,
    square::{Coord, Delta, Square, BOARD_SIZE},
    types::Piece,
};

/// Deltas of a single piece. The queen has the most, 4 × 7 diagonal and
/// 4 × 7 straight.
pub type Deltas = ArrayVec<Delta, 56>;

const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(2, 1),
    Delta::new(1, 2),
    Delta::new(-1, 2),
    Delta::new(-2, 1),
    Delta::new(-2, -1),
    Delta::new(-1, -2),
    Delta::new(1, -2),
    Delta::new(2, -1),
];

const KING_DELTAS: [Delta; 8] = [
    Delta::new(1, 0),
    Delta::new(1, 1),
    Delta::new(0, 1),
    Delta::new(-1, 1),
    Delta::new(-1, 0),
    Delta::new(-1, -1),
    Delta::new(0, -1),
    Delta::new(1, -1),
];

const ROOK_DIRECTIONS: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(0, 1),
    Delta::new(-1, 0),
    Delta::new(0, -1),
];

const BISHOP_DIRECTIONS: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
    Delta::new(1, -1),
];

fn push_rays(deltas: &mut Deltas, directions: &[Delta]) {
    for &direction in directions {
        for distance in 1..BOARD_SIZE as i8 {
            deltas.push(direction * distance);
        }
    }
}

/// Gets the hypothetical deltas of `piece` standing on `from`.
///
/// Pawns get their single step, the double step if they stand on the
/// starting row of their color, and both forward diagonals. Whether a
/// diagonal is a capture and whether a step is blocked is decided later
/// against the board. Deltas leading off the board are kept.
pub fn hypothetical_deltas(piece: Piece, from: Square) -> Deltas {
    let mut deltas = Deltas::new();
    match piece.role {
        Role::Pawn => {
            let forward = piece.color.forward();
            deltas.push(Delta::new(forward, 0));
            if from.row() == piece.color.pawn_row() {
                deltas.push(Delta::new(2 * forward, 0));
            }
            deltas.push(Delta::new(forward, -1));
            deltas.push(Delta::new(forward, 1));
        }
        Role::Knight => deltas.extend(KNIGHT_DELTAS),
        Role::King => deltas.extend(KING_DELTAS),
        Role::Bishop => push_rays(&mut deltas, &BISHOP_DIRECTIONS),
        Role::Rook => push_rays(&mut deltas, &ROOK_DIRECTIONS),
        Role::Queen => {
            push_rays(&mut deltas, &BISHOP_DIRECTIONS);
            push_rays(&mut deltas, &ROOK_DIRECTIONS);
        }
    }
    deltas
}

/// Destinations of the hypothetical deltas, possibly off the board.
pub fn hypothetical_targets(piece: Piece, from: Square) -> impl Iterator<Item = Coord> {
    hypothetical_deltas(piece, from)
        .into_iter()
        .map(move |delta| from.coord() + delta)
}

/// Squares a knight jump away from `sq`.
pub(crate) fn knight_jumps(sq: Square) -> impl Iterator<Item = Square> {
    KNIGHT_DELTAS
        .into_iter()
        .filter_map(move |delta| sq.offset(delta))
}

/// Tests if `to` is among the hypothetical destinations of `piece` on
/// `from`.
pub fn reaches(piece: Piece, from: Square, to: Coord) -> bool {
    let origin = from.coord();
    let delta = Delta::new(
        to.row.saturating_sub(origin.row),
        to.col.saturating_sub(origin.col),
    );
    !delta.is_zero() && hypothetical_deltas(piece, from).contains(&delta)
}
