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

use crate::{color::Color, role::Role, util::BitIndex};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Letter of the piece, uppercase for white.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(32 & ch as u8 == 0)))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.role)
    }
}

/// Handle of a piece in the arena of a [`Board`](crate::Board).
///
/// Handles are assigned in placement order when the board is set up and
/// stay valid for the whole game, including after the piece is captured.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl BitIndex for PieceId {
    #[inline]
    fn bit(self) -> u32 {
        u32::from(self.0)
    }

    #[inline]
    fn from_bit(bit: u32) -> PieceId {
        debug_assert!(bit < 64);
        PieceId(bit as u8)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitset! {
    /// A set of pieces, indexed by [`PieceId`].
    ///
    /// Used for the buckets of the [`LineIndex`](crate::LineIndex) and for
    /// the pieces affected by a move.
    PieceSet, PieceSetIter, PieceId
}
