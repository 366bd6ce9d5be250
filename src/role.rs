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

use crate::{color::Color, line::Line, types::Piece};

/// Piece kinds: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Role {
    /// Gets the piece kind from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightline::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('n'), Some(Role::Knight));
    ///
    /// assert_eq!(Role::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of the given color.
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece { color, role: self }
    }

    /// Gets the lowercase English letter for the piece kind.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Gets the uppercase English letter for the piece kind.
    pub const fn upper_char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// Tests if a piece of this kind, standing on `line` beyond a pinned
    /// piece, attacks the king behind it once the pinned piece moves away.
    ///
    /// # Panics
    ///
    /// Panics if `line` is [`Line::KnightJump`], which is not a line of
    /// sight.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightline::{Line, Role};
    ///
    /// assert!(Role::Rook.pins_along(Line::Column));
    /// assert!(!Role::Rook.pins_along(Line::UpRight));
    /// assert!(Role::Queen.pins_along(Line::DownRight));
    /// assert!(!Role::Knight.pins_along(Line::Row));
    /// ```
    pub fn pins_along(self, line: Line) -> bool {
        assert!(
            line != Line::KnightJump,
            "knight jump is not a line of sight"
        );
        match self {
            Role::Pawn | Role::Knight | Role::King => false,
            Role::Bishop => line.is_diagonal(),
            Role::Rook => line.is_straight(),
            Role::Queen => true,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RoleVisitor;

        impl serde::de::Visitor<'_> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("piece letter")
            }

            fn visit_char<E>(self, value: char) -> Result<Role, E>
            where
                E: serde::de::Error,
            {
                Role::from_char(value)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Char(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> Result<Role, E>
            where
                E: serde::de::Error,
            {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self.visit_char(ch),
                    _ => Err(E::invalid_value(serde::de::Unexpected::Str(value), &self)),
                }
            }
        }

        deserializer.deserialize_char(RoleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order() {
        assert!(Role::Pawn < Role::Knight);
        assert!(Role::Knight < Role::Bishop);
        assert!(Role::Bishop < Role::Rook);
        assert!(Role::Rook < Role::Queen);
        assert!(Role::Queen < Role::King);
    }

    #[test]
    fn test_pin_table() {
        let lines = [Line::Row, Line::Column, Line::UpRight, Line::DownRight];
        for line in lines {
            assert_eq!(Role::Rook.pins_along(line), line.is_straight());
            assert_eq!(Role::Bishop.pins_along(line), line.is_diagonal());
            assert!(Role::Queen.pins_along(line));
            assert!(!Role::Pawn.pins_along(line));
            assert!(!Role::Knight.pins_along(line));
            assert!(!Role::King.pins_along(line));
        }
    }

    #[test]
    #[should_panic(expected = "knight jump")]
    fn test_pin_along_knight_jump() {
        Role::Queen.pins_along(Line::KnightJump);
    }
}
