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

use core::{fmt, ops, str::FromStr};

use crate::{color::Color, util::BitIndex};

/// Number of rows and of columns.
pub const BOARD_SIZE: u32 = 8;

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSquareError {}

/// A square of the board, identified by row and column.
///
/// Row 0 is White's back rank and column 0 is the `a` file, so
/// `Square::E1` has row 0 and column 4.
///
/// # Examples
///
/// ```
/// use sightline::{Color, Square};
///
/// let sq = Square::from_coords(3, 4).expect("on the board");
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.to_string(), "e4");
/// assert_eq!(Square::A1.color(), Color::Black);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets a `Square` from its index, `row * 8 + column`.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64, "square index out of range");
        Square(index as u8)
    }

    /// Gets the square at `row` and `col`, or `None` if either is outside
    /// `0..8`.
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Square> {
        if 0 <= row && row < BOARD_SIZE as i32 && 0 <= col && col < BOARD_SIZE as i32 {
            Some(Square((row * BOARD_SIZE as i32 + col) as u8))
        } else {
            None
        }
    }

    /// Parses a square name such as `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not a column letter
    /// `a`..`h` followed by a row number `1`..`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let (&file, rank) = s.split_first().ok_or(ParseSquareError)?;
        if !(b'a'..=b'h').contains(&file) {
            return Err(ParseSquareError);
        }
        let rank: u8 = btoi::btou(rank).map_err(|_| ParseSquareError)?;
        if !(1..=BOARD_SIZE as u8).contains(&rank) {
            return Err(ParseSquareError);
        }
        Ok(Square::new(
            u32::from(rank - 1) * BOARD_SIZE + u32::from(file - b'a'),
        ))
    }

    #[inline]
    pub const fn row(self) -> u32 {
        self.0 as u32 / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> u32 {
        self.0 as u32 % BOARD_SIZE
    }

    /// Index of the square, `row * 8 + column`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn coord(self) -> Coord {
        Coord {
            row: self.row() as i8,
            col: self.col() as i8,
        }
    }

    /// Translates the square by `delta`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, delta: Delta) -> Option<Square> {
        (self.coord() + delta).square()
    }

    /// Delta leading from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> Delta {
        Delta::new(
            other.row() as i8 - self.row() as i8,
            other.col() as i8 - self.col() as i8,
        )
    }

    /// Intrinsic color of the square: dark (`Black`) when row and column
    /// sum to an even number.
    #[inline]
    pub const fn color(self) -> Color {
        Color::from_white((self.row() + self.col()) % 2 == 1)
    }

    /// All 64 squares, in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square::new)
    }
}

impl BitIndex for Square {
    #[inline]
    fn bit(self) -> u32 {
        u32::from(self.0)
    }

    #[inline]
    fn from_bit(bit: u32) -> Square {
        Square::new(bit)
    }
}

bitset! {
    /// A set of squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightline::{Square, SquareSet};
    ///
    /// let set: SquareSet = [Square::E4, Square::A1].into_iter().collect();
    /// assert!(set.contains(Square::E4));
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), [Square::A1, Square::E4]);
    /// ```
    SquareSet, SquareSetIter, Square
}

macro_rules! square_consts {
    ($($name:ident = $index:expr,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl From<Square> for u32 {
    #[inline]
    fn from(sq: Square) -> u32 {
        u32::from(sq.0)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col() as u8), self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.col() as u8), self.row() + 1)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square::new(u.int_in_range(0..=63)?))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

/// A position that may lie outside the board.
///
/// Hypothetical destinations are produced as coordinates and only become a
/// [`Square`] once they pass the board bounds check.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Coord {
        Coord { row, col }
    }

    /// The square at these coordinates, if they are within bounds.
    #[inline]
    pub const fn square(self) -> Option<Square> {
        Square::from_coords(self.row as i32, self.col as i32)
    }
}

impl From<Square> for Coord {
    #[inline]
    fn from(sq: Square) -> Coord {
        sq.coord()
    }
}

impl ops::Add<Delta> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, delta: Delta) -> Coord {
        Coord {
            row: self.row.saturating_add(delta.row),
            col: self.col.saturating_add(delta.col),
        }
    }
}

/// A change of row and column.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Delta {
    pub row: i8,
    pub col: i8,
}

impl Delta {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Delta {
        Delta { row, col }
    }

    /// Unit step in the direction of the delta, such as `(1, -1)` for
    /// `(3, -3)`.
    #[inline]
    pub const fn signum(self) -> Delta {
        Delta {
            row: self.row.signum(),
            col: self.col.signum(),
        }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.row == 0 && self.col == 0
    }
}

impl ops::Mul<i8> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, factor: i8) -> Delta {
        Delta::new(self.row * factor, self.col * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_square() {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::from_coords(row, col).expect("in bounds");
                assert_eq!(sq.row(), row as u32);
                assert_eq!(sq.col(), col as u32);
            }
        }
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, -1), None);
    }

    #[test]
    fn test_parse_square() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
        assert_eq!("i1".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("a0".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("a9".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("a10".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("".parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn test_display() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn test_square_color() {
        assert_eq!(Square::A1.color(), Color::Black);
        assert_eq!(Square::H1.color(), Color::White);
        assert_eq!(Square::D1.color(), Color::White);
        assert_eq!(Square::E1.color(), Color::Black);
        assert_eq!(Square::H8.color(), Color::Black);
    }

    #[test]
    fn test_square_set() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.add(Square::H8);
        set.add(Square::A1);
        assert_eq!(set.count(), 2);
        assert_eq!(set.first(), Some(Square::A1));
        assert_eq!(set.into_iter().len(), 2);
        let without = set.without(Square::A1);
        assert_eq!(without.single(), Some(Square::H8));
        assert_eq!((set - without).single(), Some(Square::A1));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::E2.offset(Delta::new(2, 0)), Some(Square::E4));
        assert_eq!(Square::B1.offset(Delta::new(2, -1)), Some(Square::A3));
        assert_eq!(Square::A1.offset(Delta::new(-1, 0)), None);
        assert_eq!(Square::H4.offset(Delta::new(0, 1)), None);
        assert_eq!(Square::C3.delta_to(Square::F6), Delta::new(3, 3));
        assert_eq!(Delta::new(-5, 5).signum(), Delta::new(-1, 1));
    }
}
