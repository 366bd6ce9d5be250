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
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    color::Color,
    role::Role,
    square::{Square, BOARD_SIZE},
    types::Piece,
};

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Error when parsing an invalid setup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseSetupError {
    /// The placement of pieces is malformed.
    InvalidBoard,
    /// The side to move is neither `w` nor `b`.
    InvalidTurn,
}

impl fmt::Display for ParseSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseSetupError::InvalidBoard => "invalid board part in setup",
            ParseSetupError::InvalidTurn => "invalid turn part in setup",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSetupError {}

/// A placement of pieces and the side to move, not necessarily one the
/// engine can play from.
///
/// Parsed from and rendered as the board part of a FEN, optionally
/// followed by the side to move.
///
/// # Examples
///
/// ```
/// use sightline::{Color, Setup, Square};
///
/// let setup: Setup = "4k3/8/8/8/8/8/4R3/4K3 b".parse()?;
/// assert_eq!(setup.piece_at(Square::E2), Some(Color::White.rook()));
/// assert_eq!(setup.turn, Color::Black);
/// assert_eq!(setup.to_string(), "4k3/8/8/8/8/8/4R3/4K3 b");
/// # Ok::<_, sightline::ParseSetupError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Setup {
    pieces: [Option<Piece>; 64],
    /// Side to move.
    pub turn: Color,
}

impl Setup {
    /// No pieces, White to move.
    pub const fn empty() -> Setup {
        Setup {
            pieces: [None; 64],
            turn: Color::White,
        }
    }

    /// The standard starting position.
    pub fn standard() -> Setup {
        let mut setup = Setup::empty();
        for color in Color::ALL {
            let back = color.fold(0, BOARD_SIZE - 1);
            for (col, role) in (0..).zip(BACK_RANK) {
                setup.put(Square::new(back * BOARD_SIZE + col), role.of(color));
                setup.put(
                    Square::new(color.pawn_row() * BOARD_SIZE + col),
                    color.pawn(),
                );
            }
        }
        setup
    }

    /// Puts `piece` on `sq`, replacing any piece that was there.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.pieces[sq.index()] = Some(piece);
    }

    /// Removes the piece on `sq`, if any.
    pub fn discard(&mut self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()].take()
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()]
    }

    /// Placed pieces in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Parses the board part of a FEN, optionally followed by a space and
    /// the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSetupError`] if the rows do not each describe exactly
    /// eight squares, or the side to move is not `w` or `b`.
    pub fn from_ascii(s: &[u8]) -> Result<Setup, ParseSetupError> {
        let mut parts = s.split(|&ch| ch == b' ');
        let board = parts.next().unwrap_or_default();

        let mut setup = Setup::empty();
        setup.parse_board(board)?;

        setup.turn = match parts.next() {
            None => Color::White,
            Some(b"w") => Color::White,
            Some(b"b") => Color::Black,
            Some(_) => return Err(ParseSetupError::InvalidTurn),
        };

        if parts.next().is_some() {
            return Err(ParseSetupError::InvalidTurn);
        }

        Ok(setup)
    }

    fn parse_board(&mut self, board: &[u8]) -> Result<(), ParseSetupError> {
        if board.split(|&ch| ch == b'/').count() != BOARD_SIZE as usize {
            return Err(ParseSetupError::InvalidBoard);
        }

        for (row, text) in (0..BOARD_SIZE).rev().zip(board.split(|&ch| ch == b'/')) {
            let mut col = 0;
            for &ch in text {
                if (b'1'..=b'8').contains(&ch) {
                    col += u32::from(ch - b'0');
                } else {
                    let piece =
                        Piece::from_char(char::from(ch)).ok_or(ParseSetupError::InvalidBoard)?;
                    if col >= BOARD_SIZE {
                        return Err(ParseSetupError::InvalidBoard);
                    }
                    self.put(Square::new(row * BOARD_SIZE + col), piece);
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(ParseSetupError::InvalidBoard);
                }
            }
            if col != BOARD_SIZE {
                return Err(ParseSetupError::InvalidBoard);
            }
        }

        Ok(())
    }

    /// Writes the board part of a FEN.
    pub fn append_board_to<W: fmt::Write>(&self, f: &mut W) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(row * BOARD_SIZE + col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 0 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl Default for Setup {
    fn default() -> Setup {
        Setup::standard()
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Setup, ParseSetupError> {
        Setup::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_board_to(f)?;
        write!(f, " {}", self.turn.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_standard() {
        let setup = Setup::standard();
        assert_eq!(setup.pieces().count(), 32);
        assert_eq!(setup.piece_at(Square::D1), Some(Color::White.queen()));
        assert_eq!(setup.piece_at(Square::E8), Some(Color::Black.king()));
        assert_eq!(setup.piece_at(Square::G7), Some(Color::Black.pawn()));
        assert_eq!(setup.piece_at(Square::E4), None);
        assert_eq!(
            setup.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
    }

    #[test]
    fn test_parse() {
        let setup: Setup = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse().expect("valid");
        assert_eq!(setup, Setup::standard());

        let setup: Setup = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w".parse().expect("valid");
        assert_eq!(setup.piece_at(Square::A5), Some(Color::White.king()));
        assert_eq!(setup.piece_at(Square::H4), Some(Color::Black.king()));
        assert_eq!(setup.to_string(), "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w");
    }

    #[test]
    fn test_invalid() {
        for s in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "7/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/7x",
        ] {
            assert_eq!(s.parse::<Setup>(), Err(ParseSetupError::InvalidBoard), "{s}");
        }
        assert_eq!(
            "8/8/8/8/8/8/8/8 x".parse::<Setup>(),
            Err(ParseSetupError::InvalidTurn)
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8 w w".parse::<Setup>(),
            Err(ParseSetupError::InvalidTurn)
        );
    }
}
