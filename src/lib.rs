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

//! A chess rules engine built around lines of sight.
//!
//! Every piece on the board is indexed by the row, column and two
//! diagonals it stands on. Candidate moves are walked through a small
//! state machine of [scopes](Scope), from hypothetical to a terminal
//! step, capture or invalid classification, and the line index answers
//! pin and check questions without scanning the whole board.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use sightline::Position;
//!
//! let pos = Position::new();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Classify and execute moves:
//!
//! ```
//! use sightline::{Position, Scope, Square};
//!
//! let mut pos = Position::new();
//! let pawn = pos.board().occupant(Square::E2).expect("pawn on e2");
//!
//! // 1. e4
//! let m = pos.create_move(pawn, Square::E4.coord()).expect("on the board");
//! assert_eq!(m.scope(), Scope::Step);
//! pos.execute_move(&m);
//! assert_eq!(pos.board().occupant(Square::E4), Some(pawn));
//! ```
//!
//! Keep the legal moves of every piece up to date while playing:
//!
//! ```
//! use sightline::{CheckStatus, Session, Square};
//!
//! let mut session = Session::new();
//! session.play(Square::E2, Square::E4)?;
//! session.play(Square::F7, Square::F6)?;
//! session.play(Square::D1, Square::H5)?;
//! assert_eq!(session.check_status(), CheckStatus::BlackUnderCheck);
//! # Ok::<_, sightline::PlayError>(())
//! ```
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (e.g. the move history of a [`Session`]).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for fuzzing.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod util;
mod board;
mod check;
mod color;
mod line_index;
mod m;
mod perft;
mod pins;
mod position;
mod role;
mod scope;
mod session;
mod setup;
mod square;
mod types;
mod validate;

pub mod deltas;
pub mod line;

pub use board::Board;
pub use check::CheckStatus;
pub use color::{ByColor, Color, ParseColorError};
pub use deltas::Deltas;
pub use line::Line;
pub use line_index::LineIndex;
pub use m::{LegalMoves, Move, MoveList, PieceMoves};
pub use perft::perft;
pub use position::{Position, PositionError, PositionErrorKinds};
pub use role::Role;
pub use scope::{Scope, Scopes};
pub use session::{PlayError, Session};
pub use setup::{ParseSetupError, Setup};
pub use square::{Coord, Delta, ParseSquareError, Square, SquareSet, BOARD_SIZE};
pub use types::{Piece, PieceId, PieceSet};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
