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

//! Classification stages of a candidate move.
//!
//! A move starts out [`Scope::Hypothetical`] and advances through the
//! gates in order until it ends in one of the terminal scopes
//! [`Scope::Step`], [`Scope::Capture`] or [`Scope::Invalid`].
//!
//! ```text
//! Hypothetical -> BoardConstrained -> Unobstructed -> Legal -> Step
//!      |                |                  |            |  \-> Capture
//!      \----------------\------------------\------------\----> Invalid
//! ```

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// A set of [`Scope`]s.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Scopes: u8 {
        const HYPOTHETICAL = 1;
        const BOARD_CONSTRAINED = 2;
        const UNOBSTRUCTED = 4;
        const LEGAL = 8;
        const STEP = 16;
        const CAPTURE = 32;
        const INVALID = 64;

        /// Scopes that end classification.
        const TERMINAL = Self::STEP.bits() | Self::CAPTURE.bits() | Self::INVALID.bits();
        /// Scopes of moves that may be executed.
        const PLAYABLE = Self::STEP.bits() | Self::CAPTURE.bits();
    }
}

/// Classification stage of a move.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Scope {
    /// Geometrically possible for the piece, not yet checked against the
    /// board.
    Hypothetical,
    /// Destination is within the board.
    BoardConstrained,
    /// No piece stands strictly between origin and destination.
    Unobstructed,
    /// Destination is not friendly and the own king stays safe.
    Legal,
    Step,
    Capture,
    Invalid,
}

impl Scope {
    pub const ALL: [Scope; 7] = [
        Scope::Hypothetical,
        Scope::BoardConstrained,
        Scope::Unobstructed,
        Scope::Legal,
        Scope::Step,
        Scope::Capture,
        Scope::Invalid,
    ];

    pub const fn flag(self) -> Scopes {
        match self {
            Scope::Hypothetical => Scopes::HYPOTHETICAL,
            Scope::BoardConstrained => Scopes::BOARD_CONSTRAINED,
            Scope::Unobstructed => Scopes::UNOBSTRUCTED,
            Scope::Legal => Scopes::LEGAL,
            Scope::Step => Scopes::STEP,
            Scope::Capture => Scopes::CAPTURE,
            Scope::Invalid => Scopes::INVALID,
        }
    }

    /// The only scopes a move in this scope may advance to.
    ///
    /// # Examples
    ///
    /// ```
    /// use sightline::{Scope, Scopes};
    ///
    /// assert_eq!(
    ///     Scope::Legal.successors(),
    ///     Scopes::STEP | Scopes::CAPTURE | Scopes::INVALID
    /// );
    /// assert!(Scope::Invalid.successors().is_empty());
    /// ```
    pub const fn successors(self) -> Scopes {
        match self {
            Scope::Hypothetical => Scopes::BOARD_CONSTRAINED.union(Scopes::INVALID),
            Scope::BoardConstrained => Scopes::UNOBSTRUCTED.union(Scopes::INVALID),
            Scope::Unobstructed => Scopes::LEGAL.union(Scopes::INVALID),
            Scope::Legal => Scopes::TERMINAL,
            Scope::Step | Scope::Capture | Scope::Invalid => Scopes::empty(),
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        Scopes::TERMINAL.contains(self.flag())
    }

    #[inline]
    pub const fn is_playable(self) -> bool {
        Scopes::PLAYABLE.contains(self.flag())
    }

    #[inline]
    pub const fn can_advance_to(self, next: Scope) -> bool {
        self.successors().contains(next.flag())
    }

    /// Advances to `next`.
    ///
    /// # Panics
    ///
    /// Panics if `next` is not among the [successors](Scope::successors()).
    /// The validation pipeline never attempts such a transition.
    #[track_caller]
    pub fn advance(self, next: Scope) -> Scope {
        assert!(
            self.can_advance_to(next),
            "scope transition {self:?} -> {next:?} is not allowed"
        );
        next
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scope::Hypothetical => "hypothetical",
            Scope::BoardConstrained => "board-constrained",
            Scope::Unobstructed => "unobstructed",
            Scope::Legal => "legal",
            Scope::Step => "step",
            Scope::Capture => "capture",
            Scope::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Scopes {
    /// Tests if the scopes form a path that starts at
    /// [`Scope::Hypothetical`] and only uses allowed transitions.
    ///
    /// Because the scopes are totally ordered and every transition moves
    /// forward, a set of visited scopes determines the path.
    pub fn is_valid_trail(self) -> bool {
        let mut visited = Scope::ALL.into_iter().filter(|scope| self.contains(scope.flag()));
        let Some(mut current) = visited.next() else {
            return false;
        };
        if current != Scope::Hypothetical {
            return false;
        }
        for next in visited {
            if !current.can_advance_to(next) {
                return false;
            }
            current = next;
        }
        true
    }
}
