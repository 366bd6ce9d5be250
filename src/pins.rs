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

//! Pin detection on the line between a moving piece and its king.

use log::trace;

use crate::{
    board::Board, line::Line, line_index::LineIndex, m::Move, square::Square, types::PieceId,
};

/// Tests if moving the piece of `m` off its square uncovers an enemy
/// slider aimed at its own king.
///
/// Only the line through the mover and the king is considered, using the
/// bucket of that line in `lines` to find what stands between them and
/// what stands beyond the mover.
pub(crate) fn reveals_check(board: &Board, lines: &LineIndex, m: &Move) -> bool {
    let Some(king_sq) = board
        .king_of(m.color())
        .and_then(|king| board.square_of(king))
    else {
        return false;
    };

    // The king itself, knight jumps and unrelated squares have no line.
    let Some(line) = Line::shared(m.from(), king_sq) else {
        return false;
    };

    // Moving along the line keeps it covered.
    if m.line() == Some(line) {
        return false;
    }

    let bucket = lines.bucket(line, king_sq);
    let king_ord = line.ordinal(king_sq);
    let mover_ord = line.ordinal(m.from());

    let mut beyond: Option<(u32, PieceId, Square)> = None;
    for id in bucket.without(m.id()) {
        let Some(sq) = board.square_of(id) else {
            continue;
        };
        let ord = line.ordinal(sq);
        if is_strictly_between(ord, king_ord, mover_ord) {
            return false;
        }
        if is_strictly_between(mover_ord, king_ord, ord) {
            let distance = ord.abs_diff(mover_ord);
            if beyond.map_or(true, |(nearest, _, _)| distance < nearest) {
                beyond = Some((distance, id, sq));
            }
        }
    }

    let Some((_, attacker, attacker_sq)) = beyond else {
        return false;
    };
    let piece = board.piece(attacker);
    if piece.color == m.color() || !piece.role.pins_along(line) {
        return false;
    }

    trace!("{m} reveals check: {piece} on {attacker_sq} pins along {line:?}");
    true
}

fn is_strictly_between(x: u32, a: u32, b: u32) -> bool {
    (a < x && x < b) || (b < x && x < a)
}
