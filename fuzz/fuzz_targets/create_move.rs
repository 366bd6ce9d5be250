#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sightline::{Coord, Position, Square};

#[derive(Debug, Arbitrary)]
struct Data {
    from: Square,
    to: Coord,
}

fuzz_target!(|data: Data| {
    let pos = Position::new();
    let Some(id) = pos.board().occupant(data.from) else {
        return;
    };

    match pos.create_move(id, data.to) {
        None => assert_eq!(data.to.square(), None),
        Some(m) => {
            assert!(m.scope().is_terminal());
            assert!(m.trail().is_valid_trail());
            assert_eq!(
                m.is_playable(),
                pos.compute_legal_moves(id).find(m.to()).is_some()
            );
        }
    }
});
