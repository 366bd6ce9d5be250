#![no_main]

use libfuzzer_sys::fuzz_target;
use sightline::Session;

fuzz_target!(|choices: Vec<u8>| {
    let mut session = Session::new();

    for choice in choices {
        let moves = session.position().legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[usize::from(choice) % moves.len()];
        session.play(m.from(), m.to()).expect("legal move");

        let pos = session.position();
        assert!(pos.board().is_consistent());
        assert!(pos.lines().is_consistent_with(pos.board()));
        for (id, _, _) in pos.board().pieces() {
            assert_eq!(session.legal_moves(id), &pos.compute_legal_moves(id));
        }
    }
});
