#![no_main]

use libfuzzer_sys::fuzz_target;
use sightline::{Position, Setup};

fuzz_target!(|data: &[u8]| {
    if let Ok(setup) = Setup::from_ascii(data) {
        let roundtripped = Setup::from_ascii(setup.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(setup, roundtripped);

        if let Ok(pos) = Position::from_setup(&setup) {
            assert!(pos.lines().is_consistent_with(pos.board()));
            assert_eq!(pos.to_setup(), setup);
        }
    }
});
