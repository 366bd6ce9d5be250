use std::{
    fs::File,
    io::{prelude::*, BufReader},
};

use sightline::{perft, Position, Setup};

fn test_perft_file(path: &str, node_limit: u64) {
    let file = File::open(path).expect("failed to open test suite");
    let reader = BufReader::new(file);

    let mut pos = Position::default();

    for line in reader.lines().map(|l| l.unwrap()) {
        println!("{}", line);

        let trimmed = line.trim();
        let mut slices = trimmed.splitn(2, ' ');

        match slices.next() {
            Some("epd") => {
                let setup: Setup = slices
                    .next()
                    .expect("missing epd")
                    .parse()
                    .expect("invalid setup");
                pos = Position::from_setup(&setup).expect("illegal setup");
            }
            Some("perft") => {
                let mut params = slices.next().expect("missing perft params").splitn(2, ' ');

                let depth = params
                    .next()
                    .expect("missing perft depth")
                    .parse()
                    .expect("depth not an integer");

                let nodes = params
                    .next()
                    .expect("missing perft nodes")
                    .parse()
                    .expect("nodes not an integer");

                if nodes <= node_limit {
                    assert_eq!(perft(&pos, depth), nodes);
                }
            }
            _ => {}
        }
    }
}

macro_rules! gen_tests {
    ($($fn_name:ident, $path:tt, $num:expr,)+) => {
        $(
            #[test]
            #[cfg_attr(miri, ignore)]
            fn $fn_name() {
                test_perft_file($path, $num);
            }
        )+
    }
}

gen_tests! {
    test_sightline, "tests/sightline.perft", 200_000,
}

#[test]
fn test_depth_zero() {
    assert_eq!(perft(&Position::new(), 0), 1);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let pos = Position::new();
    let before = pos.to_setup();
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(pos.to_setup(), before);
    assert!(pos.lines().is_consistent_with(pos.board()));
}
