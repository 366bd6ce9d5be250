use iai::black_box;
use sightline::{perft, Position, Session, Setup, Square};

const MIDDLEGAME: &str = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b";

fn middlegame() -> Position {
    let setup: Setup = MIDDLEGAME.parse().expect("valid setup");
    Position::from_setup(&setup).expect("legal position")
}

fn bench_shallow_perft() {
    let pos = Position::new();
    assert_eq!(black_box(perft(black_box(&pos), 3)), 8_902);
}

fn bench_deep_perft() {
    let pos = Position::new();
    assert_eq!(perft(black_box(&pos), 4), 197_281);
}

fn bench_generate_moves() {
    let pos = middlegame();
    assert_eq!(black_box(&pos).legal_moves().len(), 39);
}

fn bench_threatened_squares() -> usize {
    let pos = middlegame();
    let bishop = pos.board().occupant(Square::B7).expect("bishop on b7");
    black_box(&pos).compute_threatened_squares(bishop).count()
}

fn bench_execute_move() -> Position {
    let mut pos = middlegame();
    let knight = pos.board().occupant(Square::D5).expect("knight on d5");
    let m = pos
        .create_move(knight, Square::C3.coord())
        .expect("on the board");
    pos.execute_move(black_box(&m));
    pos
}

fn bench_session_play() -> Session {
    let mut session = Session::new();
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::G1, Square::F3),
        (Square::B8, Square::C6),
        (Square::F1, Square::B5),
        (Square::A7, Square::A6),
        (Square::B5, Square::C6),
        (Square::D7, Square::C6),
    ] {
        session.play(black_box(from), black_box(to)).expect("legal move");
    }
    session
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_generate_moves,
    bench_threatened_squares,
    bench_execute_move,
    bench_session_play,
);
