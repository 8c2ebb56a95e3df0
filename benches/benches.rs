use iai::black_box;
use sanbridge::{shorthand::Shorthand, Color, Session, Uci};

const GAME: [&str; 16] = [
    "e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6", "e1g1", "f8e7", "f1e1", "b7b5",
    "a4b3", "d7d6", "c2c3", "e8g8",
];

fn bench_parse_shorthand() -> Shorthand {
    black_box("Nbxd7+").parse().expect("valid shorthand")
}

fn bench_replay_game() -> Session {
    let mut session = Session::new(Color::White);
    session.reconcile(black_box(&GAME)).expect("consistent history");
    session
}

fn bench_reconcile_move_by_move() -> Session {
    let mut session = Session::new(Color::Black);
    for n in 1..=GAME.len() {
        session
            .reconcile(black_box(&GAME[..n]))
            .expect("one more move");
    }
    session
}

fn bench_translate_piece() -> Uci {
    let mut session = Session::new(Color::White);
    session.reconcile(&GAME).expect("consistent history");
    black_box(&session).translate(black_box("Nbd2")).expect("unique knight")
}

fn bench_translate_line_of_sight() -> Uci {
    let mut session = Session::new(Color::White);
    session.reconcile(&GAME).expect("consistent history");
    black_box(&session).translate(black_box("Rf1")).expect("unique rook")
}

iai::main!(
    bench_parse_shorthand,
    bench_replay_game,
    bench_reconcile_move_by_move,
    bench_translate_piece,
    bench_translate_line_of_sight,
);
