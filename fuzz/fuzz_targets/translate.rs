#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sanbridge::{Color, Session};

#[derive(Arbitrary, Debug)]
struct Data {
    color: Color,
    history: Vec<String>,
    input: String,
}

fuzz_target!(|data: Data| {
    let mut session = Session::new(data.color);
    if session.reconcile(&data.history).is_err() {
        assert!(session.history().is_empty());
        return;
    }
    assert!(session.user_pieces().is_consistent_with(session.board()));

    if let Ok(uci) = session.translate(&data.input) {
        let mut history = data.history;
        history.push(uci.to_string());
        let _ = session.reconcile(&history);
        assert!(session.user_pieces().is_consistent_with(session.board()));
    }
});
