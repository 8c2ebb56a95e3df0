#![no_main]

use libfuzzer_sys::fuzz_target;
use sanbridge::shorthand::Shorthand;

fuzz_target!(|data: &[u8]| {
    let Ok(shorthand) = Shorthand::from_ascii(data) else {
        return;
    };
    let roundtripped = Shorthand::from_ascii(shorthand.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(shorthand, roundtripped);
});
