#![no_main]
use kleene_automaton::validate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Validation must reject arbitrary input with an error, never a panic.
    // Lossy conversion keeps coverage of inputs that are "almost" text.
    let s = String::from_utf8_lossy(data);
    let _ = validate(&s);
});
