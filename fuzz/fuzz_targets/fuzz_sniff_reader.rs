#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

/// Fuzz the two-stage sniffer.
///
/// Exercises the JSON probe and the line-scanning fallback, and checks
/// the stream-rewind postcondition on every input.
fuzz_target!(|data: &[u8]| {
    let mut stream = Cursor::new(data);
    let _ = sbom_sniff::sniff_reader(&mut stream);
    assert_eq!(stream.position(), 0);
});
