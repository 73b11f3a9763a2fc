#![no_main]

use libfuzzer_sys::fuzz_target;
use rle_decoder::{DecodeError, DecoderConfig, RleDecoder};

// Fuzz target: full decode of arbitrary bytes.
//
// The run length is capped so a long digit string cannot demand
// unbounded output. Beyond that cap the decoder must never fail, and a
// non-empty output must end in a newline.
fuzz_target!(|data: &[u8]| {
    let decoder = RleDecoder::with_config(DecoderConfig {
        max_run: Some(1 << 16),
        ..DecoderConfig::default()
    });
    match decoder.decode_bytes(data) {
        Ok(out) => assert!(out.is_empty() || out.ends_with(b"\n")),
        Err(DecodeError::RunTooLong { .. }) => {}
        Err(e) => panic!("unexpected error on in-memory input: {e}"),
    }
});
