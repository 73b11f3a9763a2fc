#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rle_decoder::{DecoderConfig, RleDecoder};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    dead_cell: u8,
    live_cell: u8,
    max_run: u16,
    ignore_carriage_return: bool,
    data: &'a [u8],
}

// Fuzz target: decoding under arbitrary configurations.
fuzz_target!(|input: Input<'_>| {
    let decoder = RleDecoder::with_config(DecoderConfig {
        dead_cell: input.dead_cell,
        live_cell: input.live_cell,
        max_run: Some(u64::from(input.max_run)),
        ignore_carriage_return: input.ignore_carriage_return,
    });
    let _ = decoder.decode_bytes(input.data);
});
