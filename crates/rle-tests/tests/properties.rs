//! Property tests over arbitrary inputs.
//!
//! Inputs are capped with `max_run` so a random digit string cannot ask
//! for gigabytes of output; a capped input is discarded, not failed.

use std::io::BufReader;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rle_decoder::{DecodeError, DecoderConfig, RleDecoder};
use rle_tests::encode_rows;

const SEPARATORS: [u8; 3] = [b' ', b'\t', b'\n'];
const TAGS: [u8; 6] = [b'b', b'o', b'$', b'A', b'.', b'C'];

fn capped() -> RleDecoder {
    RleDecoder::with_config(DecoderConfig {
        max_run: Some(10_000),
        ..DecoderConfig::default()
    })
}

#[quickcheck]
fn output_is_empty_or_newline_terminated(input: Vec<u8>) -> TestResult {
    match capped().decode_bytes(&input) {
        Ok(out) => TestResult::from_bool(out.is_empty() || out.ends_with(b"\n")),
        Err(DecodeError::RunTooLong { .. }) => TestResult::discard(),
        Err(e) => TestResult::error(e.to_string()),
    }
}

#[quickcheck]
fn decoding_is_deterministic(input: Vec<u8>) -> TestResult {
    let decoder = capped();
    match (decoder.decode_bytes(&input), decoder.decode_bytes(&input)) {
        (Ok(a), Ok(b)) => TestResult::from_bool(a == b),
        _ => TestResult::discard(),
    }
}

#[quickcheck]
fn read_buffer_size_does_not_matter(input: Vec<u8>, capacity: u8) -> TestResult {
    let decoder = capped();
    let Ok(expected) = decoder.decode_bytes(&input) else {
        return TestResult::discard();
    };
    let reader = BufReader::with_capacity(usize::from(capacity % 16) + 1, &input[..]);
    let mut out = Vec::new();
    match decoder.decode(reader, &mut out) {
        Ok(_) => TestResult::from_bool(out == expected),
        Err(e) => TestResult::error(e.to_string()),
    }
}

/// Runs are `(count, tag index, separator choice)` triples. The same runs
/// are rendered once compactly and once with separators sprinkled before
/// the count, between its digits, and before the tag.
#[quickcheck]
fn separators_between_tokens_are_ignored(runs: Vec<(u8, u8, u8)>) -> bool {
    let mut compact = Vec::new();
    let mut spaced = Vec::new();

    for &(count, tag, sep) in &runs {
        let tag = TAGS[usize::from(tag) % TAGS.len()];
        let sep = SEPARATORS[usize::from(sep) % SEPARATORS.len()];
        let digits = if count % 4 == 0 {
            String::new()
        } else {
            (count % 50).to_string()
        };

        compact.extend_from_slice(digits.as_bytes());
        compact.push(tag);

        spaced.push(sep);
        for d in digits.bytes() {
            spaced.push(d);
            spaced.push(sep);
        }
        spaced.push(tag);
    }
    compact.push(b'!');
    spaced.extend_from_slice(b" \n!");

    let decoder = RleDecoder::new();
    decoder.decode_bytes(&compact).unwrap() == decoder.decode_bytes(&spaced).unwrap()
}

#[quickcheck]
fn encoded_rows_decode_back(grid: Vec<Vec<bool>>) -> bool {
    let rows: Vec<String> = grid
        .iter()
        .map(|row| row.iter().map(|&live| if live { 'o' } else { '.' }).collect())
        .collect();

    let mut expected = rows.join("\n");
    if !expected.is_empty() && !expected.ends_with('\n') {
        expected.push('\n');
    }

    let decoded = RleDecoder::new()
        .decode_bytes(encode_rows(&rows).as_bytes())
        .unwrap();
    decoded == expected.into_bytes()
}

#[quickcheck]
fn measure_agrees_with_decode(input: Vec<u8>) -> TestResult {
    let decoder = capped();
    let Ok(decoded) = decoder.decode(&input[..], std::io::sink()) else {
        return TestResult::discard();
    };
    match decoder.measure(&input[..]) {
        Ok(measured) => TestResult::from_bool(measured == decoded),
        Err(e) => TestResult::error(e.to_string()),
    }
}
