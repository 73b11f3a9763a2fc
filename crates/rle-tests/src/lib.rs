//! Shared helpers for the integration tests and benches.

use std::path::Path;

use rle_decoder::RleDecoder;

/// Read a golden fixture from `tests/golden/<name>`.
///
/// # Panics
///
/// Panics if the fixture does not exist.
#[must_use]
pub fn golden(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Decode with the default configuration and return the text.
///
/// # Panics
///
/// Panics if decoding fails or the output is not UTF-8.
#[must_use]
pub fn decode_to_string(input: &[u8]) -> String {
    let out = RleDecoder::new()
        .decode_bytes(input)
        .unwrap_or_else(|e| panic!("decode failed: {e}"));
    String::from_utf8(out).expect("decoded output is not UTF-8")
}

/// Encode rows of `.`/`o` cells as RLE run data (no header, `!`-terminated).
///
/// Every row is encoded in full, trailing dead cells included, so the
/// decoded text reproduces the rows exactly. Any byte other than `.` is
/// written as a live cell.
#[must_use]
pub fn encode_rows<S: AsRef<str>>(rows: &[S]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('$');
        }
        let bytes = row.as_ref().as_bytes();
        let mut start = 0;
        while start < bytes.len() {
            let live = bytes[start] != b'.';
            let len = bytes[start..]
                .iter()
                .take_while(|&&b| (b != b'.') == live)
                .count();
            if len > 1 {
                out.push_str(&len.to_string());
            }
            out.push(if live { 'o' } else { 'b' });
            start += len;
        }
    }
    out.push('!');
    out
}

/// Deterministic pseudo-random pattern of `rows` × `cols` cells, returned
/// as a full RLE file (header included, lines wrapped at 70 columns).
#[must_use]
pub fn synthetic_pattern(rows: usize, cols: usize, seed: u64) -> String {
    let mut state = seed | 1;
    let grid: Vec<String> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    // xorshift64
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    if state % 3 == 0 { 'o' } else { '.' }
                })
                .collect()
        })
        .collect();

    let body = encode_rows(&grid);
    let mut out = format!("#N synthetic {rows}x{cols}\nx = {cols}, y = {rows}, rule = B3/S23\n");
    for chunk in body.as_bytes().chunks(70) {
        out.push_str(std::str::from_utf8(chunk).expect("RLE body is ASCII"));
        out.push('\n');
    }
    out
}
