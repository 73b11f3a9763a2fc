use std::io::{BufRead, Write};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::run::Terminator;
use crate::streaming::{DecoderEvent, StreamingDecoder};

/// Size of the repeated-byte buffer runs are written from.
const RUN_CHUNK: usize = 4096;

/// What a completed decode saw and produced.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────┐
/// │ Field            │ Meaning                                      │
/// ├──────────────────┼──────────────────────────────────────────────┤
/// │ comments         │ `#` lines from the preamble, in order        │
/// │ header           │ the skipped `x = ...` line, if there was one │
/// │ runs             │ runs expanded (count-only tails excluded)    │
/// │ bytes_written    │ total output bytes, flush newline included   │
/// │ lines            │ `\n` bytes written                           │
/// │ terminator       │ `!` or end of input                          │
/// │ flushed_newline  │ whether a final `\n` had to be synthesized   │
/// └──────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeStats {
    pub comments: Vec<String>,
    pub header: Option<String>,
    pub runs: u64,
    pub bytes_written: u64,
    pub lines: u64,
    pub terminator: Terminator,
    pub flushed_newline: bool,
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            header: None,
            runs: 0,
            bytes_written: 0,
            lines: 0,
            terminator: Terminator::EndOfInput,
            flushed_newline: false,
        }
    }
}

/// Synchronous RLE-to-text decoder.
///
/// Reads an RLE pattern from any [`BufRead`] and writes the expanded
/// character grid to any [`Write`], one row per line:
///
/// ```text
///   #N Glider                .o.
///   x = 3, y = 3      ──►    ..o
///   bo$2bo$3o!               ooo
/// ```
///
/// Decoding proceeds in three phases that never overlap:
///
///   1. **Preamble**: blank lines and `#` comment lines are skipped.
///   2. **Header**: one optional `x = ...` line is skipped unparsed.
///   3. **Runs**: each `[count]tag` run is expanded until `!` or end of
///      input. If the last byte written was not a newline, one is added.
///
/// The decoder has no opinion on malformed input. Unknown tags pass
/// through, a count of zero means one, and a count with no tag before
/// the terminator is dropped. The only errors are I/O failures and,
/// when configured, an over-long run.
///
/// The decoder holds nothing but its configuration, so one instance
/// can serve any number of independent decodes, from any thread.
///
/// # Example
///
/// ```rust
/// use rle_decoder::RleDecoder;
///
/// let out = RleDecoder::new()
///     .decode_bytes(b"#C glider\nx = 3, y = 3\nbo$2bo$3o!")
///     .unwrap();
/// assert_eq!(out, b".o\n..o\nooo\n");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RleDecoder {
    config: DecoderConfig,
}

impl RleDecoder {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `input` into `output`.
    ///
    /// Consumes input up to and including the terminator; anything after
    /// a `!` is left unread. The output is not flushed: a caller writing
    /// through a `BufWriter` must flush it to observe late write errors.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Read`] if the input stream fails.
    /// - [`DecodeError::Write`] if the output stream rejects a write.
    /// - [`DecodeError::RunTooLong`] if `max_run` is set and exceeded.
    ///   Output written before the offending run is left in place.
    pub fn decode<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<DecodeStats, DecodeError> {
        let mut emitter = RunEmitter::new();
        let stats = self.drive(input, |byte, count| emitter.emit(&mut output, byte, count))?;
        tracing::debug!(
            runs = stats.runs,
            bytes = stats.bytes_written,
            lines = stats.lines,
            terminator = ?stats.terminator,
            "decode finished"
        );
        Ok(stats)
    }

    /// Collect the [`DecodeStats`] that [`decode`](Self::decode) would
    /// report, without expanding any run.
    ///
    /// Runs only add to counters, so a count of `u64::MAX` costs the same
    /// as a count of one. Byte and line totals saturate at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Read`] if the input stream fails.
    /// - [`DecodeError::RunTooLong`] if `max_run` is set and exceeded.
    pub fn measure<R: BufRead>(&self, input: R) -> Result<DecodeStats, DecodeError> {
        self.drive(input, |_, _| Ok(()))
    }

    /// Decode an in-memory pattern into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// Only [`DecodeError::RunTooLong`], and only when `max_run` is set.
    ///
    /// # Aborts
    ///
    /// The whole expansion is held in memory. Without `max_run`, a single
    /// run such as `99999999999999999999o` grows the buffer until the
    /// allocator gives up and the process aborts. Set `max_run` for
    /// untrusted input, or stream into a file with [`decode`](Self::decode).
    pub fn decode_bytes(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(input.len() * 2);
        self.decode(input, &mut out)?;
        Ok(out)
    }

    /// Walk the event stream, hand every run and the flush newline to
    /// `emit`, and tally the stats.
    fn drive<R, F>(&self, input: R, mut emit: F) -> Result<DecodeStats, DecodeError>
    where
        R: BufRead,
        F: FnMut(u8, u64) -> Result<(), DecodeError>,
    {
        let mut stream = StreamingDecoder::with_config(input, self.config);
        let mut stats = DecodeStats::default();
        // Starts as `\n` so an empty output never gets a flush newline.
        let mut last_written = b'\n';

        while let Some(event) = stream.next_event()? {
            match event {
                DecoderEvent::Comment(text) => stats.comments.push(text),
                DecoderEvent::Header(text) => stats.header = Some(text),
                DecoderEvent::Run(run) => {
                    let byte = run.tag.output_byte(&self.config);
                    emit(byte, run.count)?;
                    stats.record(byte, run.count);
                    stats.runs += 1;
                    last_written = byte;
                }
                DecoderEvent::End(terminator) => {
                    stats.terminator = terminator;
                    if last_written != b'\n' {
                        emit(b'\n', 1)?;
                        stats.record(b'\n', 1);
                        stats.flushed_newline = true;
                    }
                }
            }
        }

        Ok(stats)
    }
}

impl DecodeStats {
    fn record(&mut self, byte: u8, count: u64) {
        self.bytes_written = self.bytes_written.saturating_add(count);
        if byte == b'\n' {
            self.lines = self.lines.saturating_add(count);
        }
    }
}

/// Decode with the default configuration.
///
/// Shorthand for `RleDecoder::new().decode(input, output)`.
///
/// # Errors
///
/// See [`RleDecoder::decode`].
pub fn decode<R: BufRead, W: Write>(input: R, output: W) -> Result<DecodeStats, DecodeError> {
    RleDecoder::new().decode(input, output)
}

/// Writes runs from a reusable chunk of repeated bytes.
struct RunEmitter {
    chunk: [u8; RUN_CHUNK],
    /// Byte currently replicated across `chunk[..filled_len]`, if any.
    filled_with: Option<u8>,
    filled_len: usize,
}

impl RunEmitter {
    fn new() -> Self {
        Self {
            chunk: [0; RUN_CHUNK],
            filled_with: None,
            filled_len: 0,
        }
    }

    fn emit<W: Write>(&mut self, output: &mut W, byte: u8, count: u64) -> Result<(), DecodeError> {
        #[allow(clippy::cast_possible_truncation)]
        let needed = count.min(RUN_CHUNK as u64) as usize;
        if self.filled_with != Some(byte) {
            self.filled_with = Some(byte);
            self.filled_len = 0;
        }
        if self.filled_len < needed {
            self.chunk[self.filled_len..needed].fill(byte);
            self.filled_len = needed;
        }

        let mut remaining = count;
        while remaining > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let n = remaining.min(RUN_CHUNK as u64) as usize;
            output
                .write_all(&self.chunk[..n])
                .map_err(DecodeError::Write)?;
            remaining -= n as u64;
        }
        Ok(())
    }
}
