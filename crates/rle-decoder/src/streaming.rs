use std::io::BufRead;

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::run::{Run, Terminator, push_digit};
use crate::source::ByteSource;

/// Events emitted by the streaming decoder.
///
/// Comments come first (one per `#` line in the preamble), then at
/// most one header, then the runs, and finally exactly one `End`:
///
/// ```text
///   Comment("N Glider")      ← zero or more
///   Header("x = 3, y = 3")   ← zero or one
///   Run(Run { 1, Dead })
///   Run(Run { 1, Live })
///   ...
///   End(Bang)                ← always last
/// ```
///
/// Comment and header text is decoded as lossy UTF-8 without the
/// trailing newline. The header is never parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecoderEvent {
    /// A `#` line from the preamble, without the leading `#`.
    Comment(String),

    /// The raw header line, starting with `x`.
    Header(String),

    /// A resolved run.
    Run(Run),

    /// The run data ended. No further events follow.
    End(Terminator),
}

/// Pull-based RLE tokenizer: yields [`DecoderEvent`]s one at a time.
///
/// Walks the three phases of the format as an explicit state machine
/// and never backtracks across phases:
///
/// ```text
///   Preamble ──► Header ──► Runs ──► Done
///      │                              ▲
///      └──── end of input ────────────┘
/// ```
///
/// This type only tokenizes; it never writes output. The final-newline
/// rule lives in [`RleDecoder`](crate::RleDecoder), which drives it.
///
/// # Example
///
/// ```rust
/// use rle_decoder::{DecoderEvent, StreamingDecoder, Tag};
///
/// let mut stream = StreamingDecoder::new(&b"#C tiny\n2o!"[..]);
/// let events: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(events[0], DecoderEvent::Comment("C tiny".into()));
/// assert!(matches!(events[1], DecoderEvent::Run(r) if r.count == 2 && r.tag == Tag::Live));
/// ```
pub struct StreamingDecoder<R> {
    source: ByteSource<R>,
    config: DecoderConfig,
    state: StreamState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    Preamble,
    Header,
    Runs,
    Done,
}

impl<R: BufRead> StreamingDecoder<R> {
    /// Create a streaming decoder with the default configuration.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            source: ByteSource::new(reader),
            config,
            state: StreamState::Preamble,
        }
    }

    /// Read the next event.
    ///
    /// Returns `Ok(None)` once the `End` event has been delivered.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Read`] if the underlying reader fails.
    /// - [`DecodeError::RunTooLong`] if `max_run` is configured and a
    ///   run exceeds it.
    pub fn next_event(&mut self) -> Result<Option<DecoderEvent>, DecodeError> {
        loop {
            let event = match self.state {
                StreamState::Preamble => self.step_preamble()?,
                StreamState::Header => self.step_header()?,
                StreamState::Runs => Some(self.step_run()?),
                StreamState::Done => return Ok(None),
            };
            if let Some(event) = event {
                if let DecoderEvent::End(_) = event {
                    self.state = StreamState::Done;
                }
                return Ok(Some(event));
            }
        }
    }

    /// Bytes of input consumed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Release the underlying reader.
    ///
    /// Bytes following a `!` terminator are still unread in it, except
    /// for a byte that was only peeked.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// One step of the preamble: a blank line, a comment line, or the
    /// hand-off to the header phase. Blank lines yield no event.
    fn step_preamble(&mut self) -> Result<Option<DecoderEvent>, DecodeError> {
        match self.source.next_byte()? {
            None => Ok(Some(DecoderEvent::End(Terminator::EndOfInput))),
            Some(b'\n') => Ok(None),
            Some(b'\r') if self.config.ignore_carriage_return => {
                match self.source.next_byte()? {
                    Some(b'\n') => Ok(None),
                    next => {
                        // A lone `\r` is whitespace here, so dropping it
                        // leaves the header phase with the same input.
                        if let Some(byte) = next {
                            self.source.unread(byte);
                        }
                        self.state = StreamState::Header;
                        Ok(None)
                    }
                }
            }
            Some(b'#') => {
                let (line, terminated) = self.source.read_line()?;
                if !terminated {
                    // Comment ran into end of input. The run phase will
                    // see EOF straight away and finish.
                    self.state = StreamState::Runs;
                }
                Ok(Some(DecoderEvent::Comment(self.line_text(&line))))
            }
            Some(other) => {
                self.source.unread(other);
                tracing::debug!(offset = self.source.position(), "preamble done");
                self.state = StreamState::Header;
                Ok(None)
            }
        }
    }

    /// Skip pre-header whitespace and swallow one `x ...` line if present.
    fn step_header(&mut self) -> Result<Option<DecoderEvent>, DecodeError> {
        self.state = StreamState::Runs;

        let Some(byte) = self.skip_separators()? else {
            return Ok(None);
        };

        if byte == b'x' {
            let (rest, _) = self.source.read_line()?;
            let mut line = Vec::with_capacity(rest.len() + 1);
            line.push(b'x');
            line.extend_from_slice(&rest);
            let text = self.line_text(&line);
            tracing::debug!(header = %text, "header skipped");
            Ok(Some(DecoderEvent::Header(text)))
        } else {
            self.source.unread(byte);
            tracing::debug!("no header line");
            Ok(None)
        }
    }

    /// Parse one run or the terminator.
    fn step_run(&mut self) -> Result<DecoderEvent, DecodeError> {
        let mut count: u64 = 0;
        loop {
            match self.skip_separators()? {
                Some(digit @ b'0'..=b'9') => count = push_digit(count, digit),
                Some(b'!') => return Ok(DecoderEvent::End(Terminator::Bang)),
                None => return Ok(DecoderEvent::End(Terminator::EndOfInput)),
                Some(tag) => {
                    let run = Run::resolve(count, tag);
                    if let Some(limit) = self.config.max_run {
                        if run.count > limit {
                            return Err(DecodeError::RunTooLong {
                                count: run.count,
                                limit,
                                offset: self.source.position() - 1,
                            });
                        }
                    }
                    tracing::trace!(count = run.count, tag = ?run.tag, "run");
                    return Ok(DecoderEvent::Run(run));
                }
            }
        }
    }

    /// Consume separator bytes and return the first non-separator, or
    /// `None` at end of input.
    fn skip_separators(&mut self) -> Result<Option<u8>, DecodeError> {
        while let Some(byte) = self.source.next_byte()? {
            if !self.config.is_separator(byte) {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    fn line_text(&self, line: &[u8]) -> String {
        let line = match line {
            [head @ .., b'\r'] if self.config.ignore_carriage_return => head,
            _ => line,
        };
        String::from_utf8_lossy(line).into_owned()
    }
}

impl<R: BufRead> Iterator for StreamingDecoder<R> {
    type Item = Result<DecoderEvent, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => None,
            Err(e) => {
                self.state = StreamState::Done;
                Some(Err(e))
            }
        }
    }
}
