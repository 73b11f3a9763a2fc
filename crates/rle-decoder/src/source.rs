use std::io::{BufRead, ErrorKind};

use crate::error::DecodeError;

/// Forward-only byte reader with a single byte of pushback.
///
/// The RLE grammar needs exactly one byte of lookahead: the preamble
/// and header phases peek at the first byte of a line and hand it on
/// to the next phase when it is not theirs. Rather than leaning on a
/// native unget facility, the pushed-back byte lives in an explicit
/// one-slot buffer.
///
/// ```text
///   next_byte() ──► peeked? ──yes──► take it
///                      │
///                      no
///                      ▼
///               reader.fill_buf() ──empty──► None (end of input)
/// ```
///
/// `position()` counts bytes handed out by `next_byte` minus bytes
/// pushed back, so it always names the offset of the next byte that
/// will be returned.
pub struct ByteSource<R> {
    reader: R,
    peeked: Option<u8>,
    position: u64,
}

impl<R: BufRead> ByteSource<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            position: 0,
        }
    }

    /// Read the next byte, or `None` at end of input.
    ///
    /// Reads interrupted by a signal are retried.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Read`] if the underlying reader fails.
    pub fn next_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        if let Some(byte) = self.peeked.take() {
            self.position += 1;
            return Ok(Some(byte));
        }

        loop {
            match self.reader.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    self.reader.consume(1);
                    self.position += 1;
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(DecodeError::Read {
                        offset: self.position,
                        source,
                    });
                }
            }
        }
    }

    /// Un-consume `byte` so the next call to [`next_byte`](Self::next_byte)
    /// returns it again.
    ///
    /// Only one byte may be pending at a time; the caller must read it
    /// back before pushing another.
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(self.peeked.is_none(), "pushback slot already occupied");
        self.peeked = Some(byte);
        self.position -= 1;
    }

    /// Offset of the next byte that [`next_byte`](Self::next_byte) will return.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Consume bytes up to and including the next `\n`.
    ///
    /// Returns the consumed line without its newline, and whether the
    /// newline was actually found (`false` means end of input came first).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Read`] if the underlying reader fails.
    pub fn read_line(&mut self) -> Result<(Vec<u8>, bool), DecodeError> {
        let mut line = Vec::new();
        while let Some(byte) = self.next_byte()? {
            if byte == b'\n' {
                return Ok((line, true));
            }
            line.push(byte);
        }
        Ok((line, false))
    }

    /// Release the underlying reader. Any pushed-back byte is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
