/// Errors that can occur while decoding an RLE pattern.
///
/// The decoder itself is permissive: a missing header, a comment cut
/// off by end of input, zero-count runs and unknown tag bytes are all
/// accepted silently. What remains are failures of the streams the
/// caller handed in, plus the optional run-length cap.
///
/// ```text
///   DecodeError
///   ├── Read { offset, source }        ← the input stream failed (not EOF)
///   ├── Write(io::Error)               ← the output stream rejected bytes
///   └── RunTooLong { count, limit, .. } ← only with DecoderConfig::max_run
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The underlying reader returned an error other than `Interrupted`.
    ///
    /// `offset` is the number of input bytes successfully consumed
    /// before the failure.
    #[error("read failed at input offset {offset}: {source}")]
    Read {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// The output sink rejected a write.
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// A run's repeat count exceeded the configured `max_run`.
    ///
    /// Never produced with the default configuration, which places no
    /// bound on run length.
    #[error("run of {count} exceeds limit {limit} (tag at input offset {offset})")]
    RunTooLong { count: u64, limit: u64, offset: u64 },
}

impl DecodeError {
    /// Returns `true` if the failure came from the output side.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}
