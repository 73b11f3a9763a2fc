/// Configuration for [`RleDecoder`](crate::RleDecoder).
///
/// The defaults reproduce the classic `rle2txt` output byte for byte:
/// `b` renders as `.`, `o` as `o`, every other tag passes through, and
/// run lengths are unbounded.
///
/// ```text
/// ┌────────────────────────┬─────────┬───────────────────────────────────────┐
/// │ Field                  │ Default │ Effect                                │
/// ├────────────────────────┼─────────┼───────────────────────────────────────┤
/// │ dead_cell              │ b'.'    │ Byte emitted for `b` runs             │
/// │ live_cell              │ b'o'    │ Byte emitted for `o` runs             │
/// │ max_run                │ None    │ Reject runs longer than this          │
/// │ ignore_carriage_return │ false   │ Treat `\r` as separator whitespace    │
/// └────────────────────────┴─────────┴───────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Output byte for a dead cell (`b` tag).
    pub dead_cell: u8,

    /// Output byte for a live cell (`o` tag).
    pub live_cell: u8,

    /// Upper bound on a single run's repeat count. When `Some`, a longer
    /// run aborts the decode with
    /// [`DecodeError::RunTooLong`](crate::DecodeError::RunTooLong)
    /// before any of its bytes are written.
    pub max_run: Option<u64>,

    /// Skip `\r` between tokens the same way as space, tab and newline.
    /// Off by default, in which case a stray `\r` is an ordinary
    /// pass-through tag.
    pub ignore_carriage_return: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            dead_cell: b'.',
            live_cell: b'o',
            max_run: None,
            ignore_carriage_return: false,
        }
    }
}

impl DecoderConfig {
    /// Whether `byte` is inter-token separator noise under this config.
    #[must_use]
    pub fn is_separator(&self, byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | b'\n') || (self.ignore_carriage_return && byte == b'\r')
    }
}
