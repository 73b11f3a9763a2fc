use crate::config::DecoderConfig;

/// What a run expands to.
///
/// Only three tags carry meaning in two-state patterns. Every other
/// byte (multi-state letters, `.`, stray punctuation) is kept as
/// `Other` and rendered literally.
///
/// ```text
/// ┌─────────┬────────────┬──────────────────────────┐
/// │ Byte    │ Tag        │ Rendered as              │
/// ├─────────┼────────────┼──────────────────────────┤
/// │ `$`     │ Newline    │ `\n`                     │
/// │ `b`     │ Dead       │ config.dead_cell (`.`)   │
/// │ `o`     │ Live       │ config.live_cell (`o`)   │
/// │ other   │ Other(b)   │ b                        │
/// └─────────┴────────────┴──────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Newline,
    Dead,
    Live,
    Other(u8),
}

impl Tag {
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'$' => Self::Newline,
            b'b' => Self::Dead,
            b'o' => Self::Live,
            other => Self::Other(other),
        }
    }

    /// The byte this tag expands to in the decoded output.
    #[must_use]
    pub fn output_byte(self, config: &DecoderConfig) -> u8 {
        match self {
            Self::Newline => b'\n',
            Self::Dead => config.dead_cell,
            Self::Live => config.live_cell,
            Self::Other(b) => b,
        }
    }
}

/// A fully resolved run: the count has already been defaulted, so it
/// is never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub count: u64,
    pub tag: Tag,
}

impl Run {
    /// Resolve an accumulated count and a tag byte into a run.
    ///
    /// An accumulator of zero, whether no digits were seen or the digits
    /// spelled `0`, resolves to a count of one.
    #[must_use]
    pub fn resolve(accumulated: u64, tag: u8) -> Self {
        Self {
            count: accumulated.max(1),
            tag: Tag::from_byte(tag),
        }
    }
}

/// How the run data ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    /// An explicit `!`. Input after it is left unread.
    Bang,
    /// The input ran out, possibly inside the preamble or a comment.
    EndOfInput,
}

/// Fold one ASCII digit into a run-count accumulator.
///
/// Saturates at `u64::MAX` instead of overflowing.
#[must_use]
pub fn push_digit(accumulated: u64, digit: u8) -> u64 {
    debug_assert!(digit.is_ascii_digit());
    accumulated
        .saturating_mul(10)
        .saturating_add(u64::from(digit - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_classification() {
        assert_eq!(Tag::from_byte(b'$'), Tag::Newline);
        assert_eq!(Tag::from_byte(b'b'), Tag::Dead);
        assert_eq!(Tag::from_byte(b'o'), Tag::Live);
        assert_eq!(Tag::from_byte(b'A'), Tag::Other(b'A'));
        assert_eq!(Tag::from_byte(b'.'), Tag::Other(b'.'));
    }

    #[test]
    fn default_rendering() {
        let cfg = DecoderConfig::default();
        assert_eq!(Tag::Newline.output_byte(&cfg), b'\n');
        assert_eq!(Tag::Dead.output_byte(&cfg), b'.');
        assert_eq!(Tag::Live.output_byte(&cfg), b'o');
        assert_eq!(Tag::Other(b'C').output_byte(&cfg), b'C');
    }

    #[test]
    fn custom_glyphs() {
        let cfg = DecoderConfig {
            dead_cell: b'_',
            live_cell: b'#',
            ..DecoderConfig::default()
        };
        assert_eq!(Tag::Dead.output_byte(&cfg), b'_');
        assert_eq!(Tag::Live.output_byte(&cfg), b'#');
    }

    #[test]
    fn zero_count_resolves_to_one() {
        assert_eq!(Run::resolve(0, b'o').count, 1);
        assert_eq!(Run::resolve(7, b'o').count, 7);
    }

    #[test]
    fn digits_fold_base_ten() {
        let n = b"0123".iter().fold(0, |acc, &d| push_digit(acc, d));
        assert_eq!(n, 123);
    }

    #[test]
    fn digits_saturate() {
        let n = std::iter::repeat_n(b'9', 40).fold(0, push_digit);
        assert_eq!(n, u64::MAX);
    }
}
