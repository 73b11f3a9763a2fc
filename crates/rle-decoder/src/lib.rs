#![warn(clippy::pedantic)]

//! Decoder for the run-length encoded (RLE) pattern format used by
//! Conway's Life and related cellular automata.
//!
//! [`RleDecoder`] turns an RLE stream into plain text, one grid row per
//! line, with `.` for dead cells and `o` for live ones.
//! [`StreamingDecoder`] exposes the same parse as a sequence of
//! [`DecoderEvent`]s for callers that want the runs themselves.

pub mod config;
pub mod decoder;
pub mod error;
pub mod run;
pub mod source;
pub mod streaming;

pub use config::DecoderConfig;
pub use decoder::{DecodeStats, RleDecoder, decode};
pub use error::DecodeError;
pub use run::{Run, Tag, Terminator};
pub use streaming::{DecoderEvent, StreamingDecoder};
