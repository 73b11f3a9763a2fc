/// Implementation of `rle2txt decode`.
///
/// Opens the source for reading, creates the destination, streams the
/// pattern through [`RleDecoder`], then flushes. Buffered output means a
/// full disk may only surface at the flush, so the flush result is
/// checked exactly like a write error during decoding.
///
/// # Failure reporting
///
/// ```text
/// ┌──────────────────────────────┬──────────────────────────────────────┐
/// │ Situation                    │ Message                              │
/// ├──────────────────────────────┼──────────────────────────────────────┤
/// │ source missing / unreadable  │ cannot open <input>                  │
/// │ destination not creatable    │ cannot create <output>               │
/// │ read fails mid-stream        │ error reading <input>                │
/// │ write or flush fails         │ error writing to <output>            │
/// │ --max-run exceeded           │ failed to decode <input>             │
/// └──────────────────────────────┴──────────────────────────────────────┘
/// ```
///
/// The source is opened before the destination is created, so a typo in
/// the input path never truncates an existing output file.
use anyhow::{Context, Result};
use rle_decoder::{DecodeError, DecoderConfig, RleDecoder};

use crate::DecodeArgs;
use crate::io_util::{create_output, display_name, open_input};

/// Run the `rle2txt decode` command.
///
/// # Errors
///
/// Returns an error if either file cannot be opened, the input cannot be
/// read, the output cannot be written, or a run exceeds `--max-run`.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let input_name = display_name(&args.input, "<stdin>");
    let output_name = display_name(&args.output, "<stdout>");

    let input = open_input(&args.input)?;
    let mut output = create_output(&args.output)?;

    let config = DecoderConfig {
        dead_cell: args.dead,
        live_cell: args.live,
        max_run: args.max_run,
        ignore_carriage_return: args.crlf,
    };

    let decoder = RleDecoder::with_config(config);
    tracing::debug!(config = ?decoder.config(), input = %input_name, "decoding");

    let stats = decoder
        .decode(input, &mut output)
        .map_err(|e| match e {
            DecodeError::Write(_) => {
                anyhow::Error::new(e).context(format!("error writing to {output_name}"))
            }
            DecodeError::Read { .. } => {
                anyhow::Error::new(e).context(format!("error reading {input_name}"))
            }
            DecodeError::RunTooLong { .. } => {
                anyhow::Error::new(e).context(format!("failed to decode {input_name}"))
            }
        })?;

    output
        .flush()
        .with_context(|| format!("error writing to {output_name}"))?;

    tracing::info!(
        input = %input_name,
        output = %output_name,
        runs = stats.runs,
        bytes = stats.bytes_written,
        lines = stats.lines,
        "decoded"
    );

    Ok(())
}
