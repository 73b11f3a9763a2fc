/// Implementation of `rle2txt inspect`.
///
/// Measures the pattern with [`RleDecoder::measure`], which counts runs
/// without expanding them, and prints what was seen along the way:
///
/// ```text
/// comment: N Glider
/// comment: C The smallest, most common spaceship
/// header:  x = 3, y = 3, rule = B3/S23
/// runs:    7
/// lines:   3
/// bytes:   11
/// end:     `!`
/// ```
///
/// `header:` reads `(none)` for header-less files, and `end:` reads
/// `end of input` when no `!` was found.
use std::io;

use anyhow::{Context, Result};
use rle_decoder::{DecodeStats, DecoderConfig, RleDecoder, Terminator};

use crate::InspectArgs;
use crate::io_util::{display_name, open_input};

/// Run the `rle2txt inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if stdout
/// cannot be written.
pub fn run(args: &InspectArgs) -> Result<()> {
    let input_name = display_name(&args.input, "<stdin>");
    let input = open_input(&args.input)?;

    let config = DecoderConfig {
        ignore_carriage_return: args.crlf,
        ..DecoderConfig::default()
    };
    let stats = RleDecoder::with_config(config)
        .measure(input)
        .with_context(|| format!("error reading {input_name}"))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &stats).context("cannot write to stdout")?;
    Ok(())
}

fn write_report(out: &mut impl io::Write, stats: &DecodeStats) -> io::Result<()> {
    for comment in &stats.comments {
        writeln!(out, "comment: {comment}")?;
    }
    writeln!(out, "header:  {}", stats.header.as_deref().unwrap_or("(none)"))?;
    writeln!(out, "runs:    {}", stats.runs)?;
    writeln!(out, "lines:   {}", stats.lines)?;
    writeln!(out, "bytes:   {}", stats.bytes_written)?;
    let end = match stats.terminator {
        Terminator::Bang => "`!`",
        Terminator::EndOfInput => "end of input",
    };
    writeln!(out, "end:     {end}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_glider() {
        let stats = RleDecoder::new()
            .measure(&b"#N Glider\nx = 3, y = 3\nbo$2bo$3o!"[..])
            .unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &stats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "comment: N Glider\n\
             header:  x = 3, y = 3\n\
             runs:    7\n\
             lines:   3\n\
             bytes:   11\n\
             end:     `!`\n"
        );
    }

    #[test]
    fn report_without_header() {
        let stats = RleDecoder::new().measure(&b"o"[..]).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("header:  (none)\n"));
        assert!(text.contains("end:     end of input\n"));
    }

    #[test]
    fn report_for_huge_run_is_immediate() {
        let stats = RleDecoder::new()
            .measure(&b"#N huge\nx = 1, y = 1\n99999999999999999999o!"[..])
            .unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("runs:    1\n"));
        assert!(text.contains(&format!("bytes:   {}\n", u64::MAX)));
        assert!(text.contains("lines:   1\n"));
    }
}
