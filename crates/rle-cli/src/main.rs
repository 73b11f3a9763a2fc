/// `rle2txt`: convert Life patterns from `.rle` to plain text.
///
/// # Command overview
///
/// ```text
/// rle2txt <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Expand an RLE file into a text grid
///   inspect    Print the comments, header and run statistics of an RLE file
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Raise log verbosity (repeat for more: -v info, -vv debug, -vvv trace)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Cannot open, create, read or write a file   |
/// | 2    | Usage error (reported by clap)              |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::io::{self, IsTerminal as _};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd_decode;
mod cmd_inspect;
mod io_util;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Convert Life patterns from RLE to plain text.
#[derive(Parser)]
#[command(name = "rle2txt", version, about = "RLE pattern to text converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Expand an RLE file into a text grid.
    Decode(DecodeArgs),
    /// Print the comments, header and run statistics of an RLE file.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `rle2txt decode`.
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                               │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ --dead C     │ Character for dead cells (default `.`)               │
/// │ --live C     │ Character for live cells (default `o`)               │
/// │ --max-run N  │ Fail on any run longer than N cells                  │
/// │ --crlf       │ Ignore carriage returns between tokens               │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// `-` may be given for either path to use stdin / stdout.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// RLE file to read.
    pub input: PathBuf,

    /// Text file to create (truncated if it exists).
    pub output: PathBuf,

    /// ASCII character to render dead cells with.
    #[arg(long, default_value = ".", value_parser = parse_glyph)]
    pub dead: u8,

    /// ASCII character to render live cells with.
    #[arg(long, default_value = "o", value_parser = parse_glyph)]
    pub live: u8,

    /// Reject runs whose repeat count exceeds this value.
    #[arg(long)]
    pub max_run: Option<u64>,

    /// Treat carriage returns as whitespace (files with CRLF line endings).
    #[arg(long)]
    pub crlf: bool,
}

/// Arguments for `rle2txt inspect`.
///
/// Counts runs without expanding them and prints what the decoder
/// skipped and counted, without producing the grid.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// RLE file to read (`-` for stdin).
    pub input: PathBuf,

    /// Treat carriage returns as whitespace (files with CRLF line endings).
    #[arg(long)]
    pub crlf: bool,
}

/// Accept exactly one printable ASCII character.
fn parse_glyph(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii_graphic() || *b == b' ' => Ok(*b),
        _ => Err(format!("expected a single printable ASCII character, got {s:?}")),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install a stderr `fmt` subscriber at the level picked by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn glyph_parser() {
        assert_eq!(parse_glyph("#"), Ok(b'#'));
        assert_eq!(parse_glyph(" "), Ok(b' '));
        assert!(parse_glyph("").is_err());
        assert!(parse_glyph("ab").is_err());
        assert!(parse_glyph("é").is_err());
        assert!(parse_glyph("\t").is_err());
    }

    #[test]
    fn decode_args_parse() {
        let cli = Cli::try_parse_from([
            "rle2txt", "-vv", "decode", "in.rle", "out.txt", "--dead", "_", "--max-run", "100",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(args.input, PathBuf::from("in.rle"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.dead, b'_');
        assert_eq!(args.live, b'o');
        assert_eq!(args.max_run, Some(100));
        assert!(!args.crlf);
    }

    #[test]
    fn decode_requires_two_paths() {
        assert!(Cli::try_parse_from(["rle2txt", "decode", "only.rle"]).is_err());
        assert!(Cli::try_parse_from(["rle2txt", "decode", "a", "b", "c"]).is_err());
    }
}
