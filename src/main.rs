use anyhow::{Context, Result};
use clap::Parser;
use rle_iter::{CompressedString, RunStats};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Decodes run-length encoded strings such as "L1e2t1C1o1d1e1".
///
/// Usage: rle-decode [ENCODED] [--file <PATH>] [--runs] [--stats]
#[derive(Parser, Debug)]
#[command(
    name = "rle-decode",
    version,
    about = "Decode run-length encoded strings one character at a time",
    after_help = r#"EXAMPLES
  $ rle-decode L1e2t1C1o1d1e1
  LeetCode
  $ echo a3b2 | rle-decode --stats
  $ RUST_LOG=debug rle-decode --runs x1y1z1"#
)]
struct Cli {
    #[arg(help = "Encoded string (read from --file or stdin when omitted)")]
    encoded: Option<String>,

    #[arg(
        long,
        short,
        conflicts_with = "encoded",
        help = "Read the encoded string from a file"
    )]
    file: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "stats",
        help = "Print one `symbol repeat` line per run instead of decoding"
    )]
    runs: bool,

    #[arg(long, help = "Print encoding statistics instead of decoding")]
    stats: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rle-decode: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let compressed = load(cli)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_output(cli, &compressed, &mut out)
        .and_then(|()| out.flush())
        .context("error writing output")
}

/// Reads, trims and parses the encoded input selected by the flags.
fn load(cli: &Cli) -> Result<CompressedString> {
    let input = read_input(cli)?;
    let encoded = input.trim();
    debug!(bytes = encoded.len(), "read encoded input");

    Ok(CompressedString::parse(encoded)?)
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(encoded) = &cli.encoded {
        return Ok(encoded.clone());
    }

    if let Some(path) = &cli.file {
        return fs::read_to_string(path)
            .with_context(|| format!("cannot read \"{}\"", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("error reading stdin")?;
    Ok(buffer)
}

fn write_output(cli: &Cli, compressed: &CompressedString, out: &mut impl Write) -> io::Result<()> {
    if cli.stats {
        write_stats(out, &compressed.stats())
    } else if cli.runs {
        write_runs(out, compressed)
    } else {
        write_decoded(out, compressed)
    }
}

fn write_decoded(out: &mut impl Write, compressed: &CompressedString) -> io::Result<()> {
    let mut cursor = compressed.cursor();
    let mut buf = [0u8; 4];

    while let Ok(c) = cursor.next() {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
    }
    writeln!(out)
}

fn write_runs(out: &mut impl Write, compressed: &CompressedString) -> io::Result<()> {
    for run in compressed.runs() {
        writeln!(out, "{} {}", run.symbol(), run.repeat())?;
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, stats: &RunStats) -> io::Result<()> {
    writeln!(out, "=== Statistics ===")?;
    writeln!(out, "Runs: {}", stats.runs)?;
    writeln!(out, "Encoded length: {}", stats.encoded_len)?;
    writeln!(out, "Decoded length: {}", stats.decoded_len)?;
    writeln!(out, "Distinct symbols: {}", stats.distinct_symbols)?;
    writeln!(out, "Longest run: {}", stats.longest_run)?;
    writeln!(out, "Expansion ratio: {:.2}", stats.expansion_ratio())
}
