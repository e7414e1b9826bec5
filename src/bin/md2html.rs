//! CLI binary for md2html.
//!
//! A thin shim over the library crate: two positional paths in, one HTML
//! file out.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use md2html::convert;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a README
  md2html README.md README.html

  # Show what each stage did
  md2html -v notes.md out/notes.html

SUPPORTED SYNTAX:
  # … ######      headings, one line each
  - item          unordered list item
  * item          ordered list item
  **bold**        <b>
  __italic__      <em>
  [[text]]        replaced by the MD5 hex digest of text
  ((text))        text with every 'c' and 'C' removed

  Paragraphs are only wrapped in <p> when a blank line precedes and follows
  them. Every other newline not followed by a tag gets a <br/>.

ENVIRONMENT VARIABLES:
  RUST_LOG        Override the log filter (e.g. RUST_LOG=md2html=debug)

EXIT STATUS:
  0  success
  1  usage error, missing input file, or any read/write failure
"#;

/// Convert a Markdown file to an HTML fragment.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown file to an HTML fragment",
    long_about = "Convert a small Markdown subset (headings, flat lists, paragraphs, bold, \
italic) plus two custom directives to an HTML fragment using a fixed chain of regex rewrites.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to read.
    input: PathBuf,

    /// HTML file to create or overwrite.
    output: PathBuf,

    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true, num_args = 0..)]
    _rest: Vec<OsString>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors share exit status 1 with every other failure.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    debug!("{:?}", cli);

    // ── Run conversion ───────────────────────────────────────────────────
    let stats = convert(&cli.input, &cli.output)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    debug!(
        "{} bytes → {} bytes in {}ms",
        stats.input_bytes, stats.output_bytes, stats.total_duration_ms
    );

    Ok(())
}
