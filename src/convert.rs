//! Conversion entry points.
//!
//! [`convert`] is the file-to-file operation the CLI exposes. [`convert_str`]
//! runs the same rule chain on an in-memory buffer for library callers that
//! already hold the Markdown.

use crate::error::Md2HtmlError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{input, rules, write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert the Markdown file at `input_path` and write the HTML to
/// `output_path`, creating or overwriting it.
///
/// # Errors
/// - [`Md2HtmlError::MissingInput`] if `input_path` does not exist. This is
///   checked first; the output path is not touched.
/// - Any read, decode or write failure, reported as-is without retry.
pub fn convert(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<ConversionStats, Md2HtmlError> {
    let total_start = Instant::now();
    let output_path = output_path.as_ref();

    // ── Step 1: Resolve and read input ───────────────────────────────────
    let input_path = input::resolve_input(input_path)?;
    info!(
        "Converting {} → {}",
        input_path.display(),
        output_path.display()
    );
    let markdown = input::read_input(&input_path)?;

    // ── Step 2: Rule chain ───────────────────────────────────────────────
    let output = convert_str(&markdown);

    // ── Step 3: Write output ─────────────────────────────────────────────
    write::write_output(output_path, &output.html)?;

    let stats = ConversionStats {
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        ..output.stats
    };
    info!(
        "Conversion complete: {} bytes in, {} bytes out, {}ms",
        stats.input_bytes, stats.output_bytes, stats.total_duration_ms
    );
    Ok(stats)
}

/// Run the rule chain over an in-memory Markdown buffer.
///
/// # Example
/// ```rust
/// use md2html::convert_str;
///
/// let output = convert_str("# Title\n");
/// assert!(output.html.contains("<h1>Title</h1>"));
/// ```
pub fn convert_str(markdown: &str) -> ConversionOutput {
    let start = Instant::now();
    let html = rules::markdown_to_html(markdown);
    debug!("Rule chain: {} → {} bytes", markdown.len(), html.len());

    let stats = ConversionStats {
        input_bytes: markdown.len(),
        output_bytes: html.len(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };
    ConversionOutput { html, stats }
}
