//! # md2html
//!
//! Convert a small subset of Markdown into an HTML fragment by running the
//! whole document through a fixed chain of regex substitutions.
//!
//! This is deliberately not a Markdown parser. There is no AST and no
//! CommonMark compliance; the output is whatever the eight rewrites produce,
//! quirks included (for example, every `<ul>` also carries an inner `<ol>`).
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown file
//!  │
//!  ├─ 1. Input   existence check, read, UTF-8 decode, normalise newlines
//!  ├─ 2. Rules   headings → lists → paragraphs → <br/> → emphasis
//!  │             → [[md5]] → ((strip c))
//!  └─ 3. Write   temp file + rename over the output path
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2html::convert;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stats = convert("README.md", "README.html")?;
//!     eprintln!("{} bytes → {} bytes", stats.input_bytes, stats.output_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use convert::{convert, convert_str};
pub use error::Md2HtmlError;
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::rules::markdown_to_html;
