//! Error types for the md2html library.
//!
//! Only two conditions are expected during a normal run: the input file is
//! missing (checked before anything else happens) or the binary was invoked
//! with too few arguments (handled by the CLI, not here). Everything else in
//! [`Md2HtmlError`] is an I/O or decode fault that is reported once and never
//! retried.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2html library.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Missing {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The path exists but is a directory or other non-regular file.
    #[error("Input '{}' is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'\nTry: chmod +r {path:?}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Reading the input failed for a reason other than permissions.
    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid UTF-8.
    #[error("Input file '{}' is not valid UTF-8 (byte offset {valid_up_to})", .path.display())]
    InvalidEncoding { path: PathBuf, valid_up_to: usize },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Md2HtmlError {
    /// True for the one input condition the CLI checks up front.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Md2HtmlError::MissingInput { .. })
    }
}
