//! Pipeline stages for Markdown-to-HTML conversion.
//!
//! Each submodule implements exactly one step, and every step hands a whole
//! buffer to the next one.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ rules ──▶ write
//! (path)    (regex)   (temp + rename)
//! ```
//!
//! 1. [`input`] — check the input path exists, read it, decode UTF-8
//! 2. [`rules`] — the fixed eight-rule substitution chain
//! 3. [`write`] — atomically replace the output file

pub mod input;
pub mod rules;
pub mod write;
