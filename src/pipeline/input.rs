//! Input resolution: validate the user-supplied path and load it as text.
//!
//! The existence check is the one failure the converter reports on purpose,
//! so it runs on its own before anything is read and before the output path
//! is touched. Reading is all-or-nothing: the whole file becomes one
//! `String`, with line endings normalised to `\n` so the rule chain never has
//! to care about `\r`.

use crate::error::Md2HtmlError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check that `path` names an existing regular file.
pub fn resolve_input(path: impl AsRef<Path>) -> Result<PathBuf, Md2HtmlError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(Md2HtmlError::MissingInput { path });
    }
    if path.is_dir() {
        return Err(Md2HtmlError::NotAFile { path });
    }

    debug!("Resolved input: {}", path.display());
    Ok(path)
}

/// Read the whole file at `path` and decode it as UTF-8.
pub fn read_input(path: &Path) -> Result<String, Md2HtmlError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Md2HtmlError::MissingInput {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Md2HtmlError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Md2HtmlError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = String::from_utf8(bytes).map_err(|e| Md2HtmlError::InvalidEncoding {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(normalise_line_endings(&text))
}

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_missing() {
        let dir = TempDir::new().unwrap();
        let err = resolve_input(dir.path().join("nope.md")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_resolve_directory() {
        let dir = TempDir::new().unwrap();
        let err = resolve_input(dir.path()).unwrap_err();
        assert!(matches!(err, Md2HtmlError::NotAFile { .. }));
    }

    #[test]
    fn test_read_normalises_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.md");
        std::fs::write(&path, "# A\r\nb\rc\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "# A\nb\nc\n");
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.md");
        std::fs::write(&path, [b'o', b'k', 0xFF, b'\n']).unwrap();
        match read_input(&path).unwrap_err() {
            Md2HtmlError::InvalidEncoding { valid_up_to, .. } => assert_eq!(valid_up_to, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
