//! Output stage: persist the converted HTML.
//!
//! The result goes to a sibling temp file first and is then renamed over the
//! target, so the output path holds either the previous contents or the
//! complete new document, never a truncated one.

use crate::error::Md2HtmlError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `html` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, html: &str) -> Result<(), Md2HtmlError> {
    let failed = |source| Md2HtmlError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(failed)?;
    }

    let tmp_path = temp_path_for(path);
    // A partial temp file is removed whether the write or the rename failed.
    let written = std::fs::write(&tmp_path, html).and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(failed(e));
    }

    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// `out/README.html` → `out/README.html.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
