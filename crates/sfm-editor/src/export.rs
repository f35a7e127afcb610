//! Writing generated code to disk

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EditorError, EditorResult};

/// Write `code` to `path` verbatim
pub fn export_script(path: impl AsRef<Path>, code: &str) -> EditorResult<()> {
    let path = path.as_ref();
    fs::write(path, code).map_err(|e| EditorError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Exported {} characters to {:?}", code.chars().count(), path);
    Ok(())
}
