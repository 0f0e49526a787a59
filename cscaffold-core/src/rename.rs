use crate::error::ScaffoldError;
use std::fs;
use std::path::Path;

/// Rename a directory from `from` to `to`.
///
/// This is a single directory-entry rename: nothing beneath the directory
/// is copied or transformed, only the top-level location changes.
pub fn rename_dir(from: &Path, to: &Path) -> Result<(), ScaffoldError> {
    if !from.exists() {
        return Err(ScaffoldError::SourceNotFound(from.to_path_buf()));
    }
    if to.exists() {
        return Err(ScaffoldError::DestinationExists(to.to_path_buf()));
    }

    fs::rename(from, to).map_err(|e| {
        ScaffoldError::io(
            format!("failed to rename {} to {}", from.display(), to.display()),
            e,
        )
    })
}
