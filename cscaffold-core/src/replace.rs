use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Outcome of one replacement pass over one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceOutcome {
    pub path: PathBuf,
    /// Number of non-overlapping occurrences that were replaced.
    pub replacements: usize,
}

/// Replace every non-overlapping occurrence of `old` with `new` in the file
/// at `path`, rewriting the file in place.
///
/// Matching is exact and case-sensitive, scanned left-to-right; the scan
/// resumes immediately after each replaced span. If `old` does not occur,
/// the file is left untouched (no rewrite, no mtime change).
pub fn replace_in_file(
    path: &Path,
    old: &str,
    new: &str,
) -> Result<ReplaceOutcome, ScaffoldError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScaffoldError::FileNotFound(path.to_path_buf()));
        },
        Err(e) => {
            return Err(ScaffoldError::io(
                format!("failed to read {}", path.display()),
                e,
            ));
        },
    };

    let replacements = content.matches(old).count();
    if replacements == 0 {
        return Ok(ReplaceOutcome {
            path: path.to_path_buf(),
            replacements: 0,
        });
    }

    let modified = content.replace(old, new);
    write_atomic(path, &modified)?;

    Ok(ReplaceOutcome {
        path: path.to_path_buf(),
        replacements,
    })
}

/// Write `contents` to `path` via a temporary file in the same directory,
/// then atomically rename it over the original. A failed write never leaves
/// the target truncated.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    let temp_path = path.with_extension(format!("{}.cscaffold.tmp", std::process::id()));

    // Capture the original permissions before writing so the rewritten
    // file keeps them.
    let original_permissions = fs::metadata(path)
        .map_err(|e| ScaffoldError::io(format!("failed to stat {}", path.display()), e))?
        .permissions();

    let write_result = (|| {
        let mut temp_file = File::create(&temp_path)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.sync_all()?;
        fs::set_permissions(&temp_path, original_permissions)?;
        fs::rename(&temp_path, path)
    })();

    if let Err(e) = write_result {
        // Best effort: don't leave the temp file behind on failure.
        let _ = fs::remove_file(&temp_path);
        return Err(ScaffoldError::io(
            format!("failed to rewrite {}", path.display()),
            e,
        ));
    }

    // Sync the parent directory so the rename is durable on Unix.
    #[cfg(unix)]
    {
        if let Some(parent) = path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }

    Ok(())
}
