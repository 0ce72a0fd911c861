//! Recursive directory creation.
//!
//! Ownership and mode are applied only to directories actually created here;
//! pre-existing ancestors are left untouched.

use crate::error::SetupError;
use crate::models::DirSpec;
use std::fs::DirBuilder;
use std::os::unix::fs::{chown, DirBuilderExt};
use std::path::{Path, PathBuf};

/// Create `spec.path` and any missing ancestors, each with the entry's own
/// uid/gid/mode.
///
/// Assumes the caller has established that `spec.path` does not currently
/// exist as a directory. Two phases: walk upward to the deepest existing
/// ancestor, then create the missing components root-to-leaf. A failure
/// leaves already-created ancestors in place; they conform to the spec and
/// a re-run picks up where this one stopped.
pub fn create_missing(spec: &DirSpec) -> Result<(), SetupError> {
    // Collecting components drops `.` segments, so arguments like `a/.` walk
    // and mkdir the same directory instead of asking mkdir for `a/.` while
    // `a` is still missing.
    let target: PathBuf = spec.path.components().collect();
    let mut missing: Vec<&Path> = Vec::new();
    let mut cursor = target.as_path();
    loop {
        missing.push(cursor);
        match cursor.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                if directory_exists(parent)? {
                    break;
                }
                cursor = parent;
            }
            // Reached the filesystem root or the first component of a
            // relative path.
            _ => break,
        }
    }

    for path in missing.iter().rev() {
        make_dir(path, spec.mode)?;
        chown(path, Some(spec.uid), Some(spec.gid)).map_err(|source| SetupError::Chown {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// mkdir with the target mode as the creation mode.
///
/// If mkdir fails, the path is re-statted: a race with a concurrent creator
/// reports an error even though a directory is now in place, and counts as
/// success.
fn make_dir(path: &Path, mode: u32) -> Result<(), SetupError> {
    let result = DirBuilder::new().mode(mode).create(path);
    if let Err(source) = result {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return Err(SetupError::Mkdir {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(())
}

/// Whether `path` exists as a directory.
///
/// Not-found is `Ok(false)`; existing as a non-directory and every other stat
/// failure are errors, never treated as absence.
pub fn directory_exists(path: &Path) -> Result<bool, SetupError> {
    match std::fs::metadata(path) {
        Ok(meta) => {
            if meta.is_dir() {
                Ok(true)
            } else {
                Err(SetupError::NotADirectory {
                    path: path.to_path_buf(),
                })
            }
        }
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(SetupError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}
