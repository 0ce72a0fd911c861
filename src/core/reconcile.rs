//! Safe ownership and mode reconciliation for existing directories.
//!
//! Changing ownership while a stale mode remains in effect could let the new
//! owner exercise permissions granted under the old policy. The transition
//! therefore clamps the directory's mode to `current & target` before any
//! chown, and only restores the full target mode once ownership matches.

use crate::constants;
use crate::error::SetupError;
use crate::models::DirSpec;
use std::fs;
use std::os::unix::fs::{chown, lchown, MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

/// What a stat snapshot requires to reach conformance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// uid or gid differs: full four-step transition under `safe_mode`.
    Transition { safe_mode: u32 },
    /// Ownership matches, mode differs: a single chmod suffices.
    SetMode,
    /// Already conformant.
    Noop,
}

/// Decide the action for a directory with the given on-disk state.
pub fn plan(current_uid: u32, current_gid: u32, current_mode: u32, spec: &DirSpec) -> Action {
    if current_uid != spec.uid || current_gid != spec.gid {
        Action::Transition {
            safe_mode: (current_mode & constants::MODE_MASK) & spec.mode,
        }
    } else if current_mode & constants::MODE_MASK != spec.mode {
        Action::SetMode
    } else {
        Action::Noop
    }
}

/// Bring an existing directory into conformance with `spec`.
///
/// The transition order is load-bearing:
/// 1. clamp the mode to `current & target`;
/// 2. chown the contents, excluding the directory itself;
/// 3. chown the directory;
/// 4. set the final target mode.
///
/// The directory is chowned only after its contents so that a partially
/// failed content walk leaves the ownership mismatch detectable: a re-run
/// re-enters the transition and resumes the walk. Effects of completed steps
/// are deliberately left in place on failure.
pub fn reconcile_existing(spec: &DirSpec) -> Result<(), SetupError> {
    let meta = fs::metadata(&spec.path).map_err(|source| SetupError::Stat {
        path: spec.path.clone(),
        source,
    })?;

    match plan(meta.uid(), meta.gid(), meta.mode(), spec) {
        Action::Transition { safe_mode } => {
            set_mode(&spec.path, safe_mode)?;
            chown_contents(&spec.path, spec.uid, spec.gid)?;
            chown(&spec.path, Some(spec.uid), Some(spec.gid)).map_err(|source| {
                SetupError::Chown {
                    path: spec.path.clone(),
                    source,
                }
            })?;
            set_mode(&spec.path, spec.mode)
        }
        Action::SetMode => set_mode(&spec.path, spec.mode),
        Action::Noop => Ok(()),
    }
}

/// Chown every descendant of `dir` whose uid/gid differs from the target.
///
/// The walk starts from the immediate children, so `dir` itself is never
/// touched here. Symlinks are chowned with `lchown` and not descended into.
pub fn chown_contents(dir: &Path, uid: u32, gid: u32) -> Result<(), SetupError> {
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|source| SetupError::Walk {
            path: current.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| SetupError::Walk {
                path: current.clone(),
                source,
            })?;
            let path = entry.path();
            // DirEntry::metadata does not traverse symlinks.
            let meta = entry.metadata().map_err(|source| SetupError::Stat {
                path: path.clone(),
                source,
            })?;
            if meta.uid() != uid || meta.gid() != gid {
                lchown(&path, Some(uid), Some(gid)).map_err(|source| SetupError::Chown {
                    path: path.clone(),
                    source,
                })?;
            }
            if meta.is_dir() {
                pending.push(path);
            }
        }
    }
    Ok(())
}

fn set_mode(path: &Path, mode: u32) -> Result<(), SetupError> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
        SetupError::Chmod {
            path: path.to_path_buf(),
            source,
        }
    })
}
