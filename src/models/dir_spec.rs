use std::path::PathBuf;

/// One parsed config entry: a target directory and its desired ownership.
///
/// Immutable once parsed; `mode` holds permission bits only (at most 0o7777).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSpec {
    pub path: PathBuf,
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,
}
