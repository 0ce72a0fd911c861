//! Structured error type for per-entry failures.
//!
//! Every variant carries the path or token needed to make the operator-facing
//! `<config>:<line>: <cause>` report actionable. Fatal errors (bad usage,
//! unreadable config file) are handled at the CLI layer instead.

use std::io;
use std::path::PathBuf;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Config line did not have exactly four colon-separated fields.
    #[error("parse error: expected 4 colon-separated fields, got {found}")]
    FieldCount { found: usize },

    /// Directory path field was empty after stripping trailing separators.
    #[error("parse error: empty directory path")]
    EmptyPath,

    /// User name did not resolve to an account.
    #[error("invalid user name: {name}")]
    UnknownUser { name: String },

    /// Group name did not resolve to a group.
    #[error("invalid group name: {name}")]
    UnknownGroup { name: String },

    /// The identity database itself could not be queried.
    #[error("identity lookup for {name}: {source}")]
    Lookup {
        name: String,
        #[source]
        source: nix::errno::Errno,
    },

    /// Mode field was not an octal permission value.
    #[error("invalid mode {value:?}: expected octal permission bits")]
    InvalidMode { value: String },

    /// `stat` failed for a reason other than the path not existing.
    #[error("stat {}: {}", .path.display(), .source)]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target path exists but is not a directory.
    #[error("target path exists, but is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Directory creation failed.
    #[error("create directory {}: {}", .path.display(), .source)]
    Mkdir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Ownership change failed.
    #[error("set owner on {}: {}", .path.display(), .source)]
    Chown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Mode change failed.
    #[error("set mode on {}: {}", .path.display(), .source)]
    Chmod {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading directory contents failed during the recursive chown walk.
    #[error("read directory {}: {}", .path.display(), .source)]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
