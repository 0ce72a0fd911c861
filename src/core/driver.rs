//! Per-entry dispatch: create missing directories, reconcile existing ones.

use crate::core::{config, create, reconcile};
use crate::error::SetupError;
use crate::models::DirSpec;

/// Parse one config line and bring its directory into conformance.
pub fn handle_line(line: &str) -> Result<(), SetupError> {
    let spec = config::parse_line(line)?;
    apply(&spec)
}

/// Dispatch an entry based on a fresh existence probe.
///
/// State is always re-read from disk rather than cached, so a run interrupted
/// partway through converges when repeated.
pub fn apply(spec: &DirSpec) -> Result<(), SetupError> {
    if create::directory_exists(&spec.path)? {
        reconcile::reconcile_existing(spec)
    } else {
        create::create_missing(spec)
    }
}
