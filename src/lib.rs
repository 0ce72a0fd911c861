//! Directory ownership and mode reconciliation CLI.
//!
//! Reads a line-oriented config of `path:user:group:mode` entries and brings
//! each directory into conformance: missing directories are created with the
//! declared ownership, existing directories are transitioned to the declared
//! ownership without ever widening effective access beyond the intersection
//! of old and new modes.
//!
//! ## Modules
//! - `cli` — Command-line handler and per-line reporting
//! - `core` — Parsing, creation, reconciliation, dispatch
//! - `models` — Data structures
//! - `util` — Unix identity lookup

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use error::SetupError;
