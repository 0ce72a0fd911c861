//! Utility modules for unix identity lookup.

pub mod identity;
