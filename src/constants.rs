//! Centralized constants for config grammar and permission handling.

/// Number of colon-separated fields in a config line.
pub const CONFIG_FIELDS: usize = 4;

/// Mask selecting the permission bits of a mode (rwx plus setuid/setgid/sticky).
pub const MODE_MASK: u32 = 0o7777;
