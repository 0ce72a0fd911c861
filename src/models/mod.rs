//! Data structures.

pub mod dir_spec;

pub use dir_spec::DirSpec;
