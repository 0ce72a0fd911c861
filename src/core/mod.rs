//! Core reconciliation logic.

pub mod config;
pub mod create;
pub mod driver;
pub mod reconcile;
