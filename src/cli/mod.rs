//! Command-line entry point and per-line error reporting.
//!
//! Clap rejects missing or extra arguments with a usage error before any line
//! is processed. A line that fails to parse or reconcile is reported to
//! stderr as `<config>:<line>: <cause>` and does not stop the remaining
//! lines; the process exits non-zero iff at least one line failed.

use crate::core::driver;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dirsetup",
    version,
    about = "Reconcile directory ownership and modes against a declared config"
)]
pub struct Cli {
    /// Config file with one `path:user:group:mode` entry per line
    pub config: PathBuf,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let file = File::open(&self.config)
            .with_context(|| format!("error opening file {}", self.config.display()))?;
        let reader = BufReader::new(file);

        let mut entries = 0usize;
        let mut failures = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("error reading {}:{}", self.config.display(), index + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            entries += 1;
            if let Err(e) = driver::handle_line(&line) {
                eprintln!("{}:{}: {}", self.config.display(), index + 1, e);
                failures += 1;
            }
        }

        if failures > 0 {
            bail!("{} of {} entries failed", failures, entries);
        }
        Ok(())
    }
}
