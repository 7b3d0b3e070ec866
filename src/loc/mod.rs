//! loc log ingestion layer
//!
//! This module handles reading the line-change CSV, aggregating records
//! into commit summaries, and computing dataset statistics.

mod aggregate;
/// CSV primitives (public for integration testing)
pub mod csv;
mod loader;
mod stats;

pub use aggregate::{aggregate_commits, group_files};
pub use loader::{LoadReport, load_path, parse_log};
pub use stats::summarize;

use std::io;
use thiserror::Error;

/// Errors that can occur while loading the loc log
#[derive(Error, Debug)]
pub enum LocError {
    #[error("Input has no header row")]
    NoHeader,

    #[error("Missing required column '{0}' in header")]
    MissingColumn(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
