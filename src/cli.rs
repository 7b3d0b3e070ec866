//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Replay a repository's line-level history as a scrolling story
#[derive(Debug, Parser)]
#[command(name = "gitale")]
#[command(version, about = "Commit history storyteller for loc CSV logs", long_about = None)]
pub struct Cli {
    /// Path to the loc CSV log (one row per line of code)
    pub loc_file: PathBuf,

    /// Base URL for commit links in the hover tooltip,
    /// e.g. <https://github.com/user/repo/commit/>
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,
}
