//! Gitale - a commit history storyteller for the terminal
//!
//! Replays a repository's line-level change log: a narrative pane steps
//! through commits one at a time while a scatter chart, a per-file
//! breakdown, and a summary strip follow the story position.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`cli`]: Command line arguments
//! - [`keys`]: Key binding definitions
//! - [`loc`]: Change log loading and aggregation
//! - [`model`]: Domain models
//! - [`story`]: Story position and the visible window
//! - [`ui`]: User interface components

pub mod app;
pub mod cli;
pub mod keys;
pub mod loc;
pub mod model;
pub mod story;
pub mod ui;
