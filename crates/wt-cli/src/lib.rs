//! Category time tracker CLI library.
//!
//! This crate provides the `wt` command-line interface over `wt-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{CategoryAction, Cli, Commands, TaskAction};
pub use config::Config;
