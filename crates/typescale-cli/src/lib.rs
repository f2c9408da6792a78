//! Library components of the `typescale` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod settings;
pub mod types;
