//! CLI layer - Interactive shell interface

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::{Cli, ShellCommand, ShellLine};
pub use shell::Shell;
