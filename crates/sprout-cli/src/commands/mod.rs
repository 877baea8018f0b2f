//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod say;
pub mod styles;
