//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` drives `showdown_cli::run` in-process and
//!   captures the exit code, stdout, and stderr.
//! - `tables`: table-file fixtures for `settle`, written into a scratch
//!   directory that is removed on drop.
//!
//! ```rust,ignore
//! use crate::helpers::{cli_runner::CliRunner, tables::TableDir};
//!
//! let cli = CliRunner::new();
//! let dir = TableDir::new();
//! let table = dir.write("table.json", tables::BROADWAY);
//! let res = cli.run(&["settle", "--input", &table]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
pub mod tables;
