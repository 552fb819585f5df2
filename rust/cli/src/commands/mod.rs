//! Command handler modules for the showdown CLI.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in as `&mut dyn Write` so handlers can be driven from tests.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod settle;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use settle::handle_settle_command;
pub use stats::handle_stats_command;
