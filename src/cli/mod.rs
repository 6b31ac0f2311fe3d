pub mod menu;
pub mod output;

pub use menu::{run_cli, CliMode, SCRIPT_ENV_VAR};
