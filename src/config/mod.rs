use std::{env, path::PathBuf};

/// Default file name for the expense log.
pub const DEFAULT_FILE_NAME: &str = "expenses.json";

/// Environment override for the data file location.
pub const FILE_ENV_VAR: &str = "EXPENSE_CORE_FILE";

const APP_DIR_NAME: &str = "expense_core";

/// Resolves the expense log path: an explicit path wins, then the
/// `EXPENSE_CORE_FILE` environment variable, then the per-user data
/// directory, then `expenses.json` in the working directory.
pub fn resolve_data_file(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(path) = env::var_os(FILE_ENV_VAR) {
        return PathBuf::from(path);
    }
    default_data_file()
}

/// Per-user default location, e.g. `~/.local/share/expense_core/expenses.json`.
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME),
        None => PathBuf::from(DEFAULT_FILE_NAME),
    }
}
