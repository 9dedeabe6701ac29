pub mod cli;
pub mod constants;
pub mod date_query;
pub mod datefmt;
pub mod notify;
pub mod planner;
pub mod settings;
pub mod util;
pub mod vault;

pub use cli::{Cli, Command};
pub use planner::PlannerFile;
pub use settings::{Mode, NoteForDate, Settings};
pub use vault::Vault;

use std::path::PathBuf;

/// Get the default vault path in the user's home directory
pub fn default_vault_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(constants::DEFAULT_VAULT_DIR))
}

/// Resolve the vault root: CLI argument, then $DAYPLAN_VAULT, then the
/// home-directory default, then the current directory.
pub fn vault_path(cli_arg: Option<&str>) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }
    if let Ok(env) = std::env::var(constants::ENV_VAULT) {
        if !env.is_empty() {
            return PathBuf::from(env);
        }
    }
    default_vault_path().unwrap_or_else(|| PathBuf::from("."))
}
