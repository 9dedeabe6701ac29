//! Write a default settings file into the vault

use std::fs;
use std::io;
use std::path::Path;

use dayplan::Vault;

const DEFAULT_SETTINGS_YAML: &str = r#"# dayplan settings
#
# mode: how today's planner note path is determined
#   file    - generate it from custom_folder + file_name_prefix + date
#   command - use the note registered for today in notes_to_dates
mode: file

# Folder for generated planner notes (file mode). Default: "Day Planners"
#custom_folder: "Day Planners"

# Prefix for generated filenames, e.g. "Plan-"
file_name_prefix: ""

# Date part of generated filenames, moment-style tokens
file_name_date_format: "YYYY-MM-DD"

# Template note seeding new planner files; "/" means built-in content
note_template: "/"

# Notes registered per date (command mode)
notes_to_dates: []
#  - note_path: "Planning/sprint-12.md"
#    date: 2024-03-05
"#;

pub fn run(vault: &Vault, config_path: &Path, force: bool) -> io::Result<()> {
    if config_path.exists() && !force {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "settings file '{}' already exists. Use --force to replace.",
                config_path.display()
            ),
        ));
    }

    fs::create_dir_all(vault.root())?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(config_path, DEFAULT_SETTINGS_YAML)?;

    println!("{}", config_path.display());
    Ok(())
}
