//! Planner settings
//!
//! Settings are owned by the caller and injected into [`PlannerFile`];
//! nothing in this crate mutates them after loading. They live in a YAML
//! file inside the vault (see [`crate::constants::SETTINGS_FILENAME`]).
//!
//! [`PlannerFile`]: crate::planner::PlannerFile

use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants as C;

/// How today's planner file path is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Generate the path from the configured folder and filename rules
    File,
    /// Use the note registered for today in `notes_to_dates`
    Command,
}

/// One entry of the notes-to-dates mapping used in [`Mode::Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteForDate {
    /// Vault-relative path of the planner note
    pub note_path: String,
    /// The date the note is the planner for (YYYY-MM-DD)
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: Mode,
    /// Folder for generated planner notes; `None` means "Day Planners"
    pub custom_folder: Option<String>,
    /// Prefix prepended to generated filenames; surrounding whitespace is
    /// trimmed when the name is built
    pub file_name_prefix: String,
    /// Moment-style date format for generated filenames
    pub file_name_date_format: String,
    /// Template note path; `/` or empty means "use the built-in content"
    pub note_template: String,
    /// Mapping consulted in command mode
    pub notes_to_dates: Vec<NoteForDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::File,
            custom_folder: None,
            file_name_prefix: String::new(),
            file_name_date_format: C::DEFAULT_FILENAME_DATE_FORMAT.to_string(),
            note_template: C::ROOT_PATH.to_string(),
            notes_to_dates: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid settings file '{}': {}", path.display(), err),
            )
        })
    }

    /// Load settings, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.mode, Mode::File);
        assert!(settings.custom_folder.is_none());
        assert_eq!(settings.file_name_prefix, "");
        assert_eq!(settings.file_name_date_format, "YYYY-MM-DD");
        assert_eq!(settings.note_template, "/");
        assert!(settings.notes_to_dates.is_empty());
    }

    #[test]
    fn test_load_full_settings() {
        let yaml = r#"
mode: command
custom_folder: "Planning"
file_name_prefix: "Plan-"
file_name_date_format: "YYYY-MM-DD"
note_template: "Templates/Planner"
notes_to_dates:
  - note_path: "Planning/sprint-12.md"
    date: 2024-03-05
"#;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dayplan.yaml");
        std::fs::write(&path, yaml).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.mode, Mode::Command);
        assert_eq!(settings.custom_folder.as_deref(), Some("Planning"));
        assert_eq!(settings.file_name_prefix, "Plan-");
        assert_eq!(settings.notes_to_dates.len(), 1);
        assert_eq!(settings.notes_to_dates[0].note_path, "Planning/sprint-12.md");
        assert_eq!(
            settings.notes_to_dates[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_load_partial_settings_fills_defaults() {
        let yaml = "mode: file\ncustom_folder: \"Agenda\"\n";
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dayplan.yaml");
        std::fs::write(&path, yaml).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.mode, Mode::File);
        assert_eq!(settings.custom_folder.as_deref(), Some("Agenda"));
        assert_eq!(settings.file_name_date_format, "YYYY-MM-DD");
    }

    #[test]
    fn test_load_or_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");
        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.mode, Mode::File);
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dayplan.yaml");
        std::fs::write(&path, "mode: [not a mode").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
