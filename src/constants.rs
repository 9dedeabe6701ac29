//! Constants for dayplan
//!
//! This module contains all magic values, format strings, and default content
//! used throughout the codebase to avoid duplication.

// === File and Directory Names ===

/// Default folder for generated planner notes when none is configured
pub const DEFAULT_PLANNER_FOLDER: &str = "Day Planners";

/// Default file extension for planner notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Settings filename inside the vault
pub const SETTINGS_FILENAME: &str = "dayplan.yaml";

/// Default vault directory name under the home directory
pub const DEFAULT_VAULT_DIR: &str = ".dayplan";

// === Path Sentinels ===

/// Normalized form of an empty or root template path; means "no template"
pub const ROOT_PATH: &str = "/";

// === Date and Time Format Strings ===

/// Default filename date format (moment-style tokens): YYYY-MM-DD
pub const DEFAULT_FILENAME_DATE_FORMAT: &str = "YYYY-MM-DD";

// === Default Content ===

/// Fallback content for a newly created planner note when no usable
/// template is configured
pub const DAY_PLANNER_DEFAULT_CONTENT: &str = "## Day Planner\n\n- [ ] \n";

// === Environment Variables ===

/// Overrides the vault root directory
pub const ENV_VAULT: &str = "DAYPLAN_VAULT";

// === Notification Messages ===

/// Shown when the configured template cannot be resolved or read
pub const NOTICE_TEMPLATE_READ_FAILED: &str = "Failed to read the day planner template";
