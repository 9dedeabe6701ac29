use clap::{Parser, Subcommand};

/// dayplan - day planner note management for Markdown vaults
///
/// # Quick Reference
///
/// ## Daily Planner
///
/// ```bash
/// dayplan path                 # Print today's planner note path
/// dayplan status               # Does today's planner note exist?
/// dayplan prepare              # Create folder + today's note if missing
/// dayplan show                 # Print today's planner contents
///
/// # Replace today's contents from stdin/heredoc:
/// dayplan write <<EOF
/// ## Day Planner
/// - [ ] 09:00 standup
/// EOF
/// ```
///
/// ## Setup
///
/// ```bash
/// dayplan init                 # Write a commented dayplan.yaml into the vault
/// dayplan --vault ~/notes path # Use a specific vault directory
/// ```
///
/// ## Global Options
///
/// ```bash
/// dayplan --vault PATH ...     # Vault root (default: $DAYPLAN_VAULT or ~/.dayplan)
/// dayplan --config PATH ...    # Settings file (default: <vault>/dayplan.yaml)
/// dayplan --json status        # JSON output for scripting
/// ```
///
/// ## Environment Variables
///
/// - `DAYPLAN_VAULT`: vault root directory (default: ~/.dayplan)
///
/// ## Modes
///
/// - `file` mode generates today's path from `custom_folder`,
///   `file_name_prefix` and `file_name_date_format` (moment-style tokens,
///   e.g. "YYYY-MM-DD").
/// - `command` mode uses the note registered for today's date in
///   `notes_to_dates`.
#[derive(Parser, Debug)]
#[command(name = "dayplan")]
#[command(version = "0.1.0")]
#[command(about = "Day planner note management for Markdown vaults")]
pub struct Cli {
    /// Vault root directory (default: $DAYPLAN_VAULT or ~/.dayplan)
    #[arg(long, global = true, value_name = "PATH")]
    pub vault: Option<String>,

    /// Settings file (default: <vault>/dayplan.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print today's planner note path
    #[command(alias = "p")]
    Path,

    /// Report whether today's planner note exists
    Status,

    /// Ensure the planner folder and today's note exist
    Prepare,

    /// Print today's planner note contents
    #[command(alias = "cat")]
    Show,

    /// Replace today's planner note contents
    Write {
        /// New contents; "-" or absent reads from stdin
        content: Option<String>,
    },

    /// Write a default settings file into the vault
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
