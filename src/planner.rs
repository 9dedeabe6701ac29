//! PlannerFile - resolution and lifecycle of today's planner note
//!
//! Computes today's target path from the configured mode, makes sure the
//! folder and file exist (seeding new files from the template or the
//! built-in content), and exposes read/write access to the note. Paths are
//! computed fresh on every call; nothing is cached across the midnight
//! boundary.

use std::io;

use chrono::{DateTime, Local};

use crate::constants as C;
use crate::date_query;
use crate::datefmt;
use crate::notify::Notify;
use crate::settings::{Mode, Settings};
use crate::util;
use crate::vault::Vault;

pub struct PlannerFile<'a> {
    vault: &'a Vault,
    settings: &'a Settings,
    notify: &'a dyn Notify,
}

impl<'a> PlannerFile<'a> {
    pub fn new(vault: &'a Vault, settings: &'a Settings, notify: &'a dyn Notify) -> Self {
        Self {
            vault,
            settings,
            notify,
        }
    }

    /// Whether today's planner note exists.
    ///
    /// File mode always answers yes; the note is created on demand. Command
    /// mode checks the registered note's existence in the vault, and that
    /// check is the one operation whose storage errors reach the caller.
    pub fn has_today_note(&self) -> io::Result<bool> {
        self.has_note_at(Local::now())
    }

    pub fn has_note_at(&self, now: DateTime<Local>) -> io::Result<bool> {
        match self.settings.mode {
            Mode::File => Ok(true),
            Mode::Command => {
                match date_query::active(&self.settings.notes_to_dates, now.date_naive()) {
                    Some(entry) => self.vault.exists(&entry.note_path),
                    None => Ok(false),
                }
            }
        }
    }

    /// Vault-relative path of today's planner note.
    pub fn today_file_path(&self) -> io::Result<String> {
        self.file_path_at(Local::now())
    }

    pub fn file_path_at(&self, now: DateTime<Local>) -> io::Result<String> {
        if self.settings.mode == Mode::Command {
            // Taken verbatim from the mapping, not validated against storage
            return date_query::active(&self.settings.notes_to_dates, now.date_naive())
                .map(|entry| entry.note_path.clone())
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "no planner note registered for today",
                    )
                });
        }
        Ok(format!("{}/{}", self.planner_folder(), self.file_name_at(now)))
    }

    /// Generated filename: trimmed prefix, formatted date, `.md`. The date
    /// format's output is used verbatim, path-unsafe characters included.
    pub fn today_file_name(&self) -> String {
        self.file_name_at(Local::now())
    }

    pub fn file_name_at(&self, now: DateTime<Local>) -> String {
        let date = datefmt::format_moment(&now, &self.settings.file_name_date_format);
        format!(
            "{}{}{}",
            self.settings.file_name_prefix.trim(),
            date,
            C::MARKDOWN_EXTENSION
        )
    }

    /// Initial contents for a newly created planner note.
    ///
    /// Never fails: the root sentinel skips template lookup entirely, and a
    /// missing or unreadable template logs, notifies the user once, and
    /// falls back to the built-in content.
    pub fn today_contents(&self) -> String {
        let template = util::normalize_path(&self.settings.note_template);
        if template == C::ROOT_PATH {
            return C::DAY_PLANNER_DEFAULT_CONTENT.to_string();
        }

        match self.read_template(&template) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("failed to read the day planner template '{}': {}", template, err);
                self.notify.notify(C::NOTICE_TEMPLATE_READ_FAILED);
                C::DAY_PLANNER_DEFAULT_CONTENT.to_string()
            }
        }
    }

    fn read_template(&self, template: &str) -> io::Result<String> {
        let resolved = self.vault.resolve_link_path(template).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("template '{}' not found in vault", template),
            )
        })?;
        self.vault.read(&resolved)
    }

    /// Ensure the planner folder and today's file exist (file mode only;
    /// command mode notes are managed by the user).
    pub fn prepare_file(&self) -> io::Result<()> {
        self.prepare_file_at(Local::now())
    }

    pub fn prepare_file_at(&self, now: DateTime<Local>) -> io::Result<()> {
        if self.settings.mode == Mode::File {
            self.create_folder_if_absent(self.planner_folder())?;
            self.create_file_if_absent(&self.file_path_at(now)?)?;
        }
        Ok(())
    }

    /// Create a folder unless it exists. Returns whether this call created it.
    pub fn create_folder_if_absent(&self, path: &str) -> io::Result<bool> {
        if self.vault.exists(path)? {
            return Ok(false);
        }
        self.vault.create_folder(path)?;
        Ok(true)
    }

    /// Create a file with today's contents unless it exists. Returns whether
    /// this call created it; losing a creation race counts as "not created".
    pub fn create_file_if_absent(&self, path: &str) -> io::Result<bool> {
        if self.vault.exists(path)? {
            return Ok(false);
        }
        let contents = self.today_contents();
        self.vault.create(path, &contents)
    }

    /// Read a planner note, ensuring today's note exists first.
    ///
    /// The preparation step runs to completion before the read; its failure
    /// is logged and ignored so a broken template or folder never blocks
    /// reading a note that is already there.
    pub fn read_file(&self, path: &str) -> io::Result<String> {
        if let Err(err) = self.prepare_file() {
            eprintln!("failed to prepare today's planner note: {}", err);
        }
        self.vault.read(path)
    }

    /// Replace a planner note's contents, ensuring today's note exists first.
    pub fn write_file(&self, path: &str, contents: &str) -> io::Result<()> {
        if let Err(err) = self.prepare_file() {
            eprintln!("failed to prepare today's planner note: {}", err);
        }
        self.vault.write(path, contents)
    }

    fn planner_folder(&self) -> &str {
        self.settings
            .custom_folder
            .as_deref()
            .unwrap_or(C::DEFAULT_PLANNER_FOLDER)
    }
}
