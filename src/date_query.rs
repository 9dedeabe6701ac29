//! Notes-to-dates lookup for command mode
//!
//! In command mode the planner path is not generated; it is whichever note
//! the user registered for the current date. The planner trusts the result
//! without validating that the note exists.

use chrono::NaiveDate;

use crate::settings::NoteForDate;

/// Return the entry registered for `today`, if any.
pub fn active(source: &[NoteForDate], today: NaiveDate) -> Option<&NoteForDate> {
    source.iter().find(|entry| entry.date == today)
}

/// Whether any entry is registered for `today`.
pub fn exists(source: &[NoteForDate], today: NaiveDate) -> bool {
    active(source, today).is_some()
}
