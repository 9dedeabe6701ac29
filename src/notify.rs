//! User-facing notifications
//!
//! The planner reports template problems through this trait instead of
//! reaching for a global UI object; the CLI injects a stderr sink, tests
//! inject a recorder.

/// A sink for transient user-facing messages; fire-and-forget.
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Prints notifications to stderr.
pub struct StderrNotify;

impl Notify for StderrNotify {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
