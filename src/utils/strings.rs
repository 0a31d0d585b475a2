//! User-facing strings behind a seam.
//!
//! The presentation layer owns localization; controllers only ever ask this
//! trait for finished text. Keeping it a trait lets tests count exactly how
//! often an age string is formatted.

/// Provider of localized display strings.
pub trait Strings: Send + Sync {
    /// Format a whole-year age for display, e.g. "31 years".
    fn age_string(&self, age: i32) -> String;

    /// The generic message shown when a load fails. The underlying failure
    /// detail goes to the log, never to the user.
    fn error_message(&self) -> String;
}

/// Built-in English strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishStrings;

impl Strings for EnglishStrings {
    fn age_string(&self, age: i32) -> String {
        format!("{} years", age)
    }

    fn error_message(&self) -> String {
        "Could not load users".to_string()
    }
}
