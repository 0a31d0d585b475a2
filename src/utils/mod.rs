//! Utility functions: age math and user-facing strings.

pub mod age;
pub mod strings;

pub use age::calculate_age;
pub use strings::{EnglishStrings, Strings};
