//! Route handlers and shared validation helpers.

pub mod health;
pub mod signup;

// common functions for the handlers
use regex::Regex;

/// Normalize an email for lookup/uniqueness checks.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
pub fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}

/// Check the raw password against the configured minimum length.
pub fn valid_password(password: &str, min_length: usize) -> bool {
    password.len() >= min_length
}

/// Display names must be non-empty after trimming.
pub fn valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
