//! # Anagrafe (User Registration)
//!
//! `anagrafe` is the user registration front door. It accepts signup requests,
//! enforces email uniqueness, hashes passwords with `bcrypt`, and triggers
//! delivery of a one-time passcode so the new account can be verified.
//!
//! ## Registration Flow
//!
//! - **Validation:** The payload is checked before any database access. Emails
//!   are trimmed and lowercased, passwords must satisfy a minimum length, and
//!   the display name must be non-empty.
//! - **Uniqueness:** Emails are unique. A lookup runs before the insert, and
//!   the unique index on `accounts.email` is the final arbiter when two
//!   signups race; both paths report the same duplicate error.
//! - **OTP Dispatch:** After the account is stored, a one-time-passcode
//!   request is posted to the configured dispatch service. Delivery is
//!   best-effort; a dispatch failure never rolls back the created account.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
