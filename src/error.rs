//! Error types for the event hub.
//!
//! The dispatch path itself never fails: a subscription whose event type
//! does not match a published event is skipped, and unsubscribing an unknown
//! identifier is a no-op. The only fallible surface is logging setup, so the
//! taxonomy stays small.

/// Errors surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or rejected configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
