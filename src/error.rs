//! Error types for rtp-particles.
//!
//! The simulation itself is infallible: a missing particle type is reported
//! as `None`, and a non-positive emission frequency simply disables emission.
//! Errors only arise when particle type definitions are loaded from outside
//! the program.

use thiserror::Error;

/// Errors that can occur while loading particle type definitions.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a definitions file from disk.
    #[error("failed to read particle type definitions: {0}")]
    Io(#[from] std::io::Error),
    /// The definitions were not valid JSON or did not match the schema.
    #[error("failed to parse particle type definitions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
