//! Error types for the fallible helpers around the accessibility engine.
//!
//! The configuration store, mutator and style generator never fail. Errors
//! only come from parsing external data: hex colors, stored profiles,
//! category trees, image headers and prediction responses.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A color string was not a valid `#rgb` / `#rrggbb` hex code.
    #[error("invalid color `{input}`: {reason}")]
    Color { input: String, reason: String },

    /// A serialized accessibility profile could not be read or written.
    #[error("invalid accessibility profile: {0}")]
    Profile(#[from] serde_json::Error),

    /// A product category tree was not a list of `>>`-separated paths.
    #[error("malformed category tree `{0}`")]
    CategoryTree(String),

    /// Image dimensions could not be decoded.
    #[error("unreadable image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The classification service reported a failure.
    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
