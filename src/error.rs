//! Error Types and Handling
//!
//! Error types for the nearcache crate, with a crate-local [`Result`] alias.
//!
//! # Example
//!
//! ```rust
//! use nearcache::error::{NearcacheError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NearcacheError::ConfigField {
//!         name: "eps".to_string(),
//!         reason: "expected a number".to_string(),
//!     })
//! }
//!
//! if let Err(NearcacheError::ConfigField { name, .. }) = example_operation() {
//!     println!("bad config field: {}", name);
//! }
//! ```

use thiserror::Error;

/// Error types for nearcache operations
#[must_use]
#[derive(Error, Debug)]
pub enum NearcacheError {
    /// Key shapes do not agree where identical shapes are required
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape the operation required
        expected: Vec<usize>,
        /// Shape that was supplied
        got: Vec<usize>,
    },

    /// Key array has no elements
    #[error("Key array is empty")]
    EmptyKey,

    /// Key data length does not match the product of the declared shape
    #[error("Key shape {shape:?} implies {expected} elements, got {got}")]
    ShapeDataMismatch {
        /// Declared shape
        shape: Vec<usize>,
        /// Element count the shape implies
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// A named configuration field is missing or has the wrong type
    #[error("Config field '{name}': {reason}")]
    ConfigField {
        /// Field name as looked up
        name: String,
        /// What went wrong
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for nearcache operations
pub type Result<T> = std::result::Result<T, NearcacheError>;
