//! Error Types
//!
//! This module defines the error types used throughout the animation runtime.
//!
//! # Overview
//!
//! The main error type [`MarrowError`] covers the fatal failure modes of the
//! load path: unresolvable assets, scene import failures, malformed
//! state-machine documents. Recoverable conditions (a clip referencing a bone
//! the mesh does not have, an unknown state-machine variable) are not errors;
//! they are logged and execution continues with a safe default.
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MarrowError>`.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Marrow animation runtime.
///
/// Every variant represents an authoring-time data error that cannot be
/// meaningfully recovered from mid-frame; callers of the load and tick entry
/// points are expected to treat these as fatal.
#[derive(Error, Debug)]
pub enum MarrowError {
    // ========================================================================
    // Asset Resolution & Import Errors
    // ========================================================================
    /// No file path is registered for the requested GUID.
    #[error("Asset not found: {0}")]
    AssetNotFound(Uuid),

    /// The scene importer failed on an absent or corrupt file.
    #[error("Scene import failed for '{path}': {reason}")]
    ImportFailed {
        /// Path handed to the importer
        path: String,
        /// Importer diagnostic
        reason: String,
    },

    /// The imported file yielded no root node.
    #[error("Imported scene has no root node: '{0}'")]
    EmptyScene(String),

    /// The file holds fewer clips than the requested clip index.
    #[error("Clip index out of bounds: requested clip {index} but the file holds {available}")]
    ClipIndexOutOfBounds {
        /// Requested clip index within the file
        index: usize,
        /// Number of clips the file actually holds
        available: usize,
    },

    // ========================================================================
    // State Machine Definition Errors
    // ========================================================================
    /// A transition references a state index outside the defined states.
    #[error("State machine transition references state {state} but only {count} states are defined")]
    StateOutOfBounds {
        /// Referenced state index
        state: usize,
        /// Number of defined states
        count: usize,
    },

    /// A condition references a variable index outside the defined variables.
    #[error("State machine condition references variable {index} but only {count} variables are defined")]
    VariableOutOfBounds {
        /// Referenced variable index
        index: usize,
        /// Number of defined variables
        count: usize,
    },

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// State-machine document parse error (covers unknown comparison
    /// operators, which deserialize as invalid enum variants).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, MarrowError>`.
pub type Result<T> = std::result::Result<T, MarrowError>;
