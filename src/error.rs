//! Error types for strata.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for strata operations.
pub type Result<T> = std::result::Result<T, StrataError>;

/// Errors that can occur in the engine and its surrounding stores.
#[derive(Error, Debug)]
pub enum StrataError {
    // Shape Errors
    #[error("Shape mismatch for {what}: got {got}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    // Construction Errors
    #[error("Invalid dimension: {dimension} (must be positive)")]
    InvalidDimension { dimension: usize },

    #[error("Invalid model shape: {layer_count} groups x {sub_layer_count} layers (both must be positive)")]
    InvalidShape {
        layer_count: usize,
        sub_layer_count: usize,
    },

    #[error("Model too large: {requested} layers requested, ceiling is {ceiling}")]
    ModelTooLarge { requested: usize, ceiling: usize },

    // State File Errors
    #[error("State file not found: {path}")]
    StateNotFound { path: PathBuf },

    #[error("Failed to read state file: {path}: {source}")]
    StateReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write state file: {path}: {source}")]
    StateWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt state file: {path}: {reason}")]
    CorruptState { path: PathBuf, reason: String },

    // Store Errors
    #[error("Failed to read store: {path}: {source}")]
    StoreReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store: {path}: {source}")]
    StoreWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Config Errors
    #[error("Failed to read config: {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParseError(#[from] serde_json::Error),
}
