// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Raised by the store when a numeric input is not a positive finite
    /// number. The collection and persisted state are untouched.
    #[error("{field} must be a positive finite number (got {value})")]
    Validation { field: &'static str, value: f64 },

    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted record that cannot be reconstructed.
    #[error("Malformed stored workout: {0}")]
    Malformed(String),
}

impl AppError {
    /// Whether this is a user-input validation failure (as opposed to an
    /// I/O or data problem).
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}

/// Result type alias for store and storage operations.
pub type Result<T> = std::result::Result<T, AppError>;
