//! # Error Types
//!
//! Structured error types for tubecheck_core. Every failure is local to a single
//! evaluation: nothing is retried and nothing is fatal to the caller, a failed
//! evaluation simply produces no verdict for that input set.
//!
//! ## Example
//!
//! ```rust
//! use tubecheck_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(outer_mm: f64, wall_mm: f64) -> CalcResult<()> {
//!     if wall_mm >= outer_mm / 2.0 {
//!         return Err(CalcError::invalid_geometry(
//!             outer_mm,
//!             wall_mm,
//!             "Wall thickness must be less than half the outer size",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(20.0, 10.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tubecheck_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for evaluation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Tube dimensions cannot describe a hollow section
    /// (non-positive size or thickness, or thickness ≥ half the outer size)
    #[error("Invalid geometry: outer {outer_size_mm} mm, wall {wall_thickness_mm} mm - {reason}")]
    InvalidGeometry {
        outer_size_mm: f64,
        wall_thickness_mm: f64,
        reason: String,
    },

    /// A derived area or second moment is zero or close enough to zero that
    /// dividing by it would produce an unbounded stress
    #[error("Degenerate geometry: {quantity} = {value:e}")]
    DegenerateGeometry { quantity: String, value: f64 },

    /// An input value is invalid (out of range, not finite, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing for the selected model
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value is not part of a fixed catalog while catalog enforcement is on
    #[error("Value {value} is not in the {catalog} catalog")]
    NotInCatalog { catalog: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(outer_size_mm: f64, wall_thickness_mm: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            outer_size_mm,
            wall_thickness_mm,
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(quantity: impl Into<String>, value: f64) -> Self {
        CalcError::DegenerateGeometry {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a NotInCatalog error
    pub fn not_in_catalog(catalog: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::NotInCatalog {
            catalog: catalog.into(),
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the tube dimensions themselves
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidGeometry { .. } | CalcError::DegenerateGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::NotInCatalog { .. } => "NOT_IN_CATALOG",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Reject NaN and infinities before they reach a formula.
pub(crate) fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}
