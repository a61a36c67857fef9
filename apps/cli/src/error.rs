//! # CLI Error Type
//!
//! Unified user-facing error for the `emi` binary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in EMI Calc                             │
//! │                                                                         │
//! │  emi-core                        emi-cli                                │
//! │  ────────                        ───────                                │
//! │                                                                         │
//! │  EmiError::BelowMinimum ───► CliError {                                 │
//! │                                code: BELOW_MINIMUM,                     │
//! │                                message: "loan amount must be at         │
//! │                                          least ₹1000"                   │
//! │                              }                                          │
//! │                                   │                                     │
//! │                                   ├── default: stderr, exit 1           │
//! │                                   └── --json:  JSON object, exit 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `code` is machine-readable for scripts wrapping the binary; the
//! `message` is the deterministic text produced by the core taxonomy.

use std::fmt;

use emi_core::EmiError;
use serde::Serialize;

/// Error surfaced to the user when a calculation cannot be made.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Machine-readable error codes, one per core error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotANumber,
    NotPositive,
    BelowMinimum,
    OutOfRange,
    InvalidTenure,
    TenureTooSmall,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::NotANumber => "NOT_A_NUMBER",
            ErrorCode::NotPositive => "NOT_POSITIVE",
            ErrorCode::BelowMinimum => "BELOW_MINIMUM",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidTenure => "INVALID_TENURE",
            ErrorCode::TenureTooSmall => "TENURE_TOO_SMALL",
            ErrorCode::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

impl From<EmiError> for CliError {
    fn from(err: EmiError) -> Self {
        let code = match err {
            EmiError::NotANumber { .. } => ErrorCode::NotANumber,
            EmiError::NotPositive { .. } => ErrorCode::NotPositive,
            EmiError::BelowMinimum { .. } => ErrorCode::BelowMinimum,
            EmiError::OutOfRange { .. } => ErrorCode::OutOfRange,
            EmiError::InvalidTenure => ErrorCode::InvalidTenure,
            EmiError::TenureTooSmall => ErrorCode::TenureTooSmall,
        };
        CliError {
            code,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError {
            code: ErrorCode::Internal,
            message: format!("failed to serialize result: {err}"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
