//! # Error Types
//!
//! Domain-specific error taxonomy for emi-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  emi-core errors (this file)                                           │
//! │  └── EmiError         - Normalization and engine failures              │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: EmiError ──► CliError ──► stderr / JSON                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors carry the offending field and the violated bound
//! 3. Errors are enum variants, never String
//! 4. Messages are deterministic so the calling layer (and tests) can
//!    reproduce them exactly

use std::fmt;
use thiserror::Error;

// =============================================================================
// Field Kind
// =============================================================================

/// Which input field a normalization rule applies to.
///
/// Carried inside [`EmiError`] so a caller can highlight the field that
/// failed without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The borrowed amount.
    Principal,
    /// Annual interest rate, in percent.
    AnnualRate,
    /// Loan duration (years or months).
    Tenure,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Principal => "loan amount",
            FieldKind::AnnualRate => "interest rate",
            FieldKind::Tenure => "tenure",
        };
        f.write_str(name)
    }
}

// =============================================================================
// EMI Error
// =============================================================================

/// Normalization and calculation errors.
///
/// Every variant is recoverable at the call boundary: the engine never
/// panics for control flow, it returns the rule that was violated and the
/// caller decides the user-visible presentation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmiError {
    /// The cleaned input text was empty or did not parse as a number.
    #[error("{field} is not a valid number")]
    NotANumber { field: FieldKind },

    /// Value must be strictly greater than zero.
    #[error("{field} must be a positive number")]
    NotPositive { field: FieldKind },

    /// Value is positive but under the business floor.
    ///
    /// ## When This Occurs
    /// - Loan amount under ₹1,000 (e.g. user typed "500")
    #[error("{field} must be at least ₹{min}")]
    BelowMinimum { field: FieldKind, min: f64 },

    /// Value falls outside the accepted band.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: FieldKind, min: f64, max: f64 },

    /// Effective tenure in months is zero or negative.
    #[error("tenure must be greater than 0")]
    InvalidTenure,

    /// The compound factor `(1 + r)^n` degenerated (not finite, or ≤ 1),
    /// so the EMI formula would divide by zero or produce garbage.
    #[error("tenure is too small for calculation")]
    TenureTooSmall,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with EmiError.
pub type CoreResult<T> = Result<T, EmiError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EmiError::BelowMinimum {
            field: FieldKind::Principal,
            min: 1000.0,
        };
        assert_eq!(err.to_string(), "loan amount must be at least ₹1000");

        let err = EmiError::OutOfRange {
            field: FieldKind::AnnualRate,
            min: 0.1,
            max: 50.0,
        };
        assert_eq!(err.to_string(), "interest rate must be between 0.1 and 50");

        let err = EmiError::NotANumber {
            field: FieldKind::Tenure,
        };
        assert_eq!(err.to_string(), "tenure is not a valid number");
    }

    #[test]
    fn test_guard_messages() {
        assert_eq!(
            EmiError::InvalidTenure.to_string(),
            "tenure must be greater than 0"
        );
        assert_eq!(
            EmiError::TenureTooSmall.to_string(),
            "tenure is too small for calculation"
        );
    }

    #[test]
    fn test_errors_compare_by_value() {
        // The calling layer matches on variants; equality must be structural.
        let a = EmiError::NotPositive {
            field: FieldKind::Principal,
        };
        let b = EmiError::NotPositive {
            field: FieldKind::Principal,
        };
        assert_eq!(a, b);
    }
}
