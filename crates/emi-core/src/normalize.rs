//! # Input Normalization
//!
//! Turns raw field text into validated numbers.
//!
//! ## Normalization Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Normalization Pipeline                              │
//! │                                                                         │
//! │  "₹1,00,000"                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Strip everything that is not an ASCII digit or '.'                     │
//! │       │         "100000"                                                │
//! │       ▼                                                                 │
//! │  Parse as f64 ── empty / garbage / non-finite ──► NotANumber           │
//! │       │         100000.0                                                │
//! │       ▼                                                                 │
//! │  Field rule ──── violated ──► NotPositive / BelowMinimum / OutOfRange  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(100000.0)                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency symbols, digit-grouping commas, and stray whitespace all fall
//! out in the strip step, so text copied straight from a rendered result
//! round-trips back through `normalize`.

use crate::error::{CoreResult, EmiError, FieldKind};
use crate::{MAX_ANNUAL_RATE, MAX_TENURE_MONTHS, MIN_ANNUAL_RATE, MIN_PRINCIPAL, MIN_TENURE_MONTHS};

/// Normalizes raw field text to a validated number.
///
/// ## Rules
/// - Principal: must be > 0 and at least ₹1,000
/// - AnnualRate: must lie in [0.1, 50] inclusive
/// - Tenure: must lie in [1, 600]
///
/// ## Example
/// ```rust
/// use emi_core::{normalize, EmiError, FieldKind};
///
/// assert_eq!(normalize("₹1,00,000", FieldKind::Principal).unwrap(), 100000.0);
/// assert_eq!(
///     normalize("abc", FieldKind::Principal),
///     Err(EmiError::NotANumber { field: FieldKind::Principal })
/// );
/// ```
pub fn normalize(raw: &str, field: FieldKind) -> CoreResult<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return Err(EmiError::NotANumber { field });
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| EmiError::NotANumber { field })?;

    // "1.2.3" parses as Err above; this catches overflow-to-infinity inputs
    // like a wall of 9s.
    if !value.is_finite() {
        return Err(EmiError::NotANumber { field });
    }

    validate(value, field)?;
    Ok(value)
}

/// Applies the per-field range rule to an already-parsed value.
fn validate(value: f64, field: FieldKind) -> CoreResult<()> {
    match field {
        FieldKind::Principal => {
            if value <= 0.0 {
                return Err(EmiError::NotPositive { field });
            }
            if value < MIN_PRINCIPAL {
                return Err(EmiError::BelowMinimum {
                    field,
                    min: MIN_PRINCIPAL,
                });
            }
        }
        FieldKind::AnnualRate => {
            if !(MIN_ANNUAL_RATE..=MAX_ANNUAL_RATE).contains(&value) {
                return Err(EmiError::OutOfRange {
                    field,
                    min: MIN_ANNUAL_RATE,
                    max: MAX_ANNUAL_RATE,
                });
            }
        }
        FieldKind::Tenure => {
            let min = MIN_TENURE_MONTHS as f64;
            let max = MAX_TENURE_MONTHS as f64;
            if !(min..=max).contains(&value) {
                return Err(EmiError::OutOfRange { field, min, max });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
