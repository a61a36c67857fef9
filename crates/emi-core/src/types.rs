//! # Domain Types
//!
//! Core domain types for EMI Calc.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   LoanInput     │   │  EmiBreakdown   │   │   TenureUnit    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  principal      │   │  emi            │   │  Year           │       │
//! │  │  annual_rate_%  │   │  total_interest │   │  Month          │       │
//! │  │  tenure_value   │   │  total_payment  │   └─────────────────┘       │
//! │  │  tenure_unit    │   │  principal      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  LoanInput is built fresh from raw text per calculation;               │
//! │  EmiBreakdown is derived, immutable, and never retained by the core.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine;
use crate::error::{CoreResult, EmiError, FieldKind};
use crate::normalize::normalize;
use crate::{MAX_TENURE_MONTHS, MIN_TENURE_MONTHS};

// =============================================================================
// Tenure Unit
// =============================================================================

/// Unit the user expressed the tenure in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TenureUnit {
    /// Tenure given in years; converted to months before calculation.
    Year,
    /// Tenure given in months; used as-is.
    Month,
}

impl TenureUnit {
    /// Converts a tenure value in this unit to months.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::TenureUnit;
    ///
    /// assert_eq!(TenureUnit::Year.to_months(5), 60);
    /// assert_eq!(TenureUnit::Month.to_months(5), 5);
    /// ```
    #[inline]
    pub const fn to_months(self, value: u32) -> u32 {
        match self {
            TenureUnit::Year => value * 12,
            TenureUnit::Month => value,
        }
    }
}

// =============================================================================
// Loan Input
// =============================================================================

/// A validated calculation request.
///
/// Constructing one through [`LoanInput::from_raw`] guarantees every field
/// has passed normalization, including the month-count bound *after* unit
/// conversion (so 60 years is rejected even though "60" is a fine raw
/// tenure value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanInput {
    /// The borrowed amount, in rupees.
    pub principal: f64,

    /// Annual interest rate, in percent (10.0 = 10% p.a.).
    pub annual_rate_percent: f64,

    /// Tenure as entered, in `tenure_unit` units.
    pub tenure_value: u32,

    /// Unit of `tenure_value`.
    pub tenure_unit: TenureUnit,
}

impl LoanInput {
    /// Builds a `LoanInput` from raw field text.
    ///
    /// Each field goes through [`normalize`]; the first failing field wins
    /// and is identified in the returned error. The tenure must be a whole
    /// number, and the *final month count* must land in [1, 600].
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::{LoanInput, TenureUnit};
    ///
    /// let input = LoanInput::from_raw("₹1,00,000", "10", "1", TenureUnit::Year).unwrap();
    /// assert_eq!(input.principal, 100000.0);
    /// assert_eq!(input.tenure_months(), 12);
    ///
    /// // 60 raw passes the [1, 600] band, but 60 years = 720 months does not
    /// assert!(LoanInput::from_raw("100000", "10", "60", TenureUnit::Year).is_err());
    /// ```
    pub fn from_raw(
        amount: &str,
        rate: &str,
        tenure: &str,
        unit: TenureUnit,
    ) -> CoreResult<LoanInput> {
        let principal = normalize(amount, FieldKind::Principal)?;
        let annual_rate_percent = normalize(rate, FieldKind::AnnualRate)?;
        let tenure_raw = normalize(tenure, FieldKind::Tenure)?;

        // Tenure is a count, not a measure: "1.5 years" is rejected rather
        // than silently truncated.
        if tenure_raw.fract() != 0.0 {
            return Err(EmiError::InvalidTenure);
        }
        let tenure_value = tenure_raw as u32;

        let months = unit.to_months(tenure_value);
        if months < MIN_TENURE_MONTHS || months > MAX_TENURE_MONTHS {
            return Err(EmiError::OutOfRange {
                field: FieldKind::Tenure,
                min: MIN_TENURE_MONTHS as f64,
                max: MAX_TENURE_MONTHS as f64,
            });
        }

        Ok(LoanInput {
            principal,
            annual_rate_percent,
            tenure_value,
            tenure_unit: unit,
        })
    }

    /// Tenure converted to months.
    #[inline]
    pub const fn tenure_months(&self) -> u32 {
        self.tenure_unit.to_months(self.tenure_value)
    }

    /// Runs the EMI engine on this input.
    #[inline]
    pub fn compute(&self) -> CoreResult<EmiBreakdown> {
        engine::compute(
            self.principal,
            self.annual_rate_percent,
            self.tenure_months() as f64,
        )
    }
}

// =============================================================================
// EMI Breakdown
// =============================================================================

/// The result payload of one calculation.
///
/// ## Invariants
/// - `emi >= 0`, `total_interest >= 0`, `total_payment >= principal`
/// - Values are exact (unrounded) f64; whole-rupee rounding happens only
///   at render time in [`crate::format`]
///
/// ## Serialization
/// This is the exact payload broadcast to rendering collaborators:
/// ```json
/// { "emi": 8791.58, "totalInterest": 5499.06,
///   "totalPayment": 105499.06, "principal": 100000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmiBreakdown {
    /// Fixed monthly installment.
    pub emi: f64,

    /// Interest paid over the whole tenure.
    pub total_interest: f64,

    /// Principal plus total interest.
    pub total_payment: f64,

    /// The borrowed amount, echoed back for widgets that show the split.
    pub principal: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenure_unit_conversion() {
        assert_eq!(TenureUnit::Year.to_months(1), 12);
        assert_eq!(TenureUnit::Year.to_months(50), 600);
        assert_eq!(TenureUnit::Month.to_months(18), 18);
    }

    #[test]
    fn test_from_raw_happy_path() {
        let input = LoanInput::from_raw("₹5,00,000", "8.5", "5", TenureUnit::Year).unwrap();
        assert_eq!(input.principal, 500000.0);
        assert_eq!(input.annual_rate_percent, 8.5);
        assert_eq!(input.tenure_value, 5);
        assert_eq!(input.tenure_months(), 60);
    }

    #[test]
    fn test_from_raw_identifies_failing_field() {
        let err = LoanInput::from_raw("abc", "10", "12", TenureUnit::Month).unwrap_err();
        assert_eq!(
            err,
            EmiError::NotANumber {
                field: FieldKind::Principal
            }
        );

        let err = LoanInput::from_raw("100000", "55", "12", TenureUnit::Month).unwrap_err();
        assert!(matches!(
            err,
            EmiError::OutOfRange {
                field: FieldKind::AnnualRate,
                ..
            }
        ));
    }

    #[test]
    fn test_from_raw_checks_months_after_conversion() {
        // 50 years = 600 months: the last tenure that fits
        assert!(LoanInput::from_raw("100000", "10", "50", TenureUnit::Year).is_ok());

        // 51 years = 612 months: raw value 51 passes, converted count fails
        let err = LoanInput::from_raw("100000", "10", "51", TenureUnit::Year).unwrap_err();
        assert!(matches!(
            err,
            EmiError::OutOfRange {
                field: FieldKind::Tenure,
                ..
            }
        ));
    }

    #[test]
    fn test_from_raw_rejects_fractional_tenure() {
        let err = LoanInput::from_raw("100000", "10", "1.5", TenureUnit::Year).unwrap_err();
        assert_eq!(err, EmiError::InvalidTenure);
    }

    #[test]
    fn test_breakdown_payload_shape() {
        let breakdown = EmiBreakdown {
            emi: 8333.0,
            total_interest: 0.0,
            total_payment: 500000.0,
            principal: 500000.0,
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert!(json.get("totalInterest").is_some());
        assert!(json.get("totalPayment").is_some());
        assert!(json.get("total_interest").is_none());
    }
}
