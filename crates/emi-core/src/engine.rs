//! # EMI Engine
//!
//! The amortization formula and its numeric guards.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute(principal, annual_rate_percent, tenure_months)                │
//! │       │                                                                 │
//! │       ├── principal not finite or <= 0 ──► NotPositive                 │
//! │       ├── rate not finite or < 0 ───────► OutOfRange                   │
//! │       ├── tenure not finite or <= 0 ────► InvalidTenure                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  monthly_rate = rate / 12 / 100                                         │
//! │       │                                                                 │
//! │       ├── monthly_rate == 0 ──► emi = P / n, interest = 0              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compound = (1 + monthly_rate)^n                                        │
//! │       │                                                                 │
//! │       ├── not finite or <= 1 ──► TenureTooSmall                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  emi = P · r · compound / (compound - 1)                                │
//! │  total_payment = emi · n                                                │
//! │  total_interest = total_payment - P                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine re-validates its arguments even though [`crate::normalize`]
//! should already guarantee them: it has to stand on its own when called
//! directly with programmatic values.
//!
//! Results are exact f64 - no rounding happens here. Rounding to whole
//! rupees is a render-time concern ([`crate::format`]), which keeps
//! repeated calls bit-for-bit reproducible.

use crate::error::{CoreResult, EmiError, FieldKind};
use crate::types::EmiBreakdown;
use crate::MAX_ANNUAL_RATE;

/// Computes the EMI breakdown for a loan.
///
/// ## Arguments
/// * `principal` - borrowed amount, must be finite and > 0
/// * `annual_rate_percent` - annual rate in percent, must be finite and >= 0
///   (zero is legal here: promotional zero-interest loans divide evenly)
/// * `tenure_months` - number of monthly installments, must be finite and > 0
///
/// ## Example
/// ```rust
/// use emi_core::compute;
///
/// let b = compute(100000.0, 10.0, 12.0).unwrap();
/// assert!((b.emi - 8791.59).abs() < 0.01);
///
/// // Zero-interest loans divide the principal evenly
/// let b = compute(500000.0, 0.0, 60.0).unwrap();
/// assert_eq!(b.total_interest, 0.0);
/// assert_eq!(b.total_payment, 500000.0);
/// ```
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: f64,
) -> CoreResult<EmiBreakdown> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(EmiError::NotPositive {
            field: FieldKind::Principal,
        });
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(EmiError::OutOfRange {
            field: FieldKind::AnnualRate,
            min: 0.0,
            max: MAX_ANNUAL_RATE,
        });
    }
    if !tenure_months.is_finite() || tenure_months <= 0.0 {
        return Err(EmiError::InvalidTenure);
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;

    if monthly_rate == 0.0 {
        let emi = principal / tenure_months;
        return Ok(EmiBreakdown {
            emi,
            total_interest: 0.0,
            total_payment: principal,
            principal,
        });
    }

    // EMI formula: P · r · (1 + r)^n / ((1 + r)^n - 1)
    let compound = (1.0 + monthly_rate).powf(tenure_months);

    // A degenerate compound factor would make the denominator zero or the
    // result NaN/∞: either n is far too small for the rate to register in
    // f64, or so large the power overflowed.
    if !compound.is_finite() || compound <= 1.0 {
        return Err(EmiError::TenureTooSmall);
    }

    let emi = principal * monthly_rate * compound / (compound - 1.0);
    let total_payment = emi * tenure_months;
    let total_interest = total_payment - principal;

    Ok(EmiBreakdown {
        emi,
        total_interest,
        total_payment,
        principal,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_ten_percent_one_year() {
        // 1 lakh at 10% p.a. over 12 months
        let b = compute(100000.0, 10.0, 12.0).unwrap();
        assert!((b.emi - 8791.59).abs() < 0.01, "emi was {}", b.emi);
        assert!(
            (b.total_payment - 105499.1).abs() < 0.1,
            "total_payment was {}",
            b.total_payment
        );
        assert!(
            (b.total_interest - 5499.1).abs() < 0.1,
            "total_interest was {}",
            b.total_interest
        );
        assert_eq!(b.principal, 100000.0);
    }

    #[test]
    fn test_zero_rate_divides_principal_evenly() {
        let b = compute(500000.0, 0.0, 60.0).unwrap();
        // Exact equalities: the zero-rate branch is pure division
        assert_eq!(b.emi, 500000.0 / 60.0);
        assert!((b.emi - 8333.33).abs() < 0.01);
        assert_eq!(b.total_interest, 0.0);
        assert_eq!(b.total_payment, 500000.0);
    }

    #[test]
    fn test_deterministic_bit_for_bit() {
        let a = compute(250000.0, 7.25, 84.0).unwrap();
        let b = compute(250000.0, 7.25, 84.0).unwrap();
        assert_eq!(a.emi.to_bits(), b.emi.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
        assert_eq!(a.total_payment.to_bits(), b.total_payment.to_bits());
    }

    #[test]
    fn test_emi_monotonic_in_rate() {
        // Holding P and n fixed, a higher rate never lowers the EMI
        let mut previous = compute(100000.0, 0.0, 60.0).unwrap().emi;
        let mut rate = 0.1;
        while rate <= 50.0 {
            let emi = compute(100000.0, rate, 60.0).unwrap().emi;
            assert!(
                emi >= previous,
                "emi decreased from {previous} to {emi} at rate {rate}"
            );
            previous = emi;
            rate += 0.1;
        }
    }

    #[test]
    fn test_defensive_argument_guards() {
        assert!(matches!(
            compute(0.0, 10.0, 12.0),
            Err(EmiError::NotPositive { .. })
        ));
        assert!(matches!(
            compute(-1.0, 10.0, 12.0),
            Err(EmiError::NotPositive { .. })
        ));
        assert!(matches!(
            compute(f64::NAN, 10.0, 12.0),
            Err(EmiError::NotPositive { .. })
        ));
        assert!(matches!(
            compute(100000.0, -0.5, 12.0),
            Err(EmiError::OutOfRange { .. })
        ));
        assert_eq!(compute(100000.0, 10.0, 0.0), Err(EmiError::InvalidTenure));
        assert_eq!(compute(100000.0, 10.0, -12.0), Err(EmiError::InvalidTenure));
    }

    #[test]
    fn test_degenerate_tenure_never_yields_nan() {
        // So small that (1 + r)^n rounds to exactly 1.0 in f64
        let result = compute(100000.0, 10.0, 1e-300);
        assert_eq!(result, Err(EmiError::TenureTooSmall));

        // So large that the power overflows to infinity
        let result = compute(100000.0, 50.0, 1e6);
        assert_eq!(result, Err(EmiError::TenureTooSmall));
    }

    #[test]
    fn test_result_invariants_hold() {
        for (p, r, n) in [
            (1000.0, 0.1, 1.0),
            (100000.0, 10.0, 12.0),
            (500000.0, 50.0, 600.0),
            (2500000.0, 8.35, 240.0),
        ] {
            let b = compute(p, r, n).unwrap();
            assert!(b.emi > 0.0);
            assert!(b.total_interest >= 0.0);
            assert!(b.total_payment >= b.principal);
            assert_eq!(b.principal, p);
        }
    }

    #[test]
    fn test_single_month_tenure() {
        // One installment repays the principal plus one month of interest
        let b = compute(12000.0, 12.0, 1.0).unwrap();
        assert!((b.emi - 12120.0).abs() < 0.01);
        assert!((b.total_interest - 120.0).abs() < 0.01);
    }
}
