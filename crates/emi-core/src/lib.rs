//! # emi-core: Pure Calculation Logic for EMI Calc
//!
//! This crate is the **heart** of EMI Calc. It contains the EMI (equated
//! monthly installment) engine and the input-normalization rules that feed
//! it, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        EMI Calc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Collaborators (UI / CLI)                        │   │
//! │  │    Input fields ──► Calculate ──► Result panel ──► Widgets     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw text in, payload out               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ emi-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ normalize │  │  engine   │  │  format   │  │   │
//! │  │   │ LoanInput │  │  cleanup  │  │  compute  │  │ ₹ render  │  │   │
//! │  │   │ Breakdown │  │  ranges   │  │  guards   │  │ grouping  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS • DETERMINISTIC           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LoanInput, EmiBreakdown, TenureUnit)
//! - [`normalize`] - Raw-text cleanup, parsing, and range validation
//! - [`engine`] - The EMI formula with its numeric guards
//! - [`error`] - Domain error taxonomy
//! - [`format`] - Render-time currency/percent formatting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, terminal access is FORBIDDEN here
//! 3. **Exact Internals**: The engine never rounds; whole-rupee rounding
//!    happens only in [`format`] at render time, so repeated calls are
//!    bit-for-bit reproducible and rounding never accumulates
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use emi_core::{compute, normalize, FieldKind};
//!
//! // Raw text straight from an input field, grouping and all
//! let principal = normalize("₹1,00,000", FieldKind::Principal).unwrap();
//! assert_eq!(principal, 100000.0);
//!
//! let breakdown = compute(principal, 10.0, 12.0).unwrap();
//! assert!((breakdown.emi - 8791.59).abs() < 0.01);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod format;
pub mod normalize;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use emi_core::EmiBreakdown` instead of
// `use emi_core::types::EmiBreakdown`

pub use engine::compute;
pub use error::{CoreResult, EmiError, FieldKind};
pub use normalize::normalize;
pub use types::{EmiBreakdown, LoanInput, TenureUnit};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum loan amount accepted, in rupees.
///
/// ## Business Reason
/// Loans below this floor are not offered; it also catches inputs where a
/// user typed the amount in thousands ("100" meaning one lakh).
pub const MIN_PRINCIPAL: f64 = 1000.0;

/// Lowest annual interest rate accepted, in percent.
pub const MIN_ANNUAL_RATE: f64 = 0.1;

/// Highest annual interest rate accepted, in percent.
///
/// ## Business Reason
/// Anything above 50% p.a. is almost certainly a typo (e.g. entering the
/// monthly rate, or basis points). Rejecting early beats producing an EMI
/// nobody would recognize.
pub const MAX_ANNUAL_RATE: f64 = 50.0;

/// Shortest tenure accepted, in months.
pub const MIN_TENURE_MONTHS: u32 = 1;

/// Longest tenure accepted, in months (50 years).
///
/// ## Business Reason
/// Caps the compound factor `(1 + r)^n` well inside f64 range and matches
/// the longest tenor any lender in the target market writes.
pub const MAX_TENURE_MONTHS: u32 = 600;
