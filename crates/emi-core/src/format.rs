//! # Render Formatting
//!
//! Turns exact engine output into display text. This is the ONLY place
//! rupee rounding happens - the engine hands over unrounded f64 values and
//! collaborators format them here, so rounding never feeds back into a
//! calculation.
//!
//! Amounts use Indian digit grouping: the last three digits form one group,
//! every group above that has two (`1234567` → `₹12,34,567`).

use std::fmt::Write;

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// ## Example
/// ```rust
/// use emi_core::format::format_inr;
///
/// assert_eq!(format_inr(100000.0), "₹1,00,000");
/// assert_eq!(format_inr(8791.59), "₹8,792");
/// assert_eq!(format_inr(500.0), "₹500");
/// ```
pub fn format_inr(value: f64) -> String {
    let rupees = value.round() as i64;
    let sign = if rupees < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(rupees.unsigned_abs()))
}

/// Formats a rate as a percentage with two decimals.
///
/// ## Example
/// ```rust
/// use emi_core::format::format_percent;
///
/// assert_eq!(format_percent(10.0), "10.00%");
/// assert_eq!(format_percent(8.349), "8.35%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Inserts Indian-style grouping commas into a whole number.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    // Last three digits stand alone; the rest pairs off from the right.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    let first = head.len() % 2;
    if first == 1 {
        out.push_str(&head[..1]);
    }
    let mut i = first;
    while i < head.len() {
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(&head[i..i + 2]);
        i += 2;
    }

    let _ = write!(out, ",{tail}");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_steps() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(99999.0), "₹99,999");
        assert_eq!(format_inr(100000.0), "₹1,00,000");
        assert_eq!(format_inr(1234567.0), "₹12,34,567");
        assert_eq!(format_inr(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(8791.59), "₹8,792");
        assert_eq!(format_inr(8791.49), "₹8,791");
        assert_eq!(format_inr(8333.333333), "₹8,333");
    }

    #[test]
    fn test_render_round_trips_through_normalize() {
        use crate::error::FieldKind;
        use crate::normalize::normalize;

        // A rendered amount pasted back into the amount field parses cleanly
        let rendered = format_inr(100000.0);
        assert_eq!(rendered, "₹1,00,000");
        assert_eq!(normalize(&rendered, FieldKind::Principal).unwrap(), 100000.0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(0.1), "0.10%");
        assert_eq!(format_percent(50.0), "50.00%");
    }
}
