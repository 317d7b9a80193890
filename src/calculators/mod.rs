//! Financial calculators
//!
//! Pure, deterministic functions. Each returns `None` when its inputs are
//! outside the formula's domain; callers treat that as "not computed".

pub mod break_even;
pub mod gst;
pub mod loan;
pub mod working_capital;

pub use break_even::{break_even, BreakEvenInput, BreakEvenResult};
pub use gst::{gst_split, GstInput, GstResult, GstSlab};
pub use loan::{loan_emi, LoanInput, LoanResult};
pub use working_capital::{working_capital, LiquidityTier, WorkingCapitalInput, WorkingCapitalResult};

/// Round to the nearest whole currency unit, halves toward positive infinity.
pub(crate) fn round0(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to two decimal places (paise), halves toward positive infinity.
pub(crate) fn round2(value: f64) -> f64 {
    round0(value * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round0(8791.59), 8792.0);
        assert_eq!(round2(152.542372), 152.54);
        assert_eq!(round2(180.0), 180.0);
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round0(2.5), 3.0);
        assert_eq!(round0(-20.5), -20.0);
        assert_eq!(round0(-20.6), -21.0);
        assert_eq!(round2(-0.125), -0.12);
    }
}
