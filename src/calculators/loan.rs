//! Loan EMI calculator

use serde::{Deserialize, Serialize};

use super::round0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LoanInput {
    pub principal: f64,
    /// Annual interest rate in percent, e.g. `10.5`.
    pub annual_rate: f64,
    pub term_years: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LoanResult {
    pub monthly_emi: f64,
    pub total_interest: f64,
    pub total_payable: f64,
}

/// Equated monthly installment for a reducing-balance loan.
///
/// Requires a positive principal, rate and term. A zero rate is declined.
pub fn loan_emi(input: &LoanInput) -> Option<LoanResult> {
    let LoanInput { principal, annual_rate, term_years } = *input;
    if !(principal > 0.0 && annual_rate > 0.0 && term_years > 0.0) {
        return None;
    }

    let m = annual_rate / 1200.0;
    let n = term_years * 12.0;
    let growth = (1.0 + m).powf(n);

    let emi = principal * m * growth / (growth - 1.0);
    if !emi.is_finite() {
        return None;
    }
    let total_payable = emi * n;
    let total_interest = total_payable - principal;

    Some(LoanResult {
        monthly_emi: round0(emi),
        total_interest: round0(total_interest),
        total_payable: round0(total_payable),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_year_at_ten_percent() {
        let result = loan_emi(&LoanInput {
            principal: 100_000.0,
            annual_rate: 10.0,
            term_years: 1.0,
        })
        .unwrap();

        assert_eq!(result.monthly_emi, 8792.0);
        assert_eq!(result.total_payable, 105_499.0);
        assert_eq!(result.total_interest, 5_499.0);

        // Internal consistency within rounding of the per-month figure.
        assert!((result.monthly_emi * 12.0 - result.total_payable).abs() <= 6.0);
        assert_eq!(result.total_payable - 100_000.0, result.total_interest);
    }

    #[test]
    fn test_longer_term_costs_more_interest() {
        let short = loan_emi(&LoanInput { principal: 500_000.0, annual_rate: 9.0, term_years: 3.0 }).unwrap();
        let long = loan_emi(&LoanInput { principal: 500_000.0, annual_rate: 9.0, term_years: 7.0 }).unwrap();
        assert!(long.monthly_emi < short.monthly_emi);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn test_out_of_domain() {
        assert!(loan_emi(&LoanInput { principal: 0.0, annual_rate: 10.0, term_years: 1.0 }).is_none());
        assert!(loan_emi(&LoanInput { principal: 1000.0, annual_rate: 0.0, term_years: 1.0 }).is_none());
        assert!(loan_emi(&LoanInput { principal: 1000.0, annual_rate: 10.0, term_years: -2.0 }).is_none());
        assert!(loan_emi(&LoanInput { principal: f64::NAN, annual_rate: 10.0, term_years: 1.0 }).is_none());
    }
}
