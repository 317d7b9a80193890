//! Working capital calculator

use serde::{Deserialize, Serialize};

use super::{round0, round2};

/// Either aggregate totals or their components may be supplied. A positive
/// aggregate takes precedence over the component sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WorkingCapitalInput {
    pub current_assets: Option<f64>,
    pub inventory: Option<f64>,
    pub accounts_receivable: Option<f64>,
    pub cash: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub accounts_payable: Option<f64>,
    pub short_term_debt: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityTier {
    Excellent,
    Good,
    Adequate,
    Low,
}

impl LiquidityTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 2.0 {
            LiquidityTier::Excellent
        } else if ratio >= 1.5 {
            LiquidityTier::Good
        } else if ratio >= 1.0 {
            LiquidityTier::Adequate
        } else {
            LiquidityTier::Low
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            LiquidityTier::Excellent => "Excellent liquidity position. Consider investing excess cash for better returns.",
            LiquidityTier::Good => "Good liquidity position. Adequate working capital for operations.",
            LiquidityTier::Adequate => "Adequate liquidity. Monitor cash flow closely and consider optimizing inventory.",
            LiquidityTier::Low => "Low liquidity. Consider improving collection, extending payment terms, or securing additional funding.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkingCapitalResult {
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub working_capital: f64,
    pub ratio: f64,
    pub tier: LiquidityTier,
    pub recommendation: String,
}

fn total(aggregate: Option<f64>, components: &[Option<f64>]) -> f64 {
    match aggregate {
        Some(value) if value > 0.0 => value,
        _ => components.iter().map(|c| c.unwrap_or(0.0)).sum(),
    }
}

/// Working capital and current ratio with a liquidity recommendation.
pub fn working_capital(input: &WorkingCapitalInput) -> Option<WorkingCapitalResult> {
    let assets = total(
        input.current_assets,
        &[input.inventory, input.accounts_receivable, input.cash],
    );
    let liabilities = total(
        input.current_liabilities,
        &[input.accounts_payable, input.short_term_debt],
    );

    if !(assets > 0.0 && liabilities > 0.0) || !assets.is_finite() || !liabilities.is_finite() {
        return None;
    }

    let ratio = assets / liabilities;
    let tier = LiquidityTier::from_ratio(ratio);

    Some(WorkingCapitalResult {
        current_assets: assets,
        current_liabilities: liabilities,
        working_capital: round0(assets - liabilities),
        ratio: round2(ratio),
        tier,
        recommendation: tier.recommendation().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates() {
        let r = working_capital(&WorkingCapitalInput {
            current_assets: Some(200_000.0),
            current_liabilities: Some(100_000.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(r.working_capital, 100_000.0);
        assert_eq!(r.ratio, 2.0);
        assert_eq!(r.tier, LiquidityTier::Excellent);
        assert!(r.recommendation.starts_with("Excellent liquidity"));
    }

    #[test]
    fn test_components_when_aggregate_missing() {
        let r = working_capital(&WorkingCapitalInput {
            inventory: Some(50_000.0),
            accounts_receivable: Some(30_000.0),
            cash: Some(10_000.0),
            accounts_payable: Some(40_000.0),
            short_term_debt: Some(20_000.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(r.current_assets, 90_000.0);
        assert_eq!(r.current_liabilities, 60_000.0);
        assert_eq!(r.ratio, 1.5);
        assert_eq!(r.tier, LiquidityTier::Good);
    }

    #[test]
    fn test_zero_aggregate_falls_back_to_components() {
        let r = working_capital(&WorkingCapitalInput {
            current_assets: Some(0.0),
            cash: Some(80.0),
            current_liabilities: Some(100.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.working_capital, -20.0);
        assert_eq!(r.tier, LiquidityTier::Low);
    }

    #[test]
    fn test_negative_half_rounds_up() {
        let r = working_capital(&WorkingCapitalInput {
            current_assets: Some(79.5),
            current_liabilities: Some(100.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.working_capital, -20.0);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(LiquidityTier::from_ratio(2.0), LiquidityTier::Excellent);
        assert_eq!(LiquidityTier::from_ratio(1.99), LiquidityTier::Good);
        assert_eq!(LiquidityTier::from_ratio(1.0), LiquidityTier::Adequate);
        assert_eq!(LiquidityTier::from_ratio(0.99), LiquidityTier::Low);
    }

    #[test]
    fn test_requires_both_sides() {
        assert!(working_capital(&WorkingCapitalInput {
            current_assets: Some(1000.0),
            ..Default::default()
        })
        .is_none());
    }
}
