//! Break-even calculator

use serde::{Deserialize, Serialize};

use super::{round0, round2};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BreakEvenInput {
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    pub price_per_unit: f64,
    #[serde(default)]
    pub target_profit: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BreakEvenResult {
    pub contribution_margin: f64,
    /// Percent of price.
    pub contribution_margin_ratio: f64,
    pub break_even_units: u64,
    pub break_even_revenue: f64,
    pub units_for_target_profit: u64,
    /// Percent; zero unless a positive target profit was given.
    pub margin_of_safety: f64,
}

/// Units and revenue needed to cover fixed costs, optionally with a profit target.
///
/// Requires `fixed_costs > 0`, `variable_cost_per_unit >= 0` and a price above
/// the variable cost.
pub fn break_even(input: &BreakEvenInput) -> Option<BreakEvenResult> {
    let fixed = input.fixed_costs;
    let variable = input.variable_cost_per_unit;
    let price = input.price_per_unit;
    let target = input.target_profit.unwrap_or(0.0);

    if !(fixed > 0.0 && variable >= 0.0 && price > variable) || !fixed.is_finite() || !price.is_finite() {
        return None;
    }
    if !(target >= 0.0) || !target.is_finite() {
        return None;
    }

    let margin = price - variable;
    let units = (fixed / margin).ceil();
    let target_units = if target > 0.0 {
        ((fixed + target) / margin).ceil()
    } else {
        units
    };
    let margin_of_safety = if target > 0.0 {
        (target_units - units) / target_units * 100.0
    } else {
        0.0
    };

    Some(BreakEvenResult {
        contribution_margin: round2(margin),
        contribution_margin_ratio: round2(margin / price * 100.0),
        break_even_units: units as u64,
        break_even_revenue: round0(units * price),
        units_for_target_profit: target_units as u64,
        margin_of_safety: round2(margin_of_safety),
    })
}
