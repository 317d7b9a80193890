//! GST split calculator

use serde::{Deserialize, Serialize};

use super::round2;

/// Standard GST slabs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GstSlab {
    Exempt,
    Essential,
    Standard12,
    Standard18,
    Luxury,
}

impl GstSlab {
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Exempt,
        GstSlab::Essential,
        GstSlab::Standard12,
        GstSlab::Standard18,
        GstSlab::Luxury,
    ];

    pub fn percent(&self) -> u32 {
        match self {
            GstSlab::Exempt => 0,
            GstSlab::Essential => 5,
            GstSlab::Standard12 => 12,
            GstSlab::Standard18 => 18,
            GstSlab::Luxury => 28,
        }
    }

    /// Rate as a fraction.
    pub fn rate(&self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    pub fn from_percent(percent: u32) -> Option<GstSlab> {
        GstSlab::ALL.into_iter().find(|s| s.percent() == percent)
    }
}

/// Either `rate` or `slab` must be given; a slab wins when both are.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GstInput {
    pub amount: f64,
    /// Fraction, e.g. `0.18`.
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub slab: Option<GstSlab>,
    /// `true` when `amount` already contains the tax.
    #[serde(default)]
    pub includes_tax: bool,
}

impl GstInput {
    pub fn with_rate(amount: f64, rate: f64, includes_tax: bool) -> Self {
        Self { amount, rate: Some(rate), slab: None, includes_tax }
    }

    pub fn with_slab(amount: f64, slab: GstSlab, includes_tax: bool) -> Self {
        Self { amount, rate: None, slab: Some(slab), includes_tax }
    }

    fn effective_rate(&self) -> Option<f64> {
        self.slab.map(|s| s.rate()).or(self.rate)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GstResult {
    pub base_amount: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
}

/// Split an amount into base and tax, or gross it up.
pub fn gst_split(input: &GstInput) -> Option<GstResult> {
    let GstInput { amount, includes_tax, .. } = *input;
    let rate = input.effective_rate()?;
    if !(amount > 0.0 && rate >= 0.0) || !amount.is_finite() || !rate.is_finite() {
        return None;
    }

    let result = if includes_tax {
        let base = amount / (1.0 + rate);
        GstResult {
            base_amount: round2(base),
            gst_amount: round2(amount - base),
            total_amount: amount,
        }
    } else {
        let tax = amount * rate;
        GstResult {
            base_amount: amount,
            gst_amount: round2(tax),
            total_amount: round2(amount + tax),
        }
    };

    Some(result)
}
