//! Conversion results and swap orders

use serde::{Deserialize, Serialize};

use crate::TokenQuote;

/// Outcome of a cross-rate conversion
///
/// `NotComputable` covers every "no conversion possible" case: non-positive
/// amount, non-positive price on either side, or a non-finite result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Conversion {
    Computed(f64),
    NotComputable,
}

impl Conversion {
    pub fn is_computed(&self) -> bool {
        matches!(self, Conversion::Computed(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Conversion::Computed(v) => Some(*v),
            Conversion::NotComputable => None,
        }
    }

    /// Sentinel form: 0 means "no conversion possible"
    pub fn unwrap_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl From<Conversion> for Option<f64> {
    fn from(c: Conversion) -> Self {
        c.value()
    }
}

/// A validated swap request built from the form state
///
/// This is a display estimate, not an executable trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapOrder {
    pub from: TokenQuote,
    pub to: TokenQuote,
    pub amount_in: f64,
    pub estimated_out: f64,
}

impl SwapOrder {
    /// Units of `to` received per unit of `from`
    pub fn effective_rate(&self) -> f64 {
        if self.amount_in <= 0.0 {
            return 0.0;
        }
        self.estimated_out / self.amount_in
    }

    /// Value of the input leg in the reference currency
    pub fn notional(&self) -> f64 {
        self.amount_in * self.from.price
    }
}
