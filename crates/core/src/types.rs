//! Core type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns true for prices that can take part in a catalog or a conversion.
///
/// NaN and infinities are rejected along with zero and negative values.
pub fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// A single observation from the price feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub symbol: String,
    /// `None` when the upstream timestamp could not be parsed
    pub observed_at: Option<DateTime<Utc>>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(symbol: &str, observed_at: DateTime<Utc>, price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            observed_at: Some(observed_at),
            price,
        }
    }

    /// Point whose timestamp was present but unreadable
    pub fn untimed(symbol: &str, price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            observed_at: None,
            price,
        }
    }

    /// Whether this point may be selected as the latest price for its symbol
    pub fn is_candidate(&self) -> bool {
        self.observed_at.is_some() && is_usable_price(self.price)
    }
}

/// One catalog entry: the latest usable price for a symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenQuote {
    pub symbol: String,
    pub display_name: String,
    pub price: f64,
    pub icon_ref: String,
}

impl TokenQuote {
    pub fn new(symbol: &str, display_name: &str, price: f64, icon_ref: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            price,
            icon_ref: icon_ref.to_string(),
        }
    }

    pub fn has_usable_price(&self) -> bool {
        is_usable_price(self.price)
    }
}

impl fmt::Display for TokenQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.display_name)
    }
}
