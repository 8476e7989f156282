//! RateEngine: catalog building and cross-rate conversion

use std::collections::HashMap;
use tracing::debug;

use swap_core::{
    display_name, icon_url, is_usable_price, Conversion, EngineConfig, PricePoint, TokenQuote,
};

use crate::catalog::Catalog;

/// Stateless rate engine
///
/// Holds only the lookup data needed to decorate quotes (display names and
/// icon base URL). Every call is independent of previous calls.
#[derive(Debug, Clone)]
pub struct RateEngine {
    icon_base_url: String,
    name_overrides: HashMap<String, String>,
}

impl Default for RateEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl RateEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            icon_base_url: config.icon_base_url.clone(),
            name_overrides: config.name_overrides.clone(),
        }
    }

    /// Display name for a symbol: config override, then built-in table, then the symbol
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.name_overrides
            .get(symbol)
            .map(String::as_str)
            .unwrap_or_else(|| display_name(symbol))
    }

    /// Build the catalog from a raw feed
    ///
    /// Per symbol, the usable point (price > 0, parseable timestamp) with the
    /// latest `observed_at` wins; on equal timestamps the first one seen is
    /// kept. Symbols without a usable point are dropped. The result is
    /// ordered by price descending, then symbol ascending.
    pub fn build_catalog(&self, points: &[PricePoint]) -> Catalog {
        let mut latest: HashMap<&str, &PricePoint> = HashMap::new();
        let mut rejected = 0usize;

        for point in points {
            if !point.is_candidate() {
                rejected += 1;
                continue;
            }

            match latest.get(point.symbol.as_str()) {
                Some(best) if best.observed_at >= point.observed_at => {}
                _ => {
                    latest.insert(point.symbol.as_str(), point);
                }
            }
        }

        let mut quotes: Vec<TokenQuote> = latest
            .into_values()
            .map(|p| {
                TokenQuote::new(
                    &p.symbol,
                    self.display_name(&p.symbol),
                    p.price,
                    &icon_url(&self.icon_base_url, &p.symbol),
                )
            })
            .collect();

        quotes.sort_by(|a, b| {
            b.price
                .total_cmp(&a.price)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        debug!(
            "Built catalog: {} points, {} rejected, {} tokens",
            points.len(),
            rejected,
            quotes.len()
        );

        Catalog::from_sorted(quotes)
    }

    /// Exchange rate from one token to another: units of `to` per unit of `from`
    pub fn rate(from: &TokenQuote, to: &TokenQuote) -> Conversion {
        Self::quote(1.0, from, to)
    }

    /// Typed cross-rate conversion of `amount` units of `from` into `to`
    pub fn quote(amount: f64, from: &TokenQuote, to: &TokenQuote) -> Conversion {
        if !is_usable_price(amount) || !from.has_usable_price() || !to.has_usable_price() {
            return Conversion::NotComputable;
        }

        // amount * (p_from / p_to): the ratio is exactly 1 for a token
        // converted into itself, so the amount comes back unchanged. When the
        // ratio itself leaves the f64 range, multiply first instead.
        let ratio = from.price / to.price;
        let out = if is_usable_price(ratio) {
            amount * ratio
        } else {
            amount * from.price / to.price
        };

        if out.is_finite() {
            Conversion::Computed(out)
        } else {
            Conversion::NotComputable
        }
    }

    /// Cross-rate conversion with the sentinel contract: 0 means "not computable"
    pub fn convert(amount: f64, from: &TokenQuote, to: &TokenQuote) -> f64 {
        Self::quote(amount, from, to).unwrap_or_zero()
    }
}
