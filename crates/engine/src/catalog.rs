//! Token catalog: the ordered, deduplicated list of quotes

use serde::{Deserialize, Serialize};

use swap_core::TokenQuote;

/// Catalog of token quotes, highest price first
///
/// Built by [`crate::RateEngine::build_catalog`]; never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    quotes: Vec<TokenQuote>,
}

impl Catalog {
    pub(crate) fn from_sorted(quotes: Vec<TokenQuote>) -> Self {
        Self { quotes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[TokenQuote] {
        &self.quotes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenQuote> {
        self.quotes.iter()
    }

    /// Look up a token by exact symbol
    pub fn get(&self, symbol: &str) -> Option<&TokenQuote> {
        self.quotes.iter().find(|q| q.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.quotes.iter().map(|q| q.symbol.as_str()).collect()
    }

    /// Case-insensitive search on symbol or display name
    ///
    /// `exclude` hides the token already chosen on the other side of a swap.
    /// An empty query matches every token. Catalog order is preserved.
    pub fn search(&self, query: &str, exclude: Option<&str>) -> Vec<&TokenQuote> {
        let needle = query.trim().to_lowercase();

        self.quotes
            .iter()
            .filter(|q| exclude.map_or(true, |ex| q.symbol != ex))
            .filter(|q| {
                needle.is_empty()
                    || q.symbol.to_lowercase().contains(&needle)
                    || q.display_name.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TokenQuote;
    type IntoIter = std::slice::Iter<'a, TokenQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = TokenQuote;
    type IntoIter = std::vec::IntoIter<TokenQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.into_iter()
    }
}
