//! Swap form state held by the caller
//!
//! The form keeps the two selected tokens and the two amount fields, each as
//! display text plus the numeric value behind it. Every mutation reruns the
//! conversion through [`RateEngine`] from the side the user last typed into
//! and reformats the opposite field.

use serde::{Deserialize, Serialize};

use swap_core::{EngineConfig, SwapFormError, SwapFormResult, SwapOrder, TokenQuote};

use crate::catalog::Catalog;
use crate::engine::RateEngine;
use crate::format::{format_for_display, format_with_default, DEFAULT_PRECISION, USD_PRECISION};

/// Which amount field the user last edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    From,
    To,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapForm {
    from: Option<TokenQuote>,
    to: Option<TokenQuote>,
    from_amount: String,
    to_amount: String,
    /// Numeric value behind each field; the text may be grouped display output
    from_value: Option<f64>,
    to_value: Option<f64>,
    edited: Side,
}

/// Accepts `""` or digits with at most one decimal point (`"12"`, `".5"`, `"3."`)
pub fn is_amount_input(input: &str) -> bool {
    let mut seen_dot = false;
    input.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Parse an amount field; `None` for empty, unparseable or non-positive input
fn parse_amount(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

impl SwapForm {
    /// Empty form with the configured default pair preselected when listed
    pub fn new(catalog: &Catalog, config: &EngineConfig) -> Self {
        Self {
            from: catalog.get(&config.default_from).cloned(),
            to: catalog.get(&config.default_to).cloned(),
            ..Self::default()
        }
    }

    pub fn from_token(&self) -> Option<&TokenQuote> {
        self.from.as_ref()
    }

    pub fn to_token(&self) -> Option<&TokenQuote> {
        self.to.as_ref()
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    pub fn select_from(&mut self, catalog: &Catalog, symbol: &str) -> SwapFormResult<()> {
        let token = catalog
            .get(symbol)
            .cloned()
            .ok_or_else(|| SwapFormError::UnknownToken(symbol.to_string()))?;
        self.from = Some(token);
        self.recompute();
        Ok(())
    }

    pub fn select_to(&mut self, catalog: &Catalog, symbol: &str) -> SwapFormResult<()> {
        let token = catalog
            .get(symbol)
            .cloned()
            .ok_or_else(|| SwapFormError::UnknownToken(symbol.to_string()))?;
        self.to = Some(token);
        self.recompute();
        Ok(())
    }

    /// Edit the input amount; the output amount follows
    pub fn set_from_amount(&mut self, input: &str) -> SwapFormResult<()> {
        if !is_amount_input(input) {
            return Err(SwapFormError::InvalidAmountInput(input.to_string()));
        }
        self.from_amount = input.to_string();
        self.from_value = parse_amount(input);
        self.edited = Side::From;
        self.recompute();
        Ok(())
    }

    /// Edit the output amount; the input amount is solved in reverse
    pub fn set_to_amount(&mut self, input: &str) -> SwapFormResult<()> {
        if !is_amount_input(input) {
            return Err(SwapFormError::InvalidAmountInput(input.to_string()));
        }
        self.to_amount = input.to_string();
        self.to_value = parse_amount(input);
        self.edited = Side::To;
        self.recompute();
        Ok(())
    }

    /// Swap direction: tokens and amounts trade places
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
        std::mem::swap(&mut self.from_value, &mut self.to_value);
        self.edited = match self.edited {
            Side::From => Side::To,
            Side::To => Side::From,
        };
    }

    fn recompute(&mut self) {
        let (source, reverse) = match self.edited {
            Side::From => (self.from_value, false),
            Side::To => (self.to_value, true),
        };

        let converted = match (&self.from, &self.to, source) {
            (Some(from), Some(to), Some(amount)) => {
                let (a, b) = if reverse { (to, from) } else { (from, to) };
                RateEngine::quote(amount, a, b).value()
            }
            _ => None,
        };
        let text = converted.map(format_with_default).unwrap_or_default();

        match self.edited {
            Side::From => {
                self.to_value = converted;
                self.to_amount = text;
            }
            Side::To => {
                self.from_value = converted;
                self.from_amount = text;
            }
        }
    }

    /// `"1 ETH = 1,645.93 USDC"` for the selected pair
    pub fn rate_line(&self) -> Option<String> {
        let (from, to) = (self.from.as_ref()?, self.to.as_ref()?);
        let rate = RateEngine::rate(from, to).value()?;
        Some(format!(
            "1 {} = {} {}",
            from.symbol,
            format_for_display(rate, DEFAULT_PRECISION),
            to.symbol
        ))
    }

    /// Reference-currency value of the input field
    pub fn from_usd_value(&self) -> Option<String> {
        usd_value(self.from.as_ref()?, self.from_value)
    }

    /// Reference-currency value of the output field
    pub fn to_usd_value(&self) -> Option<String> {
        usd_value(self.to.as_ref()?, self.to_value)
    }

    /// Validate the form into an order estimate
    pub fn order(&self) -> SwapFormResult<SwapOrder> {
        let (from, to) = match (&self.from, &self.to) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(SwapFormError::MissingToken),
        };
        let amount_in = self.from_value.ok_or(SwapFormError::InvalidAmount)?;
        if from.symbol == to.symbol {
            return Err(SwapFormError::SameToken(from.symbol.clone()));
        }

        Ok(SwapOrder {
            from: from.clone(),
            to: to.clone(),
            amount_in,
            estimated_out: RateEngine::convert(amount_in, from, to),
        })
    }
}

/// `None` while the field holds no usable amount
fn usd_value(token: &TokenQuote, amount: Option<f64>) -> Option<String> {
    let amount = amount?;
    Some(format!("${}", format_for_display(amount * token.price, USD_PRECISION)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use swap_core::PricePoint;

    fn catalog() -> Catalog {
        let at = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        RateEngine::default().build_catalog(&[
            PricePoint::new("ETH", at, 2000.0),
            PricePoint::new("USDC", at, 1.0),
            PricePoint::new("ATOM", at, 8.0),
        ])
    }

    fn form() -> (Catalog, SwapForm) {
        let catalog = catalog();
        let form = SwapForm::new(&catalog, &EngineConfig::default());
        (catalog, form)
    }

    #[test]
    fn test_amount_input_filter() {
        assert!(is_amount_input(""));
        assert!(is_amount_input("12"));
        assert!(is_amount_input(".5"));
        assert!(is_amount_input("3."));
        assert!(!is_amount_input("1.2.3"));
        assert!(!is_amount_input("-1"));
        assert!(!is_amount_input("1e5"));
        assert!(!is_amount_input("1,000"));
    }

    #[test]
    fn test_default_pair() {
        let (_, form) = form();
        assert_eq!(form.from_token().map(|t| t.symbol.as_str()), Some("ETH"));
        assert_eq!(form.to_token().map(|t| t.symbol.as_str()), Some("USDC"));
    }

    #[test]
    fn test_default_pair_missing_from_catalog() {
        let form = SwapForm::new(&Catalog::empty(), &EngineConfig::default());
        assert!(form.from_token().is_none());
        assert!(form.rate_line().is_none());
    }

    #[test]
    fn test_forward_entry() {
        let (_, mut form) = form();
        form.set_from_amount("1.5").unwrap();
        assert_eq!(form.to_amount(), "3,000");

        form.set_from_amount("").unwrap();
        assert_eq!(form.to_amount(), "");

        form.set_from_amount("0").unwrap();
        assert_eq!(form.to_amount(), "");
    }

    #[test]
    fn test_reverse_entry() {
        let (_, mut form) = form();
        form.set_to_amount("500").unwrap();
        assert_eq!(form.from_amount(), "0.250000");
    }

    #[test]
    fn test_rejected_input_leaves_state() {
        let (_, mut form) = form();
        form.set_from_amount("2").unwrap();
        let err = form.set_from_amount("2x").unwrap_err();
        assert_eq!(err, SwapFormError::InvalidAmountInput("2x".into()));
        assert_eq!(form.from_amount(), "2");
        assert_eq!(form.to_amount(), "4,000");
    }

    #[test]
    fn test_selecting_token_recomputes() {
        let (catalog, mut form) = form();
        form.set_from_amount("2").unwrap();
        form.select_to(&catalog, "ATOM").unwrap();
        assert_eq!(form.to_amount(), "500.0000");

        let err = form.select_from(&catalog, "DOGE").unwrap_err();
        assert_eq!(err, SwapFormError::UnknownToken("DOGE".into()));
    }

    #[test]
    fn test_flip() {
        let (_, mut form) = form();
        form.set_from_amount("1").unwrap();
        form.flip();

        assert_eq!(form.from_token().unwrap().symbol, "USDC");
        assert_eq!(form.to_token().unwrap().symbol, "ETH");
        assert_eq!(form.from_amount(), "2,000");
        assert_eq!(form.to_amount(), "1");
    }

    #[test]
    fn test_order_after_flip_uses_numeric_amount() {
        let (_, mut form) = form();
        form.set_from_amount("1").unwrap();
        form.flip();

        let order = form.order().unwrap();
        assert_eq!(order.from.symbol, "USDC");
        assert_eq!(order.amount_in, 2000.0);
        assert_eq!(order.estimated_out, 1.0);
        assert_eq!(form.from_usd_value().unwrap(), "$2,000");
    }

    #[test]
    fn test_flip_then_token_change_recomputes_from_typed_side() {
        let (catalog, mut form) = form();
        form.set_from_amount("1").unwrap();
        form.flip();
        form.select_from(&catalog, "ATOM").unwrap();

        assert_eq!(form.to_amount(), "1");
        assert_eq!(form.from_amount(), "250.0000");
        assert_eq!(form.order().unwrap().amount_in, 250.0);
    }

    #[test]
    fn test_rate_line_and_usd() {
        let (_, mut form) = form();
        assert_eq!(form.rate_line().unwrap(), "1 ETH = 2,000 USDC");

        form.set_from_amount("1.5").unwrap();
        assert_eq!(form.from_usd_value().unwrap(), "$3,000");
        assert_eq!(form.to_usd_value().unwrap(), "$3,000");
    }

    #[test]
    fn test_usd_value_absent_without_amount() {
        let (_, mut form) = form();
        assert!(form.from_usd_value().is_none());
        assert!(form.to_usd_value().is_none());

        form.set_from_amount("0").unwrap();
        assert!(form.from_usd_value().is_none());
        assert!(form.to_usd_value().is_none());
    }

    #[test]
    fn test_order_validation() {
        let (catalog, mut form) = form();
        assert_eq!(form.order().unwrap_err(), SwapFormError::InvalidAmount);

        form.set_from_amount("0.5").unwrap();
        let order = form.order().unwrap();
        assert_eq!(order.amount_in, 0.5);
        assert_eq!(order.estimated_out, 1000.0);

        form.select_to(&catalog, "ETH").unwrap();
        assert_eq!(form.order().unwrap_err(), SwapFormError::SameToken("ETH".into()));

        let empty = SwapForm::default();
        assert_eq!(empty.order().unwrap_err(), SwapFormError::MissingToken);
    }
}
