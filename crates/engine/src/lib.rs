//! Rate engine for the swap estimator
//!
//! Features:
//! - Catalog building from raw price feeds (latest usable price per symbol)
//! - Cross-rate conversion between catalog tokens
//! - Display formatting for amounts and prices
//! - Token search and caller-held swap form state
//!
//! Everything here is synchronous and pure; the only inputs are the price
//! points handed in by the caller.

pub mod catalog;
pub mod engine;
pub mod form;
pub mod format;

pub use catalog::Catalog;
pub use engine::RateEngine;
pub use form::SwapForm;
pub use format::{format_for_display, format_with_default, DEFAULT_PRECISION, USD_PRECISION};
