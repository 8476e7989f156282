//! Price feed collaborator for the rate engine
//!
//! Features:
//! - HTTP fetch of the price document
//! - Tolerant decoding (malformed records are skipped, not fatal)
//! - Session catalog state, replaced wholesale on every rebuild
//! - Periodic refresher with graceful shutdown

pub mod feeds;
pub mod refresher;
pub mod state;

pub use feeds::{decode_records, HttpPriceFeed, PriceFeed};
pub use refresher::CatalogRefresher;
pub use state::CatalogState;
