//! Core types and utilities for the swap estimator
//!
//! This crate provides shared types used across all components:
//! - Price points and token quotes
//! - The static token directory (display names, icons)
//! - Conversion results
//! - Configuration and error types

pub mod types;
pub mod tokens;
pub mod quotes;
pub mod config;
pub mod errors;

pub use types::*;
pub use tokens::*;
pub use quotes::*;
pub use self::config::*;
pub use errors::*;
