//! Command-line front end for the swap rate engine
//!
//! Plays the presentation-layer caller: fetches the feed, builds the
//! catalog, and drives the swap form from command-line arguments.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::run;
