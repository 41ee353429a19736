//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML play settings with CLI overrides
//! - **Contestants**: a human at the terminal or the minimax advisor
//! - **Orchestrator**: alternates contestants until the game is decided

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod contestants;
mod orchestrator;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig};
pub use contestants::{Advisor, Contestant, Human};
pub use orchestrator::{Match, MatchEnd};
