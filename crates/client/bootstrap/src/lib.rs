//! Shared bootstrap utilities for scoreboard front-ends.
//!
//! Provides configuration loading, tracing initialization, and controller
//! setup that a presentation layer (terminal, GUI, web shell) can reuse.
//!
//! Start-up order for a front-end:
//!
//! ```no_run
//! use client_bootstrap::{ScoreboardConfig, ScoreboardSetup, logging};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ScoreboardConfig::load();
//! let _guard = logging::init(config.log_dir.as_deref())?;
//! let _setup = ScoreboardSetup::build(config)?;
//! # Ok(())
//! # }
//! ```
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::ScoreboardSetup;
pub use config::ScoreboardConfig;
