//! # Steward Monitor
//!
//! Load-side state for the governance pipeline: bounded history buffers,
//! pressure assessment, and the request ceiling it drives.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`BoundedHistory`] | Most-recent-first capped buffer (signals, decisions) |
//! | [`StrategyEngine`] | Signal history → pressure tier + advisory |
//! | [`RateCeilings`] | Pressure tier → request ceiling |
//! | [`RequestLimiter`] | Fixed-window counter implementing [`RateLimiter`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use steward_kernel::{RiskLevel, SystemSignal};
//! use steward_monitor::{BuildMode, RateCeilings, RateLimiter, RequestLimiter, StrategyEngine};
//!
//! let signals = vec![SystemSignal::new("HR_API", "Bulk update", RiskLevel::Critical)];
//! let pressure = StrategyEngine::new().assess_pressure(&signals);
//!
//! let limiter = RequestLimiter::new(1000, Duration::from_secs(60));
//! let ceiling = RateCeilings::default().ceiling_for(pressure, BuildMode::Production);
//! limiter.set_limit(ceiling)?;
//! assert_eq!(limiter.limit(), 50);
//! # Ok::<(), steward_monitor::LimiterError>(())
//! ```

mod error;
mod history;
mod limiter;
mod strategy;

pub use error::{LimiterError, Result};
pub use history::{BoundedHistory, DEFAULT_HISTORY_CAPACITY};
pub use limiter::{BuildMode, RateCeilings, RateLimiter, RequestLimiter, BUILD_MODE_ENV};
pub use strategy::{StrategyEngine, HIGH_VOLUME_THRESHOLD, MEDIUM_VOLUME_THRESHOLD};
