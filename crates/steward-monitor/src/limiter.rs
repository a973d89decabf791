//! # Request Rate Limiting
//!
//! The store turns each cycle's pressure tier into a request ceiling and
//! pushes it through the [`RateLimiter`] trait. [`RequestLimiter`] is the
//! in-process implementation: a fixed-window request counter.
//!
//! ## Ceilings
//!
//! | Pressure | Requests per window |
//! |----------|---------------------|
//! | low | 1000 |
//! | medium | 500 |
//! | high | 200 |
//! | critical | 50 |
//!
//! Outside production builds the ceiling never drops below
//! `development_floor` (200), so local tooling is not starved by a
//! simulated incident.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use steward_monitor::{RateLimiter, RequestLimiter};
//!
//! let limiter = RequestLimiter::new(2, Duration::from_secs(60));
//! assert!(limiter.peek_request());
//! assert!(limiter.can_make_request());
//! assert!(limiter.can_make_request());
//! assert!(!limiter.can_make_request());
//!
//! limiter.set_limit(3)?;
//! assert!(limiter.can_make_request());
//! # Ok::<(), steward_monitor::LimiterError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

use steward_kernel::RiskLevel;

use crate::error::{LimiterError, Result};

/// Environment variable naming the build mode.
pub const BUILD_MODE_ENV: &str = "STEWARD_BUILD_MODE";

/// Whether ceilings are applied as-is or floored for development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Ceilings apply unchanged.
    Production,
    /// Ceilings are floored at the development minimum.
    #[default]
    Development,
}

impl BuildMode {
    /// Reads the mode from [`BUILD_MODE_ENV`].
    ///
    /// An unset, non-UTF-8 or unrecognised value yields `Development`,
    /// which keeps the floor in place.
    pub fn from_env() -> Self {
        match std::env::var(BUILD_MODE_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                debug!("unrecognised {}={:?}, assuming development", BUILD_MODE_ENV, value);
                BuildMode::Development
            }),
            Err(_) => BuildMode::Development,
        }
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            other => Err(format!("unknown build mode '{}'", other)),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Production => f.write_str("production"),
            BuildMode::Development => f.write_str("development"),
        }
    }
}

/// Request ceilings per pressure tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCeilings {
    /// Ceiling under low pressure.
    pub low: u32,
    /// Ceiling under medium pressure.
    pub medium: u32,
    /// Ceiling under high pressure.
    pub high: u32,
    /// Ceiling under critical pressure.
    pub critical: u32,
    /// Minimum ceiling outside production builds.
    pub development_floor: u32,
}

impl Default for RateCeilings {
    fn default() -> Self {
        Self {
            low: 1000,
            medium: 500,
            high: 200,
            critical: 50,
            development_floor: 200,
        }
    }
}

impl RateCeilings {
    /// Raw ceiling for a tier.
    pub fn base(&self, risk: RiskLevel) -> u32 {
        match risk {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
        }
    }

    /// Ceiling to apply for a tier in the given build mode.
    pub fn ceiling_for(&self, risk: RiskLevel, mode: BuildMode) -> u32 {
        let base = self.base(risk);
        match mode {
            BuildMode::Production => base,
            BuildMode::Development => base.max(self.development_floor),
        }
    }
}

/// Anything whose request ceiling the store can adjust.
pub trait RateLimiter: Send + Sync {
    /// Replaces the request ceiling.
    ///
    /// # Errors
    ///
    /// Implementations report an invalid ceiling or an unreachable backend.
    fn set_limit(&self, limit: u32) -> Result<()>;
}

#[derive(Debug)]
struct Window {
    limit: u32,
    started: Instant,
    count: u32,
}

impl Window {
    fn roll(&mut self, length: Duration) {
        if self.started.elapsed() >= length {
            self.started = Instant::now();
            self.count = 0;
        }
    }
}

/// Fixed-window request counter with an adjustable ceiling.
///
/// Shareable across threads; wrap in an `Arc` to hand the same limiter to
/// the store and to request paths.
#[derive(Debug)]
pub struct RequestLimiter {
    window: Mutex<Window>,
    length: Duration,
}

impl RequestLimiter {
    /// Creates a limiter admitting `limit` requests per `window`.
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            window: Mutex::new(Window {
                limit,
                started: Instant::now(),
                count: 0,
            }),
            length: window,
        }
    }

    // Counters stay consistent even if a holder panicked, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Window> {
        let mut guard = self.window.lock().unwrap_or_else(PoisonError::into_inner);
        guard.roll(self.length);
        guard
    }

    /// Reports whether a request would be admitted, without counting it.
    pub fn peek_request(&self) -> bool {
        let window = self.lock();
        window.count < window.limit
    }

    /// Admits and counts a request if the ceiling allows it.
    pub fn can_make_request(&self) -> bool {
        let mut window = self.lock();
        if window.count < window.limit {
            window.count += 1;
            true
        } else {
            false
        }
    }

    /// Current ceiling.
    pub fn limit(&self) -> u32 {
        self.lock().limit
    }

    /// Requests left in the current window.
    pub fn remaining(&self) -> u32 {
        let window = self.lock();
        window.limit.saturating_sub(window.count)
    }
}

impl RateLimiter for RequestLimiter {
    fn set_limit(&self, limit: u32) -> Result<()> {
        if limit == 0 {
            return Err(LimiterError::InvalidLimit(limit));
        }
        let mut window = self.lock();
        debug!("rate limit {} -> {}", window.limit, limit);
        window.limit = limit;
        Ok(())
    }
}
