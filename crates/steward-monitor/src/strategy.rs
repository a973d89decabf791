//! # Pressure Strategy
//!
//! Maps signal history to a coarse pressure tier and a canned advisory.
//!
//! ## Decision Order
//!
//! First match wins:
//!
//! | Check | Pressure |
//! |-------|----------|
//! | any signal is critical | `critical` |
//! | more than 10 signals | `high` |
//! | more than 5 signals | `medium` |
//! | otherwise | `low` |
//!
//! Past the critical check only the *count* matters. Eleven low-risk
//! signals produce `high` pressure; this is a volume heuristic, not a
//! severity-weighted one.

use steward_kernel::{RiskLevel, SystemSignal};

/// Signal count above which pressure is `high`.
pub const HIGH_VOLUME_THRESHOLD: usize = 10;

/// Signal count above which pressure is `medium`.
pub const MEDIUM_VOLUME_THRESHOLD: usize = 5;

/// Assesses pressure and shapes the advisory roadmap.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyEngine;

impl StrategyEngine {
    /// Creates a strategy engine.
    pub fn new() -> Self {
        Self
    }

    /// Computes the pressure tier for a batch of signals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steward_kernel::{RiskLevel, SystemSignal};
    /// use steward_monitor::StrategyEngine;
    ///
    /// let quiet = vec![SystemSignal::new("x", "y", RiskLevel::Low); 11];
    /// assert_eq!(StrategyEngine::new().assess_pressure(&quiet), RiskLevel::High);
    /// ```
    pub fn assess_pressure(&self, signals: &[SystemSignal]) -> RiskLevel {
        if signals.iter().any(|s| s.risk == RiskLevel::Critical) {
            RiskLevel::Critical
        } else if signals.len() > HIGH_VOLUME_THRESHOLD {
            RiskLevel::High
        } else if signals.len() > MEDIUM_VOLUME_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// One canned advisory sentence per tier.
    pub fn shape_roadmap(&self, risk: RiskLevel) -> &'static str {
        match risk {
            RiskLevel::Low => {
                "Steady state: continue routine audits and incremental improvements."
            }
            RiskLevel::Medium => {
                "Elevated activity: schedule a governance review of recent changes."
            }
            RiskLevel::High => {
                "High pressure: pause non-essential automation and prioritise remediation."
            }
            RiskLevel::Critical => {
                "Critical pressure: freeze automated HR actions and escalate to leadership."
            }
        }
    }
}
