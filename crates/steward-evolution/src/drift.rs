//! # Signal Drift Detection
//!
//! Picks the signals that indicate a subsystem is drifting away from its
//! expected behaviour.
//!
//! ## Drift Band
//!
//! | Risk | Drifted? |
//! |------|----------|
//! | Low | No - routine |
//! | Medium | Yes |
//! | High | Yes |
//! | Critical | **No** |
//!
//! Critical signals are outside the drift band. They are handled by the
//! pressure assessment instead, which escalates on any critical signal.
//! This boundary is relied on by the store; do not widen it silently.

use steward_kernel::{RiskLevel, SystemSignal};

/// Filters signal history down to drifted signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftDetector;

impl DriftDetector {
    /// Creates a detector.
    pub fn new() -> Self {
        Self
    }

    /// Returns true if a single signal falls in the drift band.
    #[inline]
    pub fn is_drift(signal: &SystemSignal) -> bool {
        matches!(signal.risk, RiskLevel::Medium | RiskLevel::High)
    }

    /// Returns the medium and high risk signals, preserving order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use steward_evolution::DriftDetector;
    /// use steward_kernel::{RiskLevel, SystemSignal};
    ///
    /// let signals = vec![
    ///     SystemSignal::new("a", "x", RiskLevel::Low),
    ///     SystemSignal::new("b", "x", RiskLevel::High),
    ///     SystemSignal::new("c", "x", RiskLevel::Critical),
    /// ];
    /// let drifted = DriftDetector::new().detect(&signals);
    /// assert_eq!(drifted.len(), 1);
    /// assert_eq!(drifted[0].source, "b");
    /// ```
    pub fn detect<'a>(&self, signals: &'a [SystemSignal]) -> Vec<&'a SystemSignal> {
        signals.iter().filter(|s| Self::is_drift(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(source: &str, risk: RiskLevel) -> SystemSignal {
        SystemSignal::new(source, "event", risk)
    }

    #[test]
    fn test_keeps_only_medium_and_high() {
        let signals = vec![
            signal("low", RiskLevel::Low),
            signal("medium", RiskLevel::Medium),
            signal("high", RiskLevel::High),
            signal("critical", RiskLevel::Critical),
        ];
        let sources: Vec<&str> = DriftDetector::new()
            .detect(&signals)
            .into_iter()
            .map(|s| s.source.as_str())
            .collect();
        assert_eq!(sources, vec!["medium", "high"]);
    }

    #[test]
    fn test_critical_is_not_drift() {
        // Critical escalates pressure instead; it never becomes a cleanup proposal.
        let signals = vec![signal("x", RiskLevel::Critical); 5];
        assert!(DriftDetector::new().detect(&signals).is_empty());
    }

    #[test]
    fn test_empty_history() {
        assert!(DriftDetector::new().detect(&[]).is_empty());
    }
}
