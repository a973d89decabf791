//! Audit sink for incoming signals.
//!
//! Collection is observability only: it never blocks, never fails and
//! returns nothing. The advisory score has no consumer; it is kept so
//! dashboards can show it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use steward_kernel::SystemSignal;

/// Records every signal to the tracing sink.
pub struct AuditEngine {
    rng: StdRng,
    enabled: bool,
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditEngine {
    /// Creates an audit engine seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            enabled: true,
        }
    }

    /// Creates an audit engine whose score sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            enabled: true,
        }
    }

    /// Enables or disables signal logging.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns whether signal logging is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Writes the signal to the audit log.
    pub fn collect(&self, signal: &SystemSignal) {
        if !self.enabled {
            return;
        }
        info!(
            target: "steward::audit",
            source = %signal.source,
            risk = %signal.risk,
            intercepted = signal.intercepted(),
            "signal collected: {}",
            signal.message
        );
    }

    /// Advisory audit score in `[0, 100)`.
    pub fn score(&mut self) -> f64 {
        self.rng.gen_range(0.0..100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_kernel::RiskLevel;

    #[test]
    fn test_score_in_range() {
        let mut audit = AuditEngine::new();
        for _ in 0..1000 {
            let score = audit.score();
            assert!((0.0..100.0).contains(&score));
        }
    }

    #[test]
    fn test_seeded_scores_reproducible() {
        let mut a = AuditEngine::with_seed(42);
        let mut b = AuditEngine::with_seed(42);
        let xs: Vec<f64> = (0..5).map(|_| a.score()).collect();
        let ys: Vec<f64> = (0..5).map(|_| b.score()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_set_enabled_toggles_logging_flag() {
        let mut audit = AuditEngine::new();
        assert!(audit.enabled());
        audit.set_enabled(false);
        assert!(!audit.enabled());
        audit.set_enabled(true);
        assert!(audit.enabled());
    }
}
