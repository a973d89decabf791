//! The signal store.
//!
//! [`SystemStore`] owns everything the brain deliberately does not: the
//! capped signal history, the capped decision list, the latest proposals
//! and pressure, and the optional rate limiter the pressure drives.
//!
//! # Ingest Sequence
//!
//! 1. Audit + evaluate the signal
//! 2. Push the signal to the front of history and the decision to the front
//!    of the decision list (oldest entries fall off at capacity)
//! 3. Cycle over the whole history, **replacing** the proposal list
//! 4. Translate pressure to a ceiling and push it to the limiter
//!
//! Step 4 never fails the ingest. A missing limiter is skipped; a limiter
//! error is logged at debug level and the ceiling is left unapplied.

use std::sync::Arc;
use tracing::{debug, info};

use steward_evolution::EvolutionProposal;
use steward_governance::{AuditEngine, GovernanceEngine, SystemDecision};
use steward_kernel::{RiskLevel, SystemSignal};
use steward_monitor::{BoundedHistory, BuildMode, RateCeilings, RateLimiter};

use crate::brain::{CycleReport, Scenario, SystemBrain};
use crate::config::StewardConfig;
use crate::Result;

/// Stateful owner of the governance buffers.
pub struct SystemStore {
    brain: SystemBrain,
    signals: BoundedHistory<SystemSignal>,
    decisions: BoundedHistory<SystemDecision>,
    proposals: Vec<EvolutionProposal>,
    pressure: RiskLevel,
    roadmap: &'static str,
    ceilings: RateCeilings,
    build_mode: BuildMode,
    limiter: Option<Arc<dyn RateLimiter>>,
    applied_limit: Option<u32>,
}

impl SystemStore {
    /// Create a store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: &StewardConfig) -> Result<Self> {
        config.validate()?;

        let mut audit = match config.global.audit_seed {
            Some(seed) => AuditEngine::with_seed(seed),
            None => AuditEngine::new(),
        };
        audit.set_enabled(config.global.audit_logging);
        let brain = SystemBrain::with_components(audit, GovernanceEngine::new());
        let build_mode = config.build_mode();

        info!(
            "Steward store initialized ({} signals, {} decisions, {} build)",
            config.governance.history_capacity, config.governance.decision_capacity, build_mode
        );

        Ok(Self {
            brain,
            signals: BoundedHistory::new(config.governance.history_capacity),
            decisions: BoundedHistory::new(config.governance.decision_capacity),
            proposals: Vec::new(),
            pressure: RiskLevel::Low,
            roadmap: "",
            ceilings: config.limits.clone(),
            build_mode,
            limiter: None,
            applied_limit: None,
        })
    }

    /// Attach the rate limiter that pressure changes are pushed to.
    pub fn with_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// Ingest a signal and re-run the cycle.
    pub fn ingest_signal(&mut self, signal: SystemSignal) -> SystemDecision {
        let decision = self.brain.ingest(&signal);
        self.signals.push(signal);
        self.decisions.push(decision.clone());
        self.cycle();
        decision
    }

    /// Re-run the cycle over current history without a new signal.
    pub fn cycle(&mut self) -> RiskLevel {
        let CycleReport {
            proposals,
            pressure,
            roadmap,
        } = self.brain.cycle(self.signals.make_contiguous());

        self.proposals = proposals;
        self.pressure = pressure;
        self.roadmap = roadmap;
        self.apply_rate_limit();
        pressure
    }

    fn apply_rate_limit(&mut self) {
        let Some(limiter) = &self.limiter else {
            return;
        };
        let ceiling = self.ceilings.ceiling_for(self.pressure, self.build_mode);
        match limiter.set_limit(ceiling) {
            Ok(()) => {
                if self.applied_limit != Some(ceiling) {
                    info!(pressure = %self.pressure, "rate limit set to {}", ceiling);
                }
                self.applied_limit = Some(ceiling);
            }
            Err(e) => debug!("rate limit {} not applied: {}", ceiling, e),
        }
    }

    /// Ingest every signal of a scenario, in order.
    pub fn run_scenario(&mut self, scenario: Scenario) -> Vec<SystemDecision> {
        info!("running scenario {}", scenario);
        self.brain
            .simulate_scenario(scenario)
            .into_iter()
            .map(|signal| self.ingest_signal(signal))
            .collect()
    }

    /// Remove a decision without acting on it.
    pub fn dismiss_decision(&mut self, id: &str) -> bool {
        let removed = self.decisions.remove_first(|d| d.id == id).is_some();
        if removed {
            debug!("decision {} dismissed", id);
        }
        removed
    }

    /// Remove a decision and record that its remediation was applied.
    pub fn apply_remediation(&mut self, id: &str) -> Option<SystemDecision> {
        let decision = self.decisions.remove_first(|d| d.id == id)?;
        info!(
            domain = %decision.domain,
            "remediation applied: {}",
            decision.remediation.as_deref().unwrap_or("none required")
        );
        Some(decision)
    }

    /// Signal history, most recent first.
    pub fn signals(&self) -> impl Iterator<Item = &SystemSignal> {
        self.signals.iter()
    }

    /// Decisions, most recent first.
    pub fn decisions(&self) -> impl Iterator<Item = &SystemDecision> {
        self.decisions.iter()
    }

    /// Number of signals in history.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Number of decisions held.
    pub fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    /// Proposals from the latest cycle.
    pub fn proposals(&self) -> &[EvolutionProposal] {
        &self.proposals
    }

    /// Pressure from the latest cycle.
    pub fn pressure(&self) -> RiskLevel {
        self.pressure
    }

    /// Advisory from the latest cycle; empty before the first cycle.
    pub fn roadmap(&self) -> &'static str {
        self.roadmap
    }

    /// Last ceiling the limiter accepted.
    pub fn applied_limit(&self) -> Option<u32> {
        self.applied_limit
    }

    /// Build mode used to floor ceilings.
    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Advisory audit score in `[0, 100)`.
    pub fn audit_score(&mut self) -> f64 {
        self.brain.audit_score()
    }

    /// Drop all signals, decisions and proposals.
    pub fn clear(&mut self) {
        self.signals.clear();
        self.decisions.clear();
        self.proposals.clear();
        self.pressure = RiskLevel::Low;
        self.roadmap = "";
    }
}
