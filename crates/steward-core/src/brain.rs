//! The orchestrating brain.
//!
//! [`SystemBrain`] wires the audit, governance, evolution and strategy
//! engines together. It holds no signal state of its own: every call is a
//! function of its input plus the static rule and scenario tables. The
//! buffers live in [`SystemStore`](crate::SystemStore).

use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use steward_evolution::{DriftDetector, EntropyReducer, EvolutionEngine, EvolutionProposal};
use steward_governance::{AuditEngine, GovernanceEngine, SystemDecision};
use steward_kernel::{RiskLevel, SystemSignal, INTERCEPTED_KEY};
use steward_monitor::StrategyEngine;

/// Result of one pass over signal history.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Cleanup proposals first, then evolve proposals.
    pub proposals: Vec<EvolutionProposal>,
    /// Pressure tier for the history.
    pub pressure: RiskLevel,
    /// Advisory for that tier.
    pub roadmap: &'static str,
}

/// Canned signal batches for demos and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scenario {
    /// Bulk termination pushed through the HR API.
    MassTermination,
    /// Personal data heading out of the system.
    DataLeak,
    /// Configuration and job drift across subsystems.
    SystemEntropy,
    /// A single routine event. Used for any unknown name.
    Baseline,
}

impl Scenario {
    /// Every scenario, baseline last.
    pub const ALL: [Scenario; 4] = [
        Scenario::MassTermination,
        Scenario::DataLeak,
        Scenario::SystemEntropy,
        Scenario::Baseline,
    ];

    /// Resolves a scenario name; unknown names fall back to [`Scenario::Baseline`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "MASS_TERMINATION" => Scenario::MassTermination,
            "DATA_LEAK" => Scenario::DataLeak,
            "SYSTEM_ENTROPY" => Scenario::SystemEntropy,
            _ => Scenario::Baseline,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::MassTermination => "MASS_TERMINATION",
            Scenario::DataLeak => "DATA_LEAK",
            Scenario::SystemEntropy => "SYSTEM_ENTROPY",
            Scenario::Baseline => "BASELINE",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orchestrates the governance pipeline.
///
/// # Example
///
/// ```rust
/// use steward_core::{RiskLevel, Scenario, SystemBrain};
///
/// let brain = SystemBrain::new();
/// let signals = brain.simulate_scenario(Scenario::MassTermination);
///
/// let decision = brain.ingest(&signals[0]);
/// assert!(decision.is_blocked());
///
/// let report = brain.cycle(&signals);
/// assert_eq!(report.pressure, RiskLevel::Critical);
/// ```
pub struct SystemBrain {
    audit: AuditEngine,
    governance: GovernanceEngine,
    drift: DriftDetector,
    entropy: EntropyReducer,
    evolution: EvolutionEngine,
    strategy: StrategyEngine,
}

impl Default for SystemBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBrain {
    /// Creates a brain with default engines.
    pub fn new() -> Self {
        Self::with_components(AuditEngine::new(), GovernanceEngine::new())
    }

    /// Creates a brain with a custom audit engine and governance engine.
    pub fn with_components(audit: AuditEngine, governance: GovernanceEngine) -> Self {
        Self {
            audit,
            governance,
            drift: DriftDetector::new(),
            entropy: EntropyReducer::new(),
            evolution: EvolutionEngine::new(),
            strategy: StrategyEngine::new(),
        }
    }

    /// Returns the governance engine.
    pub fn governance(&self) -> &GovernanceEngine {
        &self.governance
    }

    /// Audits and evaluates one signal.
    ///
    /// Always yields a decision: evaluation cannot fail.
    pub fn ingest(&self, signal: &SystemSignal) -> SystemDecision {
        self.audit.collect(signal);

        let decision = self.governance.evaluate(signal);
        if decision.is_blocked() {
            warn!(
                domain = %decision.domain,
                rule = decision.forensics.rule_id.as_deref().unwrap_or("unknown"),
                "action blocked: {}",
                decision.reason
            );
        }
        decision
    }

    /// Recomputes proposals and pressure over a signal history.
    pub fn cycle(&self, signals: &[SystemSignal]) -> CycleReport {
        let drifted = self.drift.detect(signals);
        let mut proposals = self.entropy.suggest_cleanup(&drifted);
        proposals.extend(self.evolution.analyze_history(signals));
        self.evolution.propose(&proposals);

        let pressure = self.strategy.assess_pressure(signals);
        let roadmap = self.strategy.shape_roadmap(pressure);
        info!(%pressure, signals = signals.len(), drifted = drifted.len(), "roadmap: {}", roadmap);

        CycleReport {
            proposals,
            pressure,
            roadmap,
        }
    }

    /// Advisory audit score in `[0, 100)`.
    pub fn audit_score(&mut self) -> f64 {
        self.audit.score()
    }

    /// Produces the canned signal batch for a scenario.
    pub fn simulate_scenario(&self, scenario: Scenario) -> Vec<SystemSignal> {
        match scenario {
            Scenario::MassTermination => vec![
                SystemSignal::new(
                    "HR_API",
                    "Terminate 450 employees in Operations via bulk workflow",
                    RiskLevel::Critical,
                )
                .with_metadata(INTERCEPTED_KEY, true),
                SystemSignal::new(
                    "PAYROLL",
                    "Stop salary payments for terminated staff in next run",
                    RiskLevel::High,
                ),
            ],
            Scenario::DataLeak => vec![
                SystemSignal::new(
                    "EXPORT_SERVICE",
                    "Export employee table with SSN and passport numbers to external drive",
                    RiskLevel::Critical,
                )
                .with_metadata(INTERCEPTED_KEY, true),
                SystemSignal::new(
                    "AUDIT_LOG",
                    "Unusual download volume from the records module",
                    RiskLevel::High,
                ),
            ],
            Scenario::SystemEntropy => vec![
                SystemSignal::new(
                    "CONFIG_SERVICE",
                    "Leave policy overrides diverged across 12 regions",
                    RiskLevel::Medium,
                ),
                SystemSignal::new(
                    "SCHEDULER",
                    "Attendance sync job failed three consecutive runs",
                    RiskLevel::High,
                ),
                SystemSignal::new(
                    "CACHE",
                    "Stale org chart served to dashboard",
                    RiskLevel::Medium,
                ),
                SystemSignal::new(
                    "INTEGRATIONS",
                    "Deprecated payroll connector still receiving traffic",
                    RiskLevel::Medium,
                ),
            ],
            Scenario::Baseline => vec![SystemSignal::new(
                "UI",
                "Routine dashboard refresh",
                RiskLevel::Low,
            )],
        }
    }
}
