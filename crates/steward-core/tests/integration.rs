//! # Steward Integration Tests
//!
//! End-to-end checks of the pipeline's observable contract.
//!
//! ## Coverage
//!
//! | Property | Test |
//! |----------|------|
//! | Primacy words block (message or source) | `test_primacy_words_block` |
//! | PII patterns block after primacy | `test_privacy_after_primacy` |
//! | Clean messages pass | `test_clean_message_allowed` |
//! | Decision constants | `test_decision_constants` |
//! | Pressure tiers | `test_pressure_tiers` |
//! | Drift band excludes critical | `test_drift_band_boundary` |
//! | Scenario fixture | `test_mass_termination_fixture` |
//! | One evolve proposal per signal | `test_evolution_one_per_signal` |

use steward_core::{
    Effort, EthicalKernel, LogicBranch, RiskLevel, Scenario, SystemBrain, SystemSignal,
};
use steward_evolution::{DriftDetector, EvolutionEngine};
use steward_governance::GovernanceEngine;
use steward_kernel::{HUMAN_PRIMACY_ID, PRIVACY_GUARD_ID};
use steward_monitor::StrategyEngine;

fn signal(source: &str, message: &str, risk: RiskLevel) -> SystemSignal {
    SystemSignal::new(source, message, risk)
}

// =============================================================================
// ETHICAL KERNEL
// =============================================================================

#[test]
fn test_primacy_words_block() {
    let kernel = EthicalKernel::new();
    let cases = [
        ("Terminate the contract", "HR"),
        ("schedule DISCIPLINE hearing", "HR"),
        ("Fire the night shift", "HR"),
        ("Punish late arrivals", "ATTENDANCE"),
        ("Sync roster", "fire_drill_service"),
    ];
    for (action, domain) in cases {
        let result = kernel.validate_action(action, domain);
        assert!(!result.allowed(), "{} / {}", action, domain);
        assert_eq!(result.failing_rule.unwrap().id, HUMAN_PRIMACY_ID);
    }
}

#[test]
fn test_privacy_after_primacy() {
    let kernel = EthicalKernel::new();

    let result = kernel.validate_action("Send SSN list to vendor", "EXPORT");
    assert_eq!(result.failing_rule.unwrap().id, PRIVACY_GUARD_ID);

    let result = kernel.validate_action("Store credit card for reimbursements", "EXPENSES");
    assert_eq!(result.failing_rule.unwrap().id, PRIVACY_GUARD_ID);

    // Primacy is declared first and wins.
    let result = kernel.validate_action("Terminate and archive passport", "HR");
    assert_eq!(result.failing_rule.unwrap().id, HUMAN_PRIMACY_ID);
}

#[test]
fn test_clean_message_allowed() {
    let kernel = EthicalKernel::new();
    let result = kernel.validate_action("Approve annual leave for Dana", "LEAVE");
    assert!(result.allowed());
    assert!(result.failing_rule.is_none());
}

// =============================================================================
// GOVERNANCE
// =============================================================================

#[test]
fn test_decision_constants() {
    let engine = GovernanceEngine::new();

    let allowed = engine.evaluate(&signal("LEAVE", "Approve annual leave", RiskLevel::Low));
    assert_eq!(allowed.confidence, 0.9);
    assert_eq!(allowed.forensics.logic_branch, LogicBranch::PermissionDefault);

    let blocked = engine.evaluate(&signal("HR", "Punish the team", RiskLevel::Low));
    assert_eq!(blocked.confidence, 0.2);
    assert_eq!(blocked.forensics.logic_branch, LogicBranch::RestrictionTriggered);

    assert!(allowed.human_override_allowed && blocked.human_override_allowed);
}

// =============================================================================
// STRATEGY
// =============================================================================

#[test]
fn test_pressure_tiers() {
    let strategy = StrategyEngine::new();
    let low = |n: usize| vec![signal("x", "y", RiskLevel::Low); n];

    assert_eq!(
        strategy.assess_pressure(&[signal("x", "y", RiskLevel::Critical)]),
        RiskLevel::Critical
    );
    assert_eq!(strategy.assess_pressure(&low(11)), RiskLevel::High);
    assert_eq!(strategy.assess_pressure(&low(6)), RiskLevel::Medium);
    assert_eq!(strategy.assess_pressure(&low(3)), RiskLevel::Low);
}

// =============================================================================
// EVOLUTION
// =============================================================================

#[test]
fn test_drift_band_boundary() {
    let signals: Vec<SystemSignal> = RiskLevel::ALL
        .iter()
        .map(|&risk| signal(risk.as_str(), "event", risk))
        .collect();
    let drifted: Vec<RiskLevel> = DriftDetector::new()
        .detect(&signals)
        .into_iter()
        .map(|s| s.risk)
        .collect();

    // Critical sits outside the drift band.
    assert_eq!(drifted, vec![RiskLevel::Medium, RiskLevel::High]);
}

#[test]
fn test_evolution_one_per_signal() {
    let signals = vec![
        signal("a", "one", RiskLevel::Low),
        signal("b", "two", RiskLevel::Critical),
        signal("c", "three", RiskLevel::Medium),
    ];
    let proposals = EvolutionEngine::new().analyze_history(&signals);
    assert_eq!(proposals.len(), signals.len());
    assert!(proposals.iter().all(|p| p.effort == Effort::Large));
}

// =============================================================================
// BRAIN
// =============================================================================

#[test]
fn test_mass_termination_fixture() {
    let signals = SystemBrain::new().simulate_scenario(Scenario::from_name("MASS_TERMINATION"));
    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0].risk, RiskLevel::Critical);
    assert_eq!(signals[0].source, "HR_API");
}

#[test]
fn test_ingest_then_cycle() {
    let brain = SystemBrain::new();
    let history = brain.simulate_scenario(Scenario::DataLeak);

    let decisions: Vec<_> = history.iter().map(|s| brain.ingest(s)).collect();
    assert!(decisions[0].is_blocked());
    assert!(decisions[0].intercepted);
    assert!(decisions[1].is_allowed());

    let report = brain.cycle(&history);
    assert_eq!(report.pressure, RiskLevel::Critical);
    // 1 drifted (high) + 2 history
    assert_eq!(report.proposals.len(), 3);
}
