//! Governance engine wrapping kernel verdicts into decision records.
//!
//! No risk weighting and no learning: confidence and branch are fixed by
//! whether the kernel allowed the action.

use uuid::Uuid;

use steward_kernel::{EthicalKernel, SystemSignal};

use crate::decision::{
    Forensics, LogicBranch, SystemDecision, ALLOWED_CONFIDENCE, BLOCKED_CONFIDENCE,
};

const ALLOWED_REASON: &str = "Action is consistent with every registered principle.";

/// Builds a [`SystemDecision`] for each signal.
///
/// # Example
///
/// ```rust
/// use steward_governance::GovernanceEngine;
/// use steward_kernel::{RiskLevel, SystemSignal};
///
/// let engine = GovernanceEngine::new();
/// let signal = SystemSignal::new("PAYROLL", "Export SSN column", RiskLevel::High);
/// let decision = engine.evaluate(&signal);
///
/// assert!(decision.is_blocked());
/// assert_eq!(decision.confidence, 0.2);
/// ```
pub struct GovernanceEngine {
    kernel: EthicalKernel,
}

impl Default for GovernanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GovernanceEngine {
    /// Creates an engine over the built-in rule registry.
    pub fn new() -> Self {
        Self::with_kernel(EthicalKernel::new())
    }

    /// Creates an engine over a custom kernel.
    pub fn with_kernel(kernel: EthicalKernel) -> Self {
        Self { kernel }
    }

    /// Returns the underlying kernel.
    pub fn kernel(&self) -> &EthicalKernel {
        &self.kernel
    }

    /// Evaluates a signal.
    ///
    /// Allowed decisions list every principle in the registry. Blocked
    /// decisions list only the failing principle and carry its id and a
    /// remediation hint.
    pub fn evaluate(&self, signal: &SystemSignal) -> SystemDecision {
        let verdict = self.kernel.validate_action(&signal.message, &signal.source);

        let (reason, confidence, remediation, forensics) = match verdict.failing_rule {
            None => (
                ALLOWED_REASON.to_string(),
                ALLOWED_CONFIDENCE,
                None,
                Forensics {
                    principles: self.kernel.rules().iter().map(|r| r.name.clone()).collect(),
                    rule_id: None,
                    logic_branch: LogicBranch::PermissionDefault,
                },
            ),
            Some(rule) => (
                rule.fail_message.clone(),
                BLOCKED_CONFIDENCE,
                Some(format!(
                    "Route to a human reviewer. {} ({})",
                    rule.description, rule.name
                )),
                Forensics {
                    principles: vec![rule.name.clone()],
                    rule_id: Some(rule.id.clone()),
                    logic_branch: LogicBranch::RestrictionTriggered,
                },
            ),
        };

        SystemDecision {
            id: Uuid::new_v4().to_string(),
            domain: signal.source.clone(),
            action: signal.message.clone(),
            reason,
            confidence,
            human_override_allowed: true,
            remediation,
            forensics,
            intercepted: signal.intercepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_kernel::{RiskLevel, HUMAN_PRIMACY_ID, PRIVACY_GUARD_ID};

    #[test]
    fn test_allowed_decision_constants() {
        let engine = GovernanceEngine::new();
        let signal = SystemSignal::new("UI", "Refresh leave calendar", RiskLevel::Low);
        let decision = engine.evaluate(&signal);

        assert!(decision.is_allowed());
        assert_eq!(decision.confidence, 0.9);
        assert_eq!(decision.forensics.logic_branch.as_str(), "PERMISSION_DEFAULT");
        assert!(decision.forensics.rule_id.is_none());
        assert_eq!(decision.forensics.principles.len(), 3);
        assert!(decision.remediation.is_none());
        assert!(decision.human_override_allowed);
    }

    #[test]
    fn test_blocked_decision_constants() {
        let engine = GovernanceEngine::new();
        let signal = SystemSignal::new("HR_API", "Terminate 40 employees", RiskLevel::Critical);
        let decision = engine.evaluate(&signal);

        assert!(decision.is_blocked());
        assert_eq!(decision.confidence, 0.2);
        assert_eq!(
            decision.forensics.logic_branch.as_str(),
            "RESTRICTION_TRIGGERED"
        );
        assert_eq!(decision.forensics.rule_id.as_deref(), Some(HUMAN_PRIMACY_ID));
        assert_eq!(decision.forensics.principles, vec!["Human Primacy".to_string()]);
        assert!(decision.remediation.is_some());
        assert!(decision.human_override_allowed);
    }

    #[test]
    fn test_copies_signal_fields() {
        let engine = GovernanceEngine::new();
        let signal = SystemSignal::new("EXPORT", "Share passport scans", RiskLevel::High)
            .with_metadata("intercepted", true);
        let decision = engine.evaluate(&signal);

        assert_eq!(decision.domain, "EXPORT");
        assert_eq!(decision.action, "Share passport scans");
        assert!(decision.intercepted);
        assert_eq!(decision.forensics.rule_id.as_deref(), Some(PRIVACY_GUARD_ID));
    }

    #[test]
    fn test_ids_are_unique() {
        let engine = GovernanceEngine::new();
        let signal = SystemSignal::new("UI", "Open", RiskLevel::Low);
        let a = engine.evaluate(&signal);
        let b = engine.evaluate(&signal);
        assert_ne!(a.id, b.id);
        assert_eq!(a.reason, b.reason);
    }

    #[test]
    fn test_risk_does_not_weight_decision() {
        let engine = GovernanceEngine::new();
        let low = engine.evaluate(&SystemSignal::new("UI", "Open", RiskLevel::Low));
        let critical = engine.evaluate(&SystemSignal::new("UI", "Open", RiskLevel::Critical));
        assert_eq!(low.confidence, critical.confidence);
        assert!(critical.is_allowed());
    }
}
