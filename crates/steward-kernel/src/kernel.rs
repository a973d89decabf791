//! Ethical kernel facade
//!
//! Walks the rule registry against a signal and reports the first failing
//! rule. Pure: no state beyond the registry it was built with.

use crate::rules::{default_rules, EthicalRule};
use crate::signal::{RiskLevel, SystemSignal};

/// Outcome of running the registry against one action.
#[derive(Debug, Clone, Copy)]
pub struct Validation<'a> {
    /// The first rule that failed, in registry order.
    pub failing_rule: Option<&'a EthicalRule>,
}

impl Validation<'_> {
    /// Returns true when every rule passed.
    #[inline]
    pub fn allowed(&self) -> bool {
        self.failing_rule.is_none()
    }
}

/// The ethical kernel - evaluates the fixed rule registry
pub struct EthicalKernel {
    rules: Vec<EthicalRule>,
}

impl EthicalKernel {
    /// Create a kernel over the built-in three-rule registry
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a kernel over a custom registry (order is evaluation order)
    pub fn with_rules(rules: Vec<EthicalRule>) -> Self {
        Self { rules }
    }

    /// Registered rules in evaluation order
    pub fn rules(&self) -> &[EthicalRule] {
        &self.rules
    }

    /// Validate an action performed in a domain.
    ///
    /// The action is wrapped in a synthetic low-risk signal with the domain
    /// as its source, so source-aware rules still see the domain.
    pub fn validate_action(&self, action: &str, domain: &str) -> Validation<'_> {
        let signal = SystemSignal::new(domain, action, RiskLevel::Low);
        self.check(&signal)
    }

    /// Run the registry against a signal, first failure wins
    pub fn check(&self, signal: &SystemSignal) -> Validation<'_> {
        Validation {
            failing_rule: self.rules.iter().find(|rule| !rule.evaluate(signal)),
        }
    }
}

impl Default for EthicalKernel {
    fn default() -> Self {
        Self::new()
    }
}
