//! Decision records produced for each ingested signal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence reported for an allowed action.
pub const ALLOWED_CONFIDENCE: f64 = 0.9;

/// Confidence reported for a blocked action.
pub const BLOCKED_CONFIDENCE: f64 = 0.2;

/// Which branch of the governance logic produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicBranch {
    /// No rule objected; the action proceeds.
    PermissionDefault,
    /// A rule failed; the action is held.
    RestrictionTriggered,
}

impl LogicBranch {
    /// Returns the wire name (e.g. `PERMISSION_DEFAULT`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicBranch::PermissionDefault => "PERMISSION_DEFAULT",
            LogicBranch::RestrictionTriggered => "RESTRICTION_TRIGGERED",
        }
    }
}

impl fmt::Display for LogicBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata describing how a decision was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forensics {
    /// Principle names that were weighed.
    pub principles: Vec<String>,
    /// Id of the rule that failed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// Branch that executed.
    pub logic_branch: LogicBranch,
}

/// The allow/deny verdict plus rationale for one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDecision {
    /// Generated unique identifier.
    pub id: String,
    /// Copied from the signal source.
    pub domain: String,
    /// Copied from the signal message.
    pub action: String,
    /// Human-readable justification.
    pub reason: String,
    /// Fixed confidence constant, see [`ALLOWED_CONFIDENCE`] / [`BLOCKED_CONFIDENCE`].
    pub confidence: f64,
    /// Whether an operator may override. Always true.
    pub human_override_allowed: bool,
    /// Guidance, present only when blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
    /// How the decision was reached.
    pub forensics: Forensics,
    /// Copied from the signal's `intercepted` metadata flag.
    pub intercepted: bool,
}

impl SystemDecision {
    /// Returns true if the action was allowed.
    pub fn is_allowed(&self) -> bool {
        self.forensics.logic_branch == LogicBranch::PermissionDefault
    }

    /// Returns true if the action was blocked.
    pub fn is_blocked(&self) -> bool {
        self.forensics.logic_branch == LogicBranch::RestrictionTriggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_branch_wire_names() {
        let json = serde_json::to_string(&LogicBranch::RestrictionTriggered).unwrap();
        assert_eq!(json, "\"RESTRICTION_TRIGGERED\"");
        assert_eq!(LogicBranch::PermissionDefault.to_string(), "PERMISSION_DEFAULT");
    }

    #[test]
    fn test_decision_omits_empty_remediation() {
        let decision = SystemDecision {
            id: "d-1".to_string(),
            domain: "UI".to_string(),
            action: "Open".to_string(),
            reason: "ok".to_string(),
            confidence: ALLOWED_CONFIDENCE,
            human_override_allowed: true,
            remediation: None,
            forensics: Forensics {
                principles: vec![],
                rule_id: None,
                logic_branch: LogicBranch::PermissionDefault,
            },
            intercepted: false,
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(!json.contains("remediation"));
        assert!(decision.is_allowed());
        assert!(!decision.is_blocked());
    }
}
