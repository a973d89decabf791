//! # Ethical Rule Registry
//!
//! Rules are explicit `{id, predicate, message}` records evaluated in
//! declaration order. The built-in registry holds exactly three entries:
//!
//! | Order | Id | Predicate |
//! |-------|----|-----------|
//! | 1 | `rule-human-primacy` | Deny words in message or source |
//! | 2 | `rule-privacy-guard` | PII pattern in message |
//! | 3 | `rule-bias-check` | Protected-attribute term in message |
//!
//! Matching is naive substring/pattern matching. A rule *passes* when its
//! predicate finds nothing to object to.

use regex::Regex;

use crate::signal::SystemSignal;

/// Id of the human-primacy rule.
pub const HUMAN_PRIMACY_ID: &str = "rule-human-primacy";
/// Id of the privacy rule.
pub const PRIVACY_GUARD_ID: &str = "rule-privacy-guard";
/// Id of the bias rule.
pub const BIAS_CHECK_ID: &str = "rule-bias-check";

/// Words that mark an adverse employment action reserved for humans.
pub const HUMAN_PRIMACY_WORDS: &[&str] = &["terminate", "discipline", "fire", "punish"];

const PRIVACY_PATTERN: &str = r"(?i)ssn|passport|credit card";
const BIAS_PATTERN: &str =
    r"(?i)\b(race|gender|religion|ethnicity|pregnan(?:t|cy)|disability|nationality)\b";

/// How a rule inspects a signal.
#[derive(Debug, Clone)]
pub enum RulePredicate {
    /// Fails when the message or the source contains any of the words,
    /// compared case-insensitively as substrings.
    DenyWords(Vec<String>),
    /// Fails when the message matches the pattern.
    DenyPattern(Regex),
}

impl RulePredicate {
    fn passes(&self, signal: &SystemSignal) -> bool {
        match self {
            RulePredicate::DenyWords(words) => {
                let message = signal.message.to_lowercase();
                let source = signal.source.to_lowercase();
                !words
                    .iter()
                    .any(|w| message.contains(w.as_str()) || source.contains(w.as_str()))
            }
            RulePredicate::DenyPattern(pattern) => !pattern.is_match(&signal.message),
        }
    }
}

/// A single entry in the rule registry.
#[derive(Debug, Clone)]
pub struct EthicalRule {
    /// Stable identifier (e.g. `rule-privacy-guard`).
    pub id: String,
    /// Short principle name, reported in decision forensics.
    pub name: String,
    /// What the rule protects.
    pub description: String,
    /// Reason reported when the rule fails.
    pub fail_message: String,
    predicate: RulePredicate,
}

impl EthicalRule {
    /// Creates a rule from an already-built predicate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        fail_message: impl Into<String>,
        predicate: RulePredicate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            fail_message: fail_message.into(),
            predicate,
        }
    }

    /// Creates a deny-word rule. Words are lowercased once here.
    pub fn deny_words<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        fail_message: impl Into<String>,
        words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self::new(id, name, description, fail_message, RulePredicate::DenyWords(words))
    }

    /// Creates a pattern rule.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn deny_pattern(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        fail_message: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::new(
            id,
            name,
            description,
            fail_message,
            RulePredicate::DenyPattern(regex),
        ))
    }

    /// Returns the rule's predicate.
    pub fn predicate(&self) -> &RulePredicate {
        &self.predicate
    }

    /// Returns `true` when the signal satisfies this rule.
    pub fn evaluate(&self, signal: &SystemSignal) -> bool {
        self.predicate.passes(signal)
    }
}

/// Builds the fixed three-entry registry, in evaluation order.
pub fn default_rules() -> Vec<EthicalRule> {
    vec![
        EthicalRule::deny_words(
            HUMAN_PRIMACY_ID,
            "Human Primacy",
            "Adverse employment actions must be decided by a person, not automated.",
            "Action affects employment status and requires a human decision-maker.",
            HUMAN_PRIMACY_WORDS,
        ),
        EthicalRule::new(
            PRIVACY_GUARD_ID,
            "Privacy Guard",
            "Sensitive personal identifiers must not leave their system of record.",
            "Action references protected personal data (SSN, passport or card numbers).",
            RulePredicate::DenyPattern(builtin_pattern(PRIVACY_PATTERN)),
        ),
        EthicalRule::new(
            BIAS_CHECK_ID,
            "Bias Mitigation",
            "Decisions must not be conditioned on protected attributes.",
            "Action references a protected attribute and may introduce bias.",
            RulePredicate::DenyPattern(builtin_pattern(BIAS_PATTERN)),
        ),
    ]
}

fn builtin_pattern(src: &str) -> Regex {
    Regex::new(src).expect("built-in rule pattern is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::RiskLevel;

    fn signal(source: &str, message: &str) -> SystemSignal {
        SystemSignal::new(source, message, RiskLevel::Low)
    }

    #[test]
    fn test_registry_order() {
        let ids: Vec<String> = default_rules().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![HUMAN_PRIMACY_ID, PRIVACY_GUARD_ID, BIAS_CHECK_ID]);
    }

    #[test]
    fn test_deny_words_checks_source_too() {
        let rules = default_rules();
        let primacy = &rules[0];
        assert!(!primacy.evaluate(&signal("FIRE_SERVICE", "Refresh roster")));
        assert!(!primacy.evaluate(&signal("HR", "Please DISCIPLINE the team")));
        assert!(primacy.evaluate(&signal("HR", "Approve vacation")));
    }

    #[test]
    fn test_privacy_pattern_ignores_source() {
        let rules = default_rules();
        let privacy = &rules[1];
        assert!(!privacy.evaluate(&signal("HR", "Export Passport scans")));
        assert!(privacy.evaluate(&signal("SSN_VAULT", "Rotate keys")));
    }

    #[test]
    fn test_bias_whole_words_only() {
        let rules = default_rules();
        let bias = &rules[2];
        assert!(!bias.evaluate(&signal("RECRUIT", "Filter candidates by gender")));
        assert!(!bias.evaluate(&signal("RECRUIT", "Flag pregnant applicants")));
        assert!(!bias.evaluate(&signal("RECRUIT", "Track the race to hire")));
        assert!(bias.evaluate(&signal("RECRUIT", "Review trace logs")));
    }

    #[test]
    fn test_custom_pattern_rejects_bad_regex() {
        let rule = EthicalRule::deny_pattern("x", "X", "d", "f", "(unclosed");
        assert!(rule.is_err());
    }
}
