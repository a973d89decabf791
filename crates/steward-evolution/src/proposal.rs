//! # Proposal Model
//!
//! An [`EvolutionProposal`] is a suggested remediation derived from signal
//! history. Proposals are regenerated wholesale on every cycle, so the
//! same signal yields a fresh `id` and `created_at` each time. The
//! [`fingerprint`](EvolutionProposal::fingerprint) is stable across cycles
//! and is what callers should compare when they need to de-duplicate.
//!
//! ## Fingerprint
//!
//! `SHA-256(kind || 0x00 || source || 0x00 || message)`, hex encoded. The
//! separators keep `("ab", "c")` and `("a", "bc")` apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

use steward_kernel::SystemSignal;

/// Estimated effort to carry out a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// Hours.
    Small,
    /// Days.
    Medium,
    /// Weeks.
    Large,
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::Small => f.write_str("small"),
            Effort::Medium => f.write_str("medium"),
            Effort::Large => f.write_str("large"),
        }
    }
}

/// Which generator produced a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalKind {
    /// From the entropy reducer, one per drifted signal.
    Cleanup,
    /// From the evolution engine, one per historical signal.
    Evolve,
}

impl ProposalKind {
    fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::Cleanup => "cleanup",
            ProposalKind::Evolve => "evolve",
        }
    }
}

/// A suggested remediation or refactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionProposal {
    /// Generated unique identifier.
    pub id: String,
    /// Generator that produced this proposal.
    pub kind: ProposalKind,
    /// Short headline.
    pub title: String,
    /// What was observed.
    pub description: String,
    /// Expected effect of acting on it.
    pub impact: String,
    /// Estimated effort.
    pub effort: Effort,
    /// Whether the change can be rolled back.
    pub reversible: bool,
    /// When the proposal was generated.
    pub created_at: DateTime<Utc>,
    /// Concrete next step.
    pub remediation: String,
    fingerprint: String,
}

impl EvolutionProposal {
    /// Creates a proposal for a signal with a fresh id and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn for_signal(
        kind: ProposalKind,
        signal: &SystemSignal,
        title: String,
        description: String,
        impact: String,
        effort: Effort,
        reversible: bool,
        remediation: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            description,
            impact,
            effort,
            reversible,
            created_at: Utc::now(),
            remediation,
            fingerprint: fingerprint(kind, &signal.source, &signal.message),
        }
    }

    /// Stable content hash of the generating kind and signal.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(kind: ProposalKind, source: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(source.as_bytes());
    hasher.update([0u8]);
    hasher.update(message.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
