//! Evolution proposals over the full signal history.
//!
//! Unlike the entropy reducer this does not filter: every historical signal,
//! whatever its risk, yields one large-effort proposal. Nothing is persisted
//! or de-duplicated here.

use tracing::info;

use steward_kernel::SystemSignal;

use crate::proposal::{Effort, EvolutionProposal, ProposalKind};

/// Generates and announces evolution proposals.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvolutionEngine;

impl EvolutionEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// One `evolve` proposal per signal, in history order.
    pub fn analyze_history(&self, history: &[SystemSignal]) -> Vec<EvolutionProposal> {
        history
            .iter()
            .map(|signal| {
                EvolutionProposal::for_signal(
                    ProposalKind::Evolve,
                    signal,
                    format!("Evolve {} workflow", signal.source),
                    format!("Recurring pattern in {}: {}", signal.source, signal.message),
                    "Removes the root cause instead of its symptoms".to_string(),
                    Effort::Large,
                    true,
                    format!(
                        "Redesign the {} process so this event needs no manual handling",
                        signal.source
                    ),
                )
            })
            .collect()
    }

    /// Announces each proposal on the log.
    pub fn propose(&self, proposals: &[EvolutionProposal]) {
        for proposal in proposals {
            info!(
                id = %proposal.id,
                effort = %proposal.effort,
                reversible = proposal.reversible,
                "proposal: {}",
                proposal.title
            );
        }
    }
}
