//! Cleanup proposals for drifted signals.

use steward_kernel::SystemSignal;

use crate::proposal::{Effort, EvolutionProposal, ProposalKind};

/// Maps each drifted signal 1:1 to a reversible, medium-effort cleanup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyReducer;

impl EntropyReducer {
    /// Creates a reducer.
    pub fn new() -> Self {
        Self
    }

    /// Builds one cleanup proposal per drifted signal, in input order.
    pub fn suggest_cleanup(&self, drifted: &[&SystemSignal]) -> Vec<EvolutionProposal> {
        drifted
            .iter()
            .map(|signal| {
                EvolutionProposal::for_signal(
                    ProposalKind::Cleanup,
                    signal,
                    format!("Stabilize {}", signal.source),
                    format!("Drift observed ({} risk): {}", signal.risk, signal.message),
                    "Reduces configuration entropy and alert noise".to_string(),
                    Effort::Medium,
                    true,
                    format!(
                        "Re-baseline {} against its governance policy and clear stale overrides",
                        signal.source
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_kernel::RiskLevel;

    #[test]
    fn test_one_cleanup_per_drifted_signal() {
        let a = SystemSignal::new("CONFIG", "Stale cache", RiskLevel::Medium);
        let b = SystemSignal::new("SCHEDULER", "Missed run", RiskLevel::High);
        let proposals = EntropyReducer::new().suggest_cleanup(&[&a, &b]);

        assert_eq!(proposals.len(), 2);
        assert_eq!(proposals[0].title, "Stabilize CONFIG");
        assert_eq!(proposals[1].title, "Stabilize SCHEDULER");
        for p in &proposals {
            assert_eq!(p.kind, ProposalKind::Cleanup);
            assert_eq!(p.effort, Effort::Medium);
            assert!(p.reversible);
        }
    }

    #[test]
    fn test_no_drift_no_cleanup() {
        assert!(EntropyReducer::new().suggest_cleanup(&[]).is_empty());
    }
}
