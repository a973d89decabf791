//! # Steward Evolution
//!
//! Derives remediation proposals from accumulated signal history.
//!
//! ## Components
//!
//! | Component | Input | Output |
//! |-----------|-------|--------|
//! | [`DriftDetector`] | full history | medium/high signals only |
//! | [`EntropyReducer`] | drifted signals | one reversible `cleanup` proposal each |
//! | [`EvolutionEngine`] | full history | one `evolve` proposal each, large effort |
//!
//! ```text
//!  history ──┬──▶ DriftDetector ──▶ EntropyReducer ──┐
//!            │                                       ├──▶ proposals
//!            └──────────────▶ EvolutionEngine ───────┘
//! ```
//!
//! Proposals are regenerated from scratch on every call. Callers that
//! append instead of replace will accumulate duplicates; compare
//! [`EvolutionProposal::fingerprint`] to collapse them.

pub mod drift;
pub mod entropy;
pub mod evolution;
pub mod proposal;

pub use drift::DriftDetector;
pub use entropy::EntropyReducer;
pub use evolution::EvolutionEngine;
pub use proposal::{Effort, EvolutionProposal, ProposalKind};
