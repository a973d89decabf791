//! # Steward Core
//!
//! Governance pipeline facade for HR administrative actions.
//! Orchestrates the Ethical Kernel, Governance Engine, Evolution engines and
//! Strategy Engine, and owns the buffers that feed them.
//!
//! ## Pipeline
//!
//! | Stage | Component | Output |
//! |-------|-----------|--------|
//! | Audit | AuditEngine | log entry |
//! | Rules | EthicalKernel | first failing rule |
//! | Decision | GovernanceEngine | `SystemDecision` |
//! | Drift | DriftDetector + EntropyReducer | cleanup proposals |
//! | Evolution | EvolutionEngine | evolve proposals |
//! | Strategy | StrategyEngine | pressure tier + roadmap |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         STEWARD CORE                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   SystemSignal ──▶ ┌─────────────────┐                          │
//! │                    │   SystemStore   │  ← capped buffers         │
//! │                    └────────┬────────┘                          │
//! │                             ▼                                   │
//! │                    ┌─────────────────┐                          │
//! │                    │   SystemBrain   │  ← stateless facade       │
//! │                    └────────┬────────┘                          │
//! │         ┌───────────────────┼───────────────────┐               │
//! │         ▼                   ▼                   ▼               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐          │
//! │  │ Governance  │    │  Evolution  │    │  Strategy   │          │
//! │  │  (Kernel)   │    │   (Drift)   │    │ (Pressure)  │          │
//! │  └─────────────┘    └─────────────┘    └──────┬──────┘          │
//! │                                               ▼                 │
//! │                                        RateLimiter (optional)   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use steward_core::{RequestLimiter, Scenario, StewardConfig, SystemStore};
//!
//! let limiter = Arc::new(RequestLimiter::new(1000, Duration::from_secs(60)));
//! let mut store = SystemStore::new(&StewardConfig::default())?.with_limiter(limiter.clone());
//!
//! let decisions = store.run_scenario(Scenario::MassTermination);
//! assert!(decisions[0].is_blocked());
//! assert!(limiter.limit() <= 200);
//! # Ok::<(), steward_core::StewardError>(())
//! ```
//!
//! ## Notes
//!
//! - Evaluation is synchronous and cannot fail
//! - Rules are first-match-wins in registry order
//! - Proposals are regenerated on every cycle and replace the previous list
//! - Rate limiter failures never fail an ingest

mod brain;
mod config;
mod error;
mod store;

pub use brain::{CycleReport, Scenario, SystemBrain};
pub use config::{GlobalConfig, GovernanceConfig, StewardConfig};
pub use error::StewardError;
pub use store::SystemStore;

// Re-export component types for convenience
pub use steward_evolution::{Effort, EvolutionProposal, ProposalKind};
pub use steward_governance::{Forensics, LogicBranch, SystemDecision};
pub use steward_kernel::{EthicalKernel, RiskLevel, SystemSignal};
pub use steward_monitor::{BuildMode, RateCeilings, RateLimiter, RequestLimiter};

/// Core result type for steward operations.
pub type Result<T> = std::result::Result<T, StewardError>;

#[cfg(test)]
mod tests;
