//! # Steward Governance
//!
//! Turns ethical-kernel verdicts into structured decision records and keeps
//! an audit trail of every signal that reaches the pipeline.
//!
//! ## Overview
//!
//! | Component | Role |
//! |-----------|------|
//! | [`GovernanceEngine`] | Signal → [`SystemDecision`] with reason, confidence and forensics |
//! | [`AuditEngine`] | Fire-and-forget logging of every signal, advisory score |
//!
//! Decisions are deterministic except for their generated id. Confidence is
//! a fixed constant per branch, not a computed probability:
//!
//! | Branch | Confidence | Remediation |
//! |--------|------------|-------------|
//! | `PERMISSION_DEFAULT` | 0.9 | none |
//! | `RESTRICTION_TRIGGERED` | 0.2 | route to a human reviewer |
//!
//! Every decision allows a human override.
//!
//! ## Usage
//!
//! ```rust
//! use steward_governance::{AuditEngine, GovernanceEngine};
//! use steward_kernel::{RiskLevel, SystemSignal};
//!
//! let audit = AuditEngine::with_seed(7);
//! let engine = GovernanceEngine::new();
//!
//! let signal = SystemSignal::new("LEAVE", "Approve parental leave", RiskLevel::Low);
//! audit.collect(&signal);
//! let decision = engine.evaluate(&signal);
//! assert!(decision.is_allowed());
//! ```

pub mod audit;
pub mod decision;
pub mod engine;

pub use audit::AuditEngine;
pub use decision::{
    Forensics, LogicBranch, SystemDecision, ALLOWED_CONFIDENCE, BLOCKED_CONFIDENCE,
};
pub use engine::GovernanceEngine;
