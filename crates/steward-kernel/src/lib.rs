//! # Steward Kernel - Ethical Rule Layer
//!
//! The Ethical Kernel is the leaf of the Steward governance pipeline. It owns
//! the signal types every other stage consumes and the fixed registry of
//! ethical rules that decides whether an action may proceed.
//!
//! ## Rule Registry
//!
//! | Order | Rule | Blocks |
//! |-------|------|--------|
//! | 1 | Human Primacy | `terminate`, `discipline`, `fire`, `punish` in message or source |
//! | 2 | Privacy Guard | `ssn`, `passport`, `credit card` in message |
//! | 3 | Bias Mitigation | protected-attribute terms in message |
//!
//! Evaluation is first-match-wins in declaration order. A message that
//! violates several rules reports only the first.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   ETHICAL KERNEL                     │
//! ├──────────────────────────────────────────────────────┤
//! │                                                      │
//! │   SystemSignal ──▶ ┌────────────┐                    │
//! │                    │  PRIMACY   │── fail ──┐         │
//! │                    └─────┬──────┘          │         │
//! │                          ▼                 │         │
//! │                    ┌────────────┐          │         │
//! │                    │  PRIVACY   │── fail ──┤         │
//! │                    └─────┬──────┘          │         │
//! │                          ▼                 │         │
//! │                    ┌────────────┐          ▼         │
//! │                    │    BIAS    │── fail ──▶ Denied  │
//! │                    └─────┬──────┘                    │
//! │                          ▼                           │
//! │                       Allowed                        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use steward_kernel::EthicalKernel;
//!
//! let kernel = EthicalKernel::new();
//!
//! let verdict = kernel.validate_action("Terminate contractor accounts", "HR_API");
//! assert!(!verdict.allowed());
//! assert_eq!(verdict.failing_rule.unwrap().id, "rule-human-primacy");
//!
//! assert!(kernel.validate_action("Publish holiday calendar", "HR_API").allowed());
//! ```

pub mod kernel;
pub mod rules;
pub mod signal;

pub use kernel::{EthicalKernel, Validation};
pub use rules::{
    default_rules, EthicalRule, RulePredicate, BIAS_CHECK_ID, HUMAN_PRIMACY_ID, PRIVACY_GUARD_ID,
};
pub use signal::{ParseRiskError, RiskLevel, SystemSignal, INTERCEPTED_KEY};
