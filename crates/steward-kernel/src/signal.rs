//! # Core Types for the Governance Pipeline
//!
//! This module defines the observation type fed into every stage of the
//! pipeline ([`SystemSignal`]) and its ordinal severity ([`RiskLevel`]).
//!
//! ## Design Principles
//!
//! 1. **Ordinal Severity** - `Low < Medium < High < Critical`, so tiers can be
//!    compared and maxed directly
//! 2. **Open Metadata** - Callers attach arbitrary JSON values; the pipeline
//!    only reads the keys it knows (`intercepted`)
//! 3. **Serializable** - All types derive Serde traits so signals can be fed
//!    as JSON lines and echoed into audit trails

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Metadata key carrying whether the originating action was intercepted
/// before it reached the backend.
pub const INTERCEPTED_KEY: &str = "intercepted";

/// Ordinal severity attached to a signal, also used as the pressure tier.
///
/// | Variant | Meaning |
/// |---------|---------|
/// | `Low` | Routine activity |
/// | `Medium` | Unusual but expected activity |
/// | `High` | Activity that warrants attention |
/// | `Critical` | Activity that must be stopped or reviewed now |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Routine activity.
    #[default]
    Low,
    /// Unusual but expected activity.
    Medium,
    /// Activity that warrants attention.
    High,
    /// Activity that must be stopped or reviewed now.
    Critical,
}

impl RiskLevel {
    /// All tiers in ascending order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Returns the lowercase wire name of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown risk level: '{0}' (expected low, medium, high or critical)")]
pub struct ParseRiskError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(ParseRiskError(s.to_string())),
        }
    }
}

/// An observation emitted by some part of the application.
///
/// Signals are transient: callers build them, the store keeps the most
/// recent ones in a bounded history, and nothing persists them.
///
/// # Example
///
/// ```rust
/// use steward_kernel::{RiskLevel, SystemSignal};
///
/// let signal = SystemSignal::new("PAYROLL", "Run monthly payroll", RiskLevel::Low)
///     .with_metadata("intercepted", true);
/// assert!(signal.intercepted());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSignal {
    /// Origin subsystem or module.
    pub source: String,
    /// Free-text description of the event.
    pub message: String,
    /// Ordinal severity.
    pub risk: RiskLevel,
    /// Open-ended key/value metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

impl SystemSignal {
    /// Creates a signal without metadata.
    pub fn new(source: impl Into<String>, message: impl Into<String>, risk: RiskLevel) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            risk,
            metadata: None,
        }
    }

    /// Attaches a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Looks up a metadata entry.
    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    /// Returns the `intercepted` metadata flag, `false` when absent or not a bool.
    pub fn intercepted(&self) -> bool {
        self.metadata_value(INTERCEPTED_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
