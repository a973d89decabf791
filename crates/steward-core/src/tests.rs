//! Unit tests for steward-core.

#[test]
fn test_crate_structure() {
    // Smoke test - verifies the re-exported surface fits together
    use crate::{RiskLevel, Scenario, StewardConfig, SystemBrain, SystemSignal, SystemStore};

    let _config = StewardConfig::default();
    let _brain = SystemBrain::new();
    let _store = SystemStore::new(&StewardConfig::default()).unwrap();
    let _signal = SystemSignal::new("UI", "Open", RiskLevel::Low);
    let _scenario = Scenario::from_name("DATA_LEAK");
}
