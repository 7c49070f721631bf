use expense_core::config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_currency() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(cfg.last_opened_ledger.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.last_opened_ledger = Some(dir.path().join("household.txt"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.last_opened_ledger, cfg.last_opened_ledger);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, Config::default().currency);
}
