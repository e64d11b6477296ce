mod common;

use common::ym;
use moomoolah_core::{
    config::{Config, ConfigManager},
    currency::CurrencyCode,
};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_file_is_missing() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::new(temp.path().join("config.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.currency.as_str(), "EUR");
}

#[test]
fn save_and_reload_round_trips() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::new(temp.path().join("nested").join("config.json"));
    let config = Config {
        currency: CurrencyCode::new("brl"),
        history_months: 6,
        forecast_months: 24,
    };
    manager.save(&config).expect("save config");

    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().expect("reload"), config);
}

#[test]
fn save_refuses_invalid_config() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::new(temp.path().join("config.json"));
    let config = Config {
        currency: CurrencyCode::new("XYZ"),
        ..Config::default()
    };
    assert!(manager.save(&config).is_err());
    assert!(!manager.path().exists());
}

#[test]
fn windows_surround_the_anchor_month() {
    let config = Config::default();
    let anchor = ym(2024, 2);

    let history = config.history_window(anchor);
    assert_eq!(history.months(), &[ym(2023, 11), ym(2023, 12), ym(2024, 1)]);

    let forecast = config.forecast_window(anchor);
    assert_eq!(forecast.len(), 12);
    assert_eq!(forecast.first(), Some(ym(2024, 2)));
    assert_eq!(forecast.last(), Some(ym(2025, 1)));
}

#[test]
fn json_currency_selects_display_format() {
    let config = Config::from_json(r#"{"currency":"JPY","history_months":1}"#).expect("parse");
    let format = config.currency_format().expect("known currency");
    assert_eq!(format.symbol, "¥");
    assert_eq!(config.history_months, 1);
    assert_eq!(config.forecast_months, 12);
}
