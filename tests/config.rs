use std::fs;

use whr_toolbox::config;
use whr_toolbox::whr::{FuelSpec, FuelType};

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("whr_cfg_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = scratch_dir("missing");
    let path = dir.join("config.toml");
    let cfg = config::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.currency_label, "Rs.");
    assert_eq!(cfg.defaults.fuel_type, FuelSpec::Known(FuelType::NaturalGas));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn plant_defaults_are_read_from_file() {
    let dir = scratch_dir("defaults");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "language = \"ko\"\n\n[defaults]\nflue_temp_in = 350.0\nflue_temp_out = 140.0\n\
         flow_rate = 20000.0\nfuel_type = \"Coal\"\nfuel_cost = 0.08\n\
         operating_hours = 7000.0\ninstallation_cost = 900000.0\n",
    )
    .unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.defaults.fuel_type, FuelSpec::Known(FuelType::Coal));
    assert_eq!(cfg.defaults.steam_demand, Some(5000.0));
    assert_eq!(cfg.chat.model, config::ChatConfig::default().model);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn broken_file_is_an_error() {
    let dir = scratch_dir("broken");
    let path = dir.join("config.toml");
    fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
    let _ = fs::remove_dir_all(&dir);
}
