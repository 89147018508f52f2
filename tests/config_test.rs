use std::collections::HashMap;
use std::path::PathBuf;

use tui_crossing::config::AppConfig;
use tui_crossing::core::{ConfigError, SimConfig, Simulation};
use tui_crossing::types::FRAME_MS;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn env(pairs: &[(&str, &str)]) -> AppConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn empty_environment_gives_defaults() {
    let config = env(&[]);
    assert_eq!(config.sim, SimConfig::default());
    assert_eq!(config.seed, None);
    assert_eq!(config.frame_ms, FRAME_MS);
    assert_eq!(config.log_path, None);
}

#[test]
fn environment_overrides_and_bad_values_fall_back() {
    let config = env(&[
        ("CROSSING_COLS", "7"),
        ("CROSSING_LANES", "four"),
        ("CROSSING_SEED", " 99 "),
        ("CROSSING_FRAME_MS", "0"),
        ("CROSSING_LOG_PATH", "/tmp/crossing.log"),
    ]);
    assert_eq!(config.sim.cols, 7);
    assert_eq!(config.sim.obstacle_lanes, 3);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.frame_ms, FRAME_MS);
    assert_eq!(config.log_path, Some(PathBuf::from("/tmp/crossing.log")));
}

#[test]
fn cli_flags_override_environment() {
    let mut config = env(&[("CROSSING_ENEMIES", "5")]);
    let run = config
        .apply_args(&args(&["--enemies", "2", "--seed", "42", "--frame-ms", "33"]))
        .unwrap();
    assert!(run);
    assert_eq!(config.sim.enemy_count, 2);
    assert_eq!(config.frame_ms, 33);
    assert_eq!(config.sim_config().seed, 42);
}

#[test]
fn bad_cli_values_are_errors() {
    let mut config = AppConfig::default();
    assert!(config.apply_args(&args(&["--cols", "wide"])).is_err());
    assert!(config.apply_args(&args(&["--lanes"])).is_err());
    assert!(config.apply_args(&args(&["--frame-ms", "0"])).is_err());
    assert!(config.apply_args(&args(&["--fly"])).is_err());
}

#[test]
fn help_stops_before_running() {
    let mut config = AppConfig::default();
    assert!(!config.apply_args(&args(&["--help"])).unwrap());
}

#[test]
fn invalid_shapes_fail_at_startup() {
    let mut config = AppConfig::default();
    config.apply_args(&args(&["--cols", "1", "--lanes", "1"])).unwrap();
    let err = Simulation::new(&config.sim_config()).err();
    assert_eq!(
        err,
        Some(ConfigError::TooManyCollectables { count: 7, cells: 1 })
    );
}

#[test]
fn inverted_speed_range_is_rejected() {
    let mut sim = SimConfig::default();
    sim.enemy.min_speed = 500.0;
    assert!(matches!(
        sim.validate(),
        Err(ConfigError::InvalidSpeedRange { .. })
    ));
}
