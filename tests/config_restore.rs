use std::fs;
use std::path::PathBuf;

use coupled_pendulum::config::{AnimationConfig, AppConfig, DisplayConfig, ParametersConfig};

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "coupled_pendulum_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

fn assert_close(a: f64, b: f64, label: &str) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-9, "{label} mismatch: {a} vs {b}");
}

fn assert_config_eq(actual: &AppConfig, expected: &AppConfig) {
    assert_close(actual.parameters.omega1, expected.parameters.omega1, "parameters.omega1");
    assert_close(actual.parameters.omega2, expected.parameters.omega2, "parameters.omega2");
    assert_close(actual.parameters.speed, expected.parameters.speed, "parameters.speed");
    assert_close(
        actual.animation.base_interval_ms,
        expected.animation.base_interval_ms,
        "animation.base_interval_ms",
    );
    assert_eq!(actual.animation.sample_count, expected.animation.sample_count);
    assert_close(
        actual.animation.duration_sec,
        expected.animation.duration_sec,
        "animation.duration_sec",
    );
    assert_eq!(actual.animation.repeat, expected.animation.repeat);
    assert_eq!(actual.display.window_width, expected.display.window_width);
    assert_eq!(actual.display.window_height, expected.display.window_height);
    assert_eq!(actual.display.pixels_per_point, expected.display.pixels_per_point);
}

#[test]
fn config_roundtrip_default_toml() {
    let default_cfg = AppConfig::default();
    let text = toml::to_string_pretty(&default_cfg).expect("serialize default");
    let parsed: AppConfig = toml::from_str(&text).expect("parse default");
    assert_config_eq(&parsed, &default_cfg);
}

#[test]
fn config_load_custom_values() {
    let path = unique_path("custom.toml");
    let path_str = path.to_string_lossy().to_string();
    let custom = AppConfig {
        parameters: ParametersConfig {
            omega1: 1.5,
            omega2: 2.5,
            speed: 3.0,
        },
        animation: AnimationConfig {
            base_interval_ms: 33.0,
            sample_count: 400,
            duration_sec: 20.0,
            repeat: false,
        },
        display: DisplayConfig {
            window_width: 1280.0,
            window_height: 720.0,
            pixels_per_point: 1.25,
        },
    };
    let text = toml::to_string_pretty(&custom).expect("serialize custom");
    fs::write(&path, text).expect("write custom config");

    let loaded = AppConfig::load_or_default(&path_str);
    assert_config_eq(&loaded, &custom);

    let _ = fs::remove_file(&path);
}

#[test]
fn config_missing_file_fallback() {
    let path = unique_path("missing.toml");
    let path_str = path.to_string_lossy().to_string();
    let _ = fs::remove_file(&path);

    let loaded = AppConfig::load_or_default(&path_str);
    assert!(path.exists(), "missing config should be created");
    assert_eq!(loaded.animation.sample_count, 1000);
    assert_eq!(loaded.parameters.omega1, AppConfig::default().parameters.omega1);
    assert_close(loaded.animation.base_interval_ms, 20.0, "base_interval_ms");

    let _ = fs::remove_file(&path);
}

#[test]
fn first_and_second_launch_agree() {
    let path = unique_path("launches.toml");
    let path_str = path.to_string_lossy().to_string();
    let _ = fs::remove_file(&path);

    let first = AppConfig::load_or_default(&path_str);
    let second = AppConfig::load_or_default(&path_str);
    assert_eq!(first.parameters.omega1, second.parameters.omega1);
    assert_eq!(first.parameters.omega2, second.parameters.omega2);
    assert_eq!(first.parameters.speed, second.parameters.speed);

    let _ = fs::remove_file(&path);
}
