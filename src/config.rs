use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::animation::AnimationSettings;
use crate::core::params::{ParamBounds, ParamError, SimulationParameters};
use crate::core::timebase::{DEFAULT_DURATION_SEC, DEFAULT_SAMPLE_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersConfig {
    #[serde(default = "ParametersConfig::default_omega1")]
    pub omega1: f64,
    #[serde(default = "ParametersConfig::default_omega2")]
    pub omega2: f64,
    #[serde(default = "ParametersConfig::default_speed")]
    pub speed: f64,
}

impl ParametersConfig {
    fn default_omega1() -> f64 {
        2.0 * PI
    }
    fn default_omega2() -> f64 {
        3.0 * PI
    }
    fn default_speed() -> f64 {
        1.0
    }

    pub fn to_params(&self) -> SimulationParameters {
        SimulationParameters {
            omega1: self.omega1,
            omega2: self.omega2,
            speed: self.speed,
        }
    }

    /// Strict form of [`to_params`](Self::to_params): rejects values outside `bounds`.
    pub fn checked(&self, bounds: &ParamBounds) -> Result<SimulationParameters, ParamError> {
        SimulationParameters::try_new(self.omega1, self.omega2, self.speed, bounds)
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            omega1: Self::default_omega1(),
            omega2: Self::default_omega2(),
            speed: Self::default_speed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_base_interval_ms")]
    pub base_interval_ms: f64,
    #[serde(default = "AnimationConfig::default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "AnimationConfig::default_duration_sec")]
    pub duration_sec: f64,
    #[serde(default = "AnimationConfig::default_repeat")]
    pub repeat: bool,
}

impl AnimationConfig {
    fn default_base_interval_ms() -> f64 {
        20.0
    }
    fn default_sample_count() -> usize {
        DEFAULT_SAMPLE_COUNT
    }
    fn default_duration_sec() -> f64 {
        DEFAULT_DURATION_SEC
    }
    fn default_repeat() -> bool {
        true
    }

    pub fn to_settings(&self) -> AnimationSettings {
        AnimationSettings {
            base_interval: Duration::from_micros(
                (self.base_interval_ms * 1000.0).round().max(1.0) as u64,
            ),
            sample_count: self.sample_count,
            duration_sec: self.duration_sec,
            repeat: self.repeat,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: Self::default_base_interval_ms(),
            sample_count: Self::default_sample_count(),
            duration_sec: Self::default_duration_sec(),
            repeat: Self::default_repeat(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_window_width")]
    pub window_width: f32,
    #[serde(default = "DisplayConfig::default_window_height")]
    pub window_height: f32,
    #[serde(default = "DisplayConfig::default_pixels_per_point")]
    pub pixels_per_point: f32,
}

impl DisplayConfig {
    fn default_window_width() -> f32 {
        1600.0
    }
    fn default_window_height() -> f32 {
        900.0
    }
    fn default_pixels_per_point() -> f32 {
        1.0
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: Self::default_window_width(),
            window_height: Self::default_window_height(),
            pixels_per_point: Self::default_pixels_per_point(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn round_f64(x: f64) -> f64 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_f64_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.parameters.omega1 = Self::round_f64(self.parameters.omega1);
        self.parameters.omega2 = Self::round_f64(self.parameters.omega2);
        self.parameters.speed = Self::round_f64(self.parameters.speed);
        self.animation.base_interval_ms = Self::round_f64(self.animation.base_interval_ms);
        self.animation.duration_sec = Self::round_f64(self.animation.duration_sec);
        self
    }

    /// Clamps parameters into the slider bounds and replaces unusable timing values.
    pub fn validated(mut self) -> Self {
        let bounds = ParamBounds::default();
        let clamped = match self.parameters.checked(&bounds) {
            Ok(p) => p,
            Err(err) => {
                let clamped = self.parameters.to_params().clamped(&bounds);
                warn!("config parameters: {err}; using {clamped:?}");
                clamped
            }
        };
        self.parameters = ParametersConfig {
            omega1: clamped.omega1,
            omega2: clamped.omega2,
            speed: clamped.speed,
        };

        let defaults = AnimationConfig::default();
        let anim = &mut self.animation;
        if !(anim.base_interval_ms.is_finite() && anim.base_interval_ms > 0.0) {
            warn!(
                "animation.base_interval_ms = {} is not usable; using {}",
                anim.base_interval_ms, defaults.base_interval_ms
            );
            anim.base_interval_ms = defaults.base_interval_ms;
        }
        if anim.sample_count == 0 {
            warn!(
                "animation.sample_count = 0; using {}",
                defaults.sample_count
            );
            anim.sample_count = defaults.sample_count;
        }
        if !(anim.duration_sec.is_finite() && anim.duration_sec > 0.0) {
            warn!(
                "animation.duration_sec = {} is not usable; using {}",
                anim.duration_sec, defaults.duration_sec
            );
            anim.duration_sec = defaults.duration_sec;
        }
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write rounded defaults, return the exact ones.
        match toml::to_string_pretty(&Self::default().rounded()) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, Self::commented(&text)) {
                    warn!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("Failed to serialize default config: {err}; continuing with defaults")
            }
        }
        Self::default()
    }

    /// Comments out every key so the written file documents the defaults without pinning them.
    fn commented(text: &str) -> String {
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                let mut out_line = line.to_string();
                if let Some((lhs, rhs)) = line.split_once('=') {
                    let rhs_trim = rhs.trim();
                    let has_decimal = rhs_trim.contains('.');
                    if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                        && !rhs_trim.contains('"')
                        && rhs_trim != "true"
                        && rhs_trim != "false"
                    {
                        if let Ok(val) = rhs_trim.parse::<f64>() {
                            let mut formatted = Self::format_f64_compact(val);
                            if has_decimal && !formatted.contains('.') {
                                formatted.push_str(".0");
                            }
                            out_line = format!("{} = {}", lhs.trim(), formatted);
                        }
                    }
                }
                commented.push_str("# ");
                commented.push_str(&out_line);
                commented.push('\n');
            }
        }
        commented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ParamKind;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "coupled_pendulum_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.parameters.omega1, 2.0 * PI);
        assert_eq!(cfg.parameters.omega2, 3.0 * PI);
        assert_eq!(cfg.parameters.speed, 1.0);
        assert_eq!(cfg.animation.base_interval_ms, 20.0);
        assert_eq!(cfg.animation.sample_count, 1000);
        assert!(cfg.animation.repeat);

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(contents.contains("[parameters]"));
        assert!(
            contents.contains("# omega1 = 6.283185"),
            "should write commented omega1"
        );
        assert!(
            contents.contains("# speed = 1.0"),
            "should write commented speed"
        );
        assert!(
            contents.contains("# sample_count = 1000"),
            "should write commented sample_count"
        );
        assert!(
            contents.contains("# repeat = true"),
            "should write commented repeat"
        );

        // Commented file parses back to the serde defaults.
        let reread = AppConfig::load_or_default(&path_str);
        assert_eq!(reread.parameters.omega1, 2.0 * PI);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = unique_path("partial.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[parameters]\nomega2 = 4.5\n\n[animation]\nrepeat = false\n").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.parameters.omega1, 2.0 * PI);
        assert_eq!(cfg.parameters.omega2, 4.5);
        assert!(!cfg.animation.repeat);
        assert_eq!(cfg.display.window_width, 1600.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unparsable_file_falls_back() {
        let path = unique_path("broken.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[parameters\nomega1 = ").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.parameters.speed, 1.0);
        assert_eq!(cfg.animation.sample_count, 1000);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn validated_repairs_values() {
        let mut cfg = AppConfig::default();
        cfg.parameters.omega1 = 0.0;
        cfg.parameters.speed = 9.0;
        cfg.animation.base_interval_ms = -5.0;
        cfg.animation.sample_count = 0;
        cfg.animation.duration_sec = f64::NAN;

        let cfg = cfg.validated();
        assert_eq!(cfg.parameters.omega1, 0.1);
        assert_eq!(cfg.parameters.omega2, 3.0 * PI);
        assert_eq!(cfg.parameters.speed, 5.0);
        assert_eq!(cfg.animation.base_interval_ms, 20.0);
        assert_eq!(cfg.animation.sample_count, 1000);
        assert_eq!(cfg.animation.duration_sec, 10.0);
    }

    #[test]
    fn checked_reports_the_offending_parameter() {
        let bounds = ParamBounds::default();
        assert!(ParametersConfig::default().checked(&bounds).is_ok());

        let cfg = ParametersConfig {
            speed: 9.0,
            ..ParametersConfig::default()
        };
        assert_eq!(
            cfg.checked(&bounds),
            Err(ParamError::OutOfRange {
                kind: ParamKind::Speed,
                value: 9.0,
                min: 0.1,
                max: 5.0,
            })
        );

        let cfg = ParametersConfig {
            omega1: f64::INFINITY,
            ..ParametersConfig::default()
        };
        assert!(matches!(
            cfg.checked(&bounds),
            Err(ParamError::NotFinite {
                kind: ParamKind::Omega1,
                ..
            })
        ));
        let repaired = AppConfig {
            parameters: cfg,
            ..AppConfig::default()
        }
        .validated();
        assert_eq!(repaired.parameters.omega1, 2.0 * PI);
    }

    #[test]
    fn settings_follow_config() {
        let anim = AnimationConfig {
            base_interval_ms: 40.0,
            sample_count: 250,
            duration_sec: 5.0,
            repeat: false,
        };
        let settings = anim.to_settings();
        assert_eq!(settings.base_interval, Duration::from_millis(40));
        assert_eq!(settings.sample_count, 250);
        assert!(!settings.repeat);
    }
}
