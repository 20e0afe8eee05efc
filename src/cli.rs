use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "pendulum.toml")]
    pub config: String,

    /// First normal-mode frequency in rad/s (overrides config)
    #[arg(long)]
    pub omega1: Option<f64>,

    /// Second normal-mode frequency in rad/s (overrides config)
    #[arg(long)]
    pub omega2: Option<f64>,

    /// Playback speed multiplier (overrides config)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Play one run without a window and log the result
    #[arg(long, default_value_t = false)]
    pub nogui: bool,
}

impl Args {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut cfg: AppConfig) -> AppConfig {
        if let Some(v) = self.omega1 {
            cfg.parameters.omega1 = v;
        }
        if let Some(v) = self.omega2 {
            cfg.parameters.omega2 = v;
        }
        if let Some(v) = self.speed {
            cfg.parameters.speed = v;
        }
        cfg
    }
}
