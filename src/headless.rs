use std::time::Instant;

use tracing::info;

use crate::animation::{AnimationDriver, ManualTimers};
use crate::config::AppConfig;
use crate::core::frame::PendulumFrame;

/// Plays one full run without a window and returns the last frame produced.
pub fn run_headless(cfg: &AppConfig) -> PendulumFrame {
    let mut driver = AnimationDriver::new(
        cfg.parameters.to_params(),
        cfg.animation.to_settings(),
        ManualTimers,
    );
    driver.restart();

    let p = *driver.params();
    info!(
        "omega1 = {:.3}, omega2 = {:.3}, omega_h = {:.3}, omega_l = {:.3}, speed = {:.1}",
        p.omega1,
        p.omega2,
        p.omega_h(),
        p.omega_l(),
        p.speed
    );

    let frames = driver.settings().frame_count();
    let mut last = driver.init_frame();
    if let Some(run) = driver.run_mut() {
        run.timer_mut().fire(u32::try_from(frames).unwrap_or(u32::MAX));
    }
    if let Some(frame) = driver.advance(Instant::now()) {
        last = frame;
    }

    info!(
        frame = last.index,
        simple_bob = ?last.simple_bob(),
        coupled_bob = ?last.coupled_bob(),
        "final frame"
    );
    last
}
