use std::time::{Duration, Instant};

use tracing::{info, trace, warn};

use super::timer::{FrameTimer, TimerSource};
use crate::core::frame::{PendulumFrame, produce_frame};
use crate::core::params::{ParamBounds, ParamKind, SimulationParameters};
use crate::core::timebase::{DEFAULT_DURATION_SEC, DEFAULT_SAMPLE_COUNT, TimeSeries};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSettings {
    /// Frame interval at speed 1.
    pub base_interval: Duration,
    pub sample_count: usize,
    pub duration_sec: f64,
    /// Wrap back to frame 0 after the last frame.
    pub repeat: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(20),
            sample_count: DEFAULT_SAMPLE_COUNT,
            duration_sec: DEFAULT_DURATION_SEC,
            repeat: true,
        }
    }
}

impl AnimationSettings {
    /// Frames per run: frame 0 draws nothing and frame `sample_count` draws every sample.
    pub fn frame_count(&self) -> usize {
        self.sample_count + 1
    }

    /// Higher speed gives a shorter interval. Rounded to whole microseconds.
    pub fn interval_for(&self, speed: f64) -> Duration {
        let micros = self.base_interval.as_micros() as f64 / speed;
        Duration::from_micros(micros.round().max(1.0) as u64)
    }
}

/// One animation run: a frozen parameter set, its time series and its timer.
///
/// Dropping the run stops the timer.
pub struct AnimationRun<T: FrameTimer> {
    params: SimulationParameters,
    series: TimeSeries,
    frame: usize,
    finished: bool,
    timer: T,
}

impl<T: FrameTimer> AnimationRun<T> {
    fn start(params: SimulationParameters, settings: &AnimationSettings, mut timer: T) -> Self {
        let series = TimeSeries::over(settings.duration_sec, settings.sample_count);
        timer.start(settings.interval_for(params.speed));
        Self {
            params,
            series,
            frame: 0,
            finished: false,
            timer,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn is_running(&self) -> bool {
        !self.finished && self.timer.is_running()
    }

    fn step(&mut self, repeat: bool) -> PendulumFrame {
        let out = produce_frame(&self.params, &self.series, self.frame);
        trace!(frame = self.frame, "frame");
        self.frame += 1;
        if self.frame > self.series.len() {
            if repeat {
                self.frame = 0;
            } else {
                self.finished = true;
                self.timer.stop();
            }
        }
        out
    }
}

impl<T: FrameTimer> Drop for AnimationRun<T> {
    fn drop(&mut self) {
        self.timer.stop();
    }
}

/// Owns the current parameters and the single current run.
pub struct AnimationDriver<S: TimerSource> {
    params: SimulationParameters,
    bounds: ParamBounds,
    settings: AnimationSettings,
    timers: S,
    run: Option<AnimationRun<S::Timer>>,
}

impl<S: TimerSource> AnimationDriver<S> {
    /// Creates an idle driver. Call [`restart`](Self::restart) to begin playback.
    pub fn new(params: SimulationParameters, settings: AnimationSettings, timers: S) -> Self {
        let bounds = ParamBounds::default();
        Self {
            params: params.clamped(&bounds),
            bounds,
            settings,
            timers,
            run: None,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn bounds(&self) -> &ParamBounds {
        &self.bounds
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn run(&self) -> Option<&AnimationRun<S::Timer>> {
        self.run.as_ref()
    }

    pub fn run_mut(&mut self) -> Option<&mut AnimationRun<S::Timer>> {
        self.run.as_mut()
    }

    pub fn frame_index(&self) -> usize {
        self.run.as_ref().map_or(0, |r| r.frame)
    }

    pub fn state(&self) -> PlaybackState {
        match &self.run {
            None => PlaybackState::Idle,
            Some(run) if run.finished => PlaybackState::Finished,
            Some(run) if run.timer.is_running() => PlaybackState::Running,
            Some(_) => PlaybackState::Idle,
        }
    }

    pub fn set_omega1(&mut self, omega1: f64) {
        if let Some(v) = self.accept(ParamKind::Omega1, omega1) {
            self.params.omega1 = self.bounds.clamp_omega(v);
            self.rebuild();
        }
    }

    pub fn set_omega2(&mut self, omega2: f64) {
        if let Some(v) = self.accept(ParamKind::Omega2, omega2) {
            self.params.omega2 = self.bounds.clamp_omega(v);
            self.rebuild();
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        if let Some(v) = self.accept(ParamKind::Speed, speed) {
            self.params.speed = self.bounds.clamp_speed(v);
            self.rebuild();
        }
    }

    /// Replaces the whole parameter record and rebuilds once.
    pub fn set_params(&mut self, params: SimulationParameters) {
        self.params = params.clamped(&self.bounds);
        self.rebuild();
    }

    pub fn restart(&mut self) {
        self.rebuild();
    }

    fn accept(&self, kind: ParamKind, value: f64) -> Option<f64> {
        if value.is_finite() {
            Some(value)
        } else {
            warn!("ignoring non-finite {kind}: {value}");
            None
        }
    }

    fn rebuild(&mut self) {
        // the old timer must be stopped before the new one starts
        if let Some(mut old) = self.run.take() {
            old.timer.stop();
        }
        let interval = self.settings.interval_for(self.params.speed);
        info!(
            omega1 = self.params.omega1,
            omega2 = self.params.omega2,
            speed = self.params.speed,
            omega_h = self.params.omega_h(),
            omega_l = self.params.omega_l(),
            interval_ms = interval.as_secs_f64() * 1e3,
            "animation rebuilt"
        );
        let timer = self.timers.create();
        self.run = Some(AnimationRun::start(self.params, &self.settings, timer));
    }

    /// Produces the current frame and advances. `None` unless a run is playing.
    pub fn tick(&mut self) -> Option<PendulumFrame> {
        let repeat = self.settings.repeat;
        let run = self.run.as_mut()?;
        if !run.is_running() {
            return None;
        }
        Some(run.step(repeat))
    }

    /// Runs every tick the timer reports as due by `now`; returns the latest frame.
    pub fn advance(&mut self, now: Instant) -> Option<PendulumFrame> {
        let due = self.run.as_mut()?.timer.due_ticks(now);
        let mut latest = None;
        for _ in 0..due {
            match self.tick() {
                Some(frame) => latest = Some(frame),
                None => break,
            }
        }
        latest
    }

    /// Frame shown before the first tick of a run.
    pub fn init_frame(&self) -> PendulumFrame {
        PendulumFrame::empty()
    }
}
