use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::animation::{AnimationDriver, IntervalTimers};
use crate::config::AppConfig;
use crate::core::params::SimulationParameters;
use crate::ui::viewdata::{ControlEvents, Readout, UiFrame};

const MIN_REPAINT: Duration = Duration::from_millis(4);

pub struct App {
    driver: AnimationDriver<IntervalTimers>,
    slider_values: SimulationParameters,
    last_frame: UiFrame,
    duration_sec: f64,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cfg: &AppConfig,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(cfg.display.pixels_per_point);

        let mut driver = AnimationDriver::new(
            cfg.parameters.to_params(),
            cfg.animation.to_settings(),
            IntervalTimers,
        );
        driver.restart();

        let mut app = Self {
            slider_values: *driver.params(),
            last_frame: UiFrame::default(),
            duration_sec: driver.settings().duration_sec,
            driver,
            exiting: stop_flag,
        };
        app.sync_view();
        app
    }

    /// Pushes driver state into the widgets after a rebuild.
    fn sync_view(&mut self) {
        self.slider_values = *self.driver.params();
        self.last_frame.pendulum = self.driver.init_frame();
        self.last_frame.readout = Readout::from_params(self.driver.params());
        self.last_frame.playback_state = self.driver.state();
    }

    fn apply(&mut self, events: ControlEvents) {
        if events.is_empty() {
            return;
        }
        if let Some(v) = events.omega1 {
            self.driver.set_omega1(v);
        }
        if let Some(v) = events.omega2 {
            self.driver.set_omega2(v);
        }
        if let Some(v) = events.speed {
            self.driver.set_speed(v);
        }
        if events.restart {
            debug!("restart requested");
            self.driver.restart();
        }
        self.sync_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            info!("SIGINT received: closing window.");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if let Some(frame) = self.driver.advance(Instant::now()) {
            self.last_frame.pendulum = frame;
        }
        self.last_frame.playback_state = self.driver.state();

        let events = crate::ui::windows::main_window(
            ctx,
            &self.last_frame,
            &mut self.slider_values,
            self.driver.bounds(),
            self.duration_sec,
        );
        self.apply(events);

        let interval = self.driver.settings().interval_for(self.driver.params().speed);
        ctx.request_repaint_after(interval.max(MIN_REPAINT));
    }
}
