// Entry point: loads config, then runs the egui/eframe viewer or the headless player.
use clap::Parser;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use coupled_pendulum::app::App;
use coupled_pendulum::cli::Args;
use coupled_pendulum::config::AppConfig;
use coupled_pendulum::headless::run_headless;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_logging();
    let args = Args::parse();

    let cfg = args.apply(AppConfig::load_or_default(&args.config)).validated();
    info!("Using config {}", args.config);

    if args.nogui {
        run_headless(&cfg);
        return Ok(());
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();

    if let Err(err) = ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    }) {
        error!("Error setting Ctrl-C handler: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Coupled Pendulum")
            .with_inner_size([cfg.display.window_width, cfg.display.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Coupled Pendulum",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &cfg, stop_flag.clone())))),
    )
}
