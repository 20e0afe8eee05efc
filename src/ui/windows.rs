use egui::{CentralPanel, RichText, Slider, TopBottomPanel};

use crate::core::params::{ParamBounds, SimulationParameters};
use crate::ui::plots::{pendulum_plot, trace_plot};
use crate::ui::viewdata::{ControlEvents, UiFrame};

/// Sliders and the Restart button. `values` holds what the sliders show.
pub fn controls(
    ui: &mut egui::Ui,
    values: &mut SimulationParameters,
    bounds: &ParamBounds,
) -> ControlEvents {
    let mut events = ControlEvents::default();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            let width = ui.available_width() * 0.8;
            ui.spacing_mut().slider_width = width.max(200.0);
            let slider = Slider::new(&mut values.omega1, bounds.omega.clone())
                .text("ω₁")
                .step_by(bounds.step);
            if ui.add(slider).changed() {
                events.omega1 = Some(values.omega1);
            }
            let slider = Slider::new(&mut values.omega2, bounds.omega.clone())
                .text("ω₂")
                .step_by(bounds.step);
            if ui.add(slider).changed() {
                events.omega2 = Some(values.omega2);
            }
            let slider = Slider::new(&mut values.speed, bounds.speed.clone())
                .text("Speed")
                .step_by(bounds.step);
            if ui.add(slider).changed() {
                events.speed = Some(values.speed);
            }
        });
        if ui.button(RichText::new("Restart").size(16.0)).clicked() {
            events.restart = true;
        }
    });

    events
}

/// === Main window ===
pub fn main_window(
    ctx: &egui::Context,
    frame: &UiFrame,
    values: &mut SimulationParameters,
    bounds: &ParamBounds,
    duration_sec: f64,
) -> ControlEvents {
    let mut events = ControlEvents::default();

    TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        events = controls(ui, values, bounds);
        ui.add_space(4.0);
        ui.columns(3, |cols| {
            cols[0].vertical_centered(|ui| {
                ui.label(RichText::new(frame.readout.omega_h_label()).size(14.0));
            });
            cols[1].vertical_centered(|ui| {
                ui.label(RichText::new(frame.readout.omega_l_label()).size(14.0));
            });
            cols[2].vertical_centered(|ui| {
                ui.label(RichText::new(frame.status_label()).size(14.0).weak());
            });
        });
        ui.add_space(6.0);
    });

    CentralPanel::default().show(ctx, |ui| {
        ui.columns(2, |cols| {
            pendulum_plot(&mut cols[0], &frame.pendulum);
            trace_plot(&mut cols[1], &frame.pendulum, duration_sec);
        });
    });

    events
}
