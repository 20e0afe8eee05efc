use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, Points};

use crate::core::frame::{PendulumFrame, Polyline};

const SIMPLE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const COUPLED_COLOR: Color32 = Color32::from_rgb(255, 127, 14);
const TRACE_COUPLED_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const TRACE_SIMPLE_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

const ROD_WIDTH: f32 = 4.0;
const BOB_RADIUS: f32 = 6.0;
const TRACE_WIDTH: f32 = 2.0;

fn points(poly: &Polyline) -> PlotPoints<'static> {
    PlotPoints::from(poly.clone())
}

/// Rod with a bob marker at each end.
fn rod(plot_ui: &mut egui_plot::PlotUi<'_>, name: &str, poly: &Polyline, color: Color32) {
    if poly.is_empty() {
        return;
    }
    plot_ui.line(Line::new(name, points(poly)).color(color).width(ROD_WIDTH));
    plot_ui.points(
        Points::new(name, points(poly))
            .color(color)
            .radius(BOB_RADIUS)
            .filled(true),
    );
}

/// Left panel: both pendulums on one fixed, equal-aspect canvas.
pub fn pendulum_plot(ui: &mut egui::Ui, frame: &PendulumFrame) {
    Plot::new("pendulum_view")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([-2.0, -4.0], [2.0, 1.0]));
            rod(plot_ui, "simplified", &frame.simple_rod, SIMPLE_COLOR);
            rod(plot_ui, "upper", &frame.upper_rod, COUPLED_COLOR);
            rod(plot_ui, "lower", &frame.lower_rod, COUPLED_COLOR);
            if !frame.connector.is_empty() {
                plot_ui.line(
                    Line::new("connector", points(&frame.connector))
                        .color(COUPLED_COLOR)
                        .width(TRACE_WIDTH),
                );
            }
        });
}

/// Right panel: trailing curves over `[0, duration]`.
pub fn trace_plot(ui: &mut egui::Ui, frame: &PendulumFrame, duration_sec: f64) {
    Plot::new("trace_view")
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, -1.0], [duration_sec, 1.0]));
            plot_ui.line(
                Line::new("Coupled Pendulum", points(&frame.coupled_trace))
                    .color(TRACE_COUPLED_COLOR)
                    .width(TRACE_WIDTH),
            );
            plot_ui.line(
                Line::new("Simplified Pendulum", points(&frame.simplified_trace))
                    .color(TRACE_SIMPLE_COLOR)
                    .width(TRACE_WIDTH),
            );
        });
}
