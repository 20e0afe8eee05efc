//! Per-frame pendulum geometry.
//!
//! A frame is recomputed from the whole time prefix every time. Appending one
//! sample per tick would give the same output.

use super::kinematics::{coupled_x1_series, coupled_x2_series, simplified_series};
use super::params::SimulationParameters;
use super::timebase::TimeSeries;

/// Amplitude of the simplified pendulum angle.
pub const SIMPLIFIED_AMPLITUDE: f64 = 0.5;
/// Amplitude of the coupled normal coordinates.
pub const COUPLED_AMPLITUDE: f64 = 1.0;
/// Rod length of the simplified pendulum in plot units.
pub const SIMPLE_ROD_LENGTH: f64 = 2.0;

pub type Polyline = Vec<[f64; 2]>;

/// Angles evaluated over a time prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameState {
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    pub y1: Vec<f64>,
}

impl FrameState {
    pub fn evaluate(params: &SimulationParameters, ts: &[f64]) -> Self {
        Self {
            y1: simplified_series(ts, SIMPLIFIED_AMPLITUDE, params.omega_h()),
            x1: coupled_x1_series(ts, COUPLED_AMPLITUDE, params.omega1, params.omega2),
            x2: coupled_x2_series(ts, COUPLED_AMPLITUDE, params.omega1, params.omega2),
        }
    }
}

/// The six drawables pushed to the plots for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendulumFrame {
    pub index: usize,
    pub simple_rod: Polyline,
    pub upper_rod: Polyline,
    pub lower_rod: Polyline,
    pub connector: Polyline,
    pub coupled_trace: Polyline,
    pub simplified_trace: Polyline,
}

impl PendulumFrame {
    /// Frame shown before the first tick.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn drawables(&self) -> [&Polyline; 6] {
        [
            &self.simple_rod,
            &self.upper_rod,
            &self.lower_rod,
            &self.connector,
            &self.coupled_trace,
            &self.simplified_trace,
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.drawables().iter().all(|d| d.is_empty())
    }

    /// Bob of the simplified pendulum, if one is drawn.
    pub fn simple_bob(&self) -> Option<[f64; 2]> {
        self.simple_rod.last().copied()
    }

    /// Lower bob of the coupled pendulum, if one is drawn.
    pub fn coupled_bob(&self) -> Option<[f64; 2]> {
        self.lower_rod.last().copied()
    }
}

/// Builds frame `frame` from the samples `t[0..frame]`.
///
/// Frame 0 has an empty prefix and yields six empty drawables.
pub fn produce_frame(
    params: &SimulationParameters,
    series: &TimeSeries,
    frame: usize,
) -> PendulumFrame {
    let ts = series.prefix(frame);
    let state = FrameState::evaluate(params, ts);

    let mut out = PendulumFrame {
        index: frame,
        ..PendulumFrame::default()
    };

    if let Some(&y) = state.y1.last() {
        out.simple_rod = vec![
            [0.0, 0.0],
            [SIMPLE_ROD_LENGTH * y.sin(), -SIMPLE_ROD_LENGTH * y.cos()],
        ];
    }
    if let (Some(&x1), Some(&x2)) = (state.x1.last(), state.x2.last()) {
        let (sin_x2, cos_x2) = x2.sin_cos();
        let upper_bob = [sin_x2, -cos_x2];
        let lower_bob = [x1.sin(), -2.0 * cos_x2];
        out.upper_rod = vec![[0.0, 0.0], upper_bob];
        out.lower_rod = vec![upper_bob, lower_bob];
        out.connector = vec![upper_bob, lower_bob];
    }

    out.coupled_trace = ts
        .iter()
        .zip(&state.x1)
        .map(|(&t, &x)| [t, x * 0.5])
        .collect();
    out.simplified_trace = ts.iter().zip(&state.y1).map(|(&t, &y)| [t, y]).collect();
    out
}
