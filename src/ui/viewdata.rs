use crate::animation::PlaybackState;
use crate::core::frame::PendulumFrame;
use crate::core::params::SimulationParameters;

/// Frequency readouts shown under the plots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Readout {
    pub omega_h: f64,
    pub omega_l: f64,
}

impl Readout {
    pub fn from_params(p: &SimulationParameters) -> Self {
        Self {
            omega_h: p.omega_h(),
            omega_l: p.omega_l(),
        }
    }

    pub fn omega_h_label(&self) -> String {
        format!("ωₕ = {:.2}", self.omega_h)
    }

    pub fn omega_l_label(&self) -> String {
        format!("ωₗ = {:.2}", self.omega_l)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiFrame {
    pub pendulum: PendulumFrame,
    pub readout: Readout,
    pub playback_state: PlaybackState,
}

impl UiFrame {
    pub fn status_label(&self) -> &'static str {
        match self.playback_state {
            PlaybackState::Idle => "Idle",
            PlaybackState::Running => "Running",
            PlaybackState::Finished => "Finished",
        }
    }
}

/// Widget actions collected during one repaint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlEvents {
    pub omega1: Option<f64>,
    pub omega2: Option<f64>,
    pub speed: Option<f64>,
    pub restart: bool,
}

impl ControlEvents {
    pub fn is_empty(&self) -> bool {
        self.omega1.is_none() && self.omega2.is_none() && self.speed.is_none() && !self.restart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn readout_labels() {
        let r = Readout::from_params(&SimulationParameters {
            omega1: 2.0 * PI,
            omega2: 3.0 * PI,
            speed: 1.0,
        });
        assert_eq!(r.omega_h_label(), "ωₕ = 7.85");
        assert_eq!(r.omega_l_label(), "ωₗ = 1.57");
    }

    #[test]
    fn status_label_follows_playback_state() {
        let mut frame = UiFrame::default();
        assert_eq!(frame.status_label(), "Idle");
        frame.playback_state = PlaybackState::Running;
        assert_eq!(frame.status_label(), "Running");
        frame.playback_state = PlaybackState::Finished;
        assert_eq!(frame.status_label(), "Finished");
    }

    #[test]
    fn default_events_are_empty() {
        assert!(ControlEvents::default().is_empty());
        let ev = ControlEvents {
            restart: true,
            ..ControlEvents::default()
        };
        assert!(!ev.is_empty());
    }
}
