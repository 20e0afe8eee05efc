use std::f64::consts::PI;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Slider limits. The lower bounds keep every frequency strictly positive.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamBounds {
    pub omega: RangeInclusive<f64>,
    pub speed: RangeInclusive<f64>,
    pub step: f64,
}

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            omega: 0.1..=10.0,
            speed: 0.1..=5.0,
            step: 0.1,
        }
    }
}

impl ParamBounds {
    pub fn clamp_omega(&self, omega: f64) -> f64 {
        omega.clamp(*self.omega.start(), *self.omega.end())
    }

    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.clamp(*self.speed.start(), *self.speed.end())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Omega1,
    Omega2,
    Speed,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Omega1 => f.write_str("omega1"),
            Self::Omega2 => f.write_str("omega2"),
            Self::Speed => f.write_str("speed"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{kind} must be finite, got {value}")]
    NotFinite { kind: ParamKind, value: f64 },
    #[error("{kind} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        kind: ParamKind,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub omega1: f64,
    pub omega2: f64,
    pub speed: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            omega1: 2.0 * PI,
            omega2: 3.0 * PI,
            speed: 1.0,
        }
    }
}

impl SimulationParameters {
    /// Builds a parameter record, rejecting values outside `bounds`.
    pub fn try_new(
        omega1: f64,
        omega2: f64,
        speed: f64,
        bounds: &ParamBounds,
    ) -> Result<Self, ParamError> {
        Ok(Self {
            omega1: check(ParamKind::Omega1, omega1, &bounds.omega)?,
            omega2: check(ParamKind::Omega2, omega2, &bounds.omega)?,
            speed: check(ParamKind::Speed, speed, &bounds.speed)?,
        })
    }

    /// Clamps every field into `bounds`. Non-finite fields fall back to the defaults.
    pub fn clamped(self, bounds: &ParamBounds) -> Self {
        let fallback = Self::default();
        let pick = |v: f64, d: f64| if v.is_finite() { v } else { d };
        Self {
            omega1: bounds.clamp_omega(pick(self.omega1, fallback.omega1)),
            omega2: bounds.clamp_omega(pick(self.omega2, fallback.omega2)),
            speed: bounds.clamp_speed(pick(self.speed, fallback.speed)),
        }
    }

    /// Mean (carrier) frequency.
    pub fn omega_h(&self) -> f64 {
        (self.omega1 + self.omega2) * 0.5
    }

    /// Beat (envelope) frequency.
    pub fn omega_l(&self) -> f64 {
        (self.omega2 - self.omega1) * 0.5
    }
}

fn check(kind: ParamKind, value: f64, range: &RangeInclusive<f64>) -> Result<f64, ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { kind, value });
    }
    if !range.contains(&value) {
        return Err(ParamError::OutOfRange {
            kind,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value)
}
