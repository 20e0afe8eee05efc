//! Closed-form motion of the coupled pendulum and its single-frequency stand-in.
//!
//! The coupled motion is written as a beat: an envelope at half the frequency
//! difference multiplied by a carrier at the mean frequency.

/// Normal coordinate 1: `d·cos((ω2−ω1)/2·t)·cos((ω1+ω2)/2·t)`.
#[inline]
pub fn coupled_x1(t: f64, d: f64, omega1: f64, omega2: f64) -> f64 {
    let envelope = ((omega2 - omega1) * 0.5 * t).cos();
    let carrier = ((omega1 + omega2) * 0.5 * t).cos();
    d * envelope * carrier
}

/// Normal coordinate 2: `d·sin((ω2−ω1)/2·t)·sin((ω1+ω2)/2·t)`.
#[inline]
pub fn coupled_x2(t: f64, d: f64, omega1: f64, omega2: f64) -> f64 {
    let envelope = ((omega2 - omega1) * 0.5 * t).sin();
    let carrier = ((omega1 + omega2) * 0.5 * t).sin();
    d * envelope * carrier
}

/// Reference oscillator at the carrier frequency.
#[inline]
pub fn simplified(t: f64, d: f64, omega_h: f64) -> f64 {
    d * (omega_h * t).cos()
}

pub fn coupled_x1_series(ts: &[f64], d: f64, omega1: f64, omega2: f64) -> Vec<f64> {
    ts.iter()
        .map(|&t| coupled_x1(t, d, omega1, omega2))
        .collect()
}

pub fn coupled_x2_series(ts: &[f64], d: f64, omega1: f64, omega2: f64) -> Vec<f64> {
    ts.iter()
        .map(|&t| coupled_x2(t, d, omega1, omega2))
        .collect()
}

pub fn simplified_series(ts: &[f64], d: f64, omega_h: f64) -> Vec<f64> {
    ts.iter().map(|&t| simplified(t, d, omega_h)).collect()
}
