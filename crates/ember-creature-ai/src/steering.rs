//! Steering and animation helpers. Pure functions of their inputs and, where
//! randomized, of the injected RNG.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Fraction of the remaining gap closed in `delta` seconds at `rate` (1/s).
pub fn smoothing_factor(rate: f32, delta: f32) -> f32 {
    1.0 - (-rate * delta).exp()
}

/// Exponentially approach `desired` from `current`.
pub fn smooth_velocity(current: Vec3, desired: Vec3, rate: f32, delta: f32) -> Vec3 {
    current + (desired - current) * smoothing_factor(rate, delta)
}

/// Unit vector on the ground plane for a heading (0 looks down +Z).
pub fn heading_vector(heading: f32) -> Vec3 {
    Vec3::new(heading.sin(), 0.0, heading.cos())
}

/// Vertical hop offset at `elapsed_secs`. Never negative.
pub fn hop_height(elapsed_secs: f64, phase: f32, amplitude: f32, frequency: f32) -> f32 {
    let t = (elapsed_secs * f64::from(frequency)) as f32 + phase;
    amplitude * t.sin().abs()
}

pub fn random_heading(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..TAU)
}

pub fn random_hop_phase(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..TAU)
}

/// Seconds to hold a wander heading, uniform in `[min, max)`.
pub fn random_wander_duration(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
