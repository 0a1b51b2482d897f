//! Fundamental geometric and timing types.
//!
//! Points and vectors are `glam::Vec3` with y up; the ground plane is x/z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Simulation clock, advanced once per frame by a variable delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated frames.
    pub frame: u64,
    /// Elapsed simulation time in seconds (monotonic).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.frame += 1;
        self.elapsed_secs += f64::from(delta);
    }
}

/// Axis-aligned rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Rect {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Clamp the horizontal components of `p`; y is left untouched.
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y,
            p.z.clamp(self.min_z, self.max_z),
        )
    }

    /// Whether the horizontal components of `p` lie inside (edges inclusive).
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_z..=self.max_z).contains(&p.z)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// True when the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.depth() > 0.0
    }
}

/// Drop the vertical component.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
