use crate::core::geometry::{rotation_deg, wrap_delta_deg};
use glam::Vec2;

/// Tracks the gun rotation for successive pointer positions.
///
/// `raw_deg` is the exact calibrated angle for the latest pointer. `display_deg`
/// is the same angle unwrapped across the ±180° seam so an interpolating
/// renderer always turns the short way.
#[derive(Clone, Debug, Default)]
pub struct AimTracker {
    raw_deg: f32,
    display_deg: f32,
    initialized: bool,
}

impl AimTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-aim at `pointer` from `pivot`; returns the new raw rotation.
    pub fn aim(&mut self, pivot: Vec2, pointer: Vec2, calibration_deg: f32) -> f32 {
        let raw = rotation_deg(pivot, pointer, calibration_deg);
        if self.initialized {
            self.display_deg += wrap_delta_deg(raw - self.raw_deg);
        } else {
            self.display_deg = raw;
            self.initialized = true;
        }
        self.raw_deg = raw;
        raw
    }

    #[inline]
    pub fn raw_deg(&self) -> f32 {
        self.raw_deg
    }

    #[inline]
    pub fn display_deg(&self) -> f32 {
        self.display_deg
    }
}
