use crate::constants::*;
use crate::core::decals::DecalTiming;
use crate::core::geometry::GunLayout;
use crate::core::mascot::MascotParams;
use glam::Vec2;
use thiserror::Error;

/// Every tunable of the scene, seeded from `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub gun: GunLayout,
    pub calibration_deg: f32,
    pub fire_duration_ms: f64,
    pub fire_scale: f32,
    pub decal_timing: DecalTiming,
    pub decal_variants: usize,
    pub mascot: MascotParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gun: GunLayout {
                width_px: GUN_BOX_WIDTH_PX,
                height_px: GUN_BOX_HEIGHT_PX,
                right_px: GUN_RIGHT_OFFSET_PX,
                bottom_px: GUN_BOTTOM_OFFSET_PX,
                pivot_fraction: Vec2::new(GUN_PIVOT_FRACTION_X, GUN_PIVOT_FRACTION_Y),
            },
            calibration_deg: GUN_CALIBRATION_DEG,
            fire_duration_ms: FIRE_DURATION_MS,
            fire_scale: FIRE_SCALE,
            decal_timing: DecalTiming {
                dwell_ms: DECAL_DWELL_MS,
                fade_ms: DECAL_FADE_MS,
            },
            decal_variants: DECAL_VARIANTS.len(),
            mascot: MascotParams {
                left_px: MASCOT_LEFT_PX,
                bottom_px: MASCOT_BOTTOM_PX,
                size_px: MASCOT_SIZE_PX,
                eye_fractions: MASCOT_EYE_FRACTIONS.map(Vec2::from),
                proximity_px: PROXIMITY_THRESHOLD_PX,
                pupil_max_px: PUPIL_MAX_OFFSET_PX,
                revert_ms: MASCOT_REVERT_MS,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: {value:?} is not a number")]
    NotANumber { key: &'static str, value: String },
    #[error("{key}: {value} is out of range")]
    OutOfRange { key: &'static str, value: f64 },
}

/// Attribute names accepted as overrides on the root element.
pub const OVERRIDE_KEYS: [&str; 6] = [
    "data-calibration-deg",
    "data-decal-dwell-ms",
    "data-decal-fade-ms",
    "data-fire-ms",
    "data-mascot-revert-ms",
    "data-proximity-px",
];

impl SceneConfig {
    /// Apply overrides looked up by attribute name.
    ///
    /// Valid values are applied; each rejected value leaves its default in
    /// place and is reported in the returned error list.
    pub fn with_overrides<F>(mut self, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();
        for key in OVERRIDE_KEYS {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match parse_override(key, &raw) {
                Ok(v) => self.apply(key, v),
                Err(e) => errors.push(e),
            }
        }
        (self, errors)
    }

    fn apply(&mut self, key: &str, v: f64) {
        match key {
            "data-calibration-deg" => self.calibration_deg = v as f32,
            "data-decal-dwell-ms" => self.decal_timing.dwell_ms = v,
            "data-decal-fade-ms" => self.decal_timing.fade_ms = v,
            "data-fire-ms" => self.fire_duration_ms = v,
            "data-mascot-revert-ms" => self.mascot.revert_ms = v,
            "data-proximity-px" => self.mascot.proximity_px = v as f32,
            _ => {}
        }
    }
}

fn parse_override(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber {
            key,
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ConfigError::OutOfRange { key, value });
    }
    // Only the calibration angle may be negative.
    if key != "data-calibration-deg" && value < 0.0 {
        return Err(ConfigError::OutOfRange { key, value });
    }
    Ok(value)
}
