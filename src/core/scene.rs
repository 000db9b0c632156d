use crate::core::aim::AimTracker;
use crate::core::config::SceneConfig;
use crate::core::decals::{DecalField, DecalId};
use crate::core::geometry::{pivot_point, Rect};
use crate::core::mascot::Mascot;
use crate::core::trigger::Trigger;
use glam::Vec2;
use rand::rngs::StdRng;

/// What a pointer-down did to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub decal: DecalId,
    pub hit_mascot: bool,
}

/// Root application state: pointer, gun, decals and mascot.
///
/// Every transient state is stored as an absolute deadline; `tick` sweeps
/// them all, so the host only needs one timer source (the frame loop).
pub struct Scene {
    config: SceneConfig,
    viewport: Vec2,
    pointer: Vec2,
    aim: AimTracker,
    trigger: Trigger,
    decals: DecalField,
    mascot: Mascot,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Vec2, rng: StdRng) -> Self {
        let trigger = Trigger::new(config.fire_duration_ms);
        let decals = DecalField::new(config.decal_timing, config.decal_variants, rng);
        let mascot = Mascot::new(config.mascot, viewport);
        Self {
            config,
            viewport,
            pointer: viewport * 0.5,
            aim: AimTracker::new(),
            trigger,
            decals,
            mascot,
        }
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.mascot.layout(viewport);
        self.mascot.track(self.pointer);
        let pivot = self.pivot();
        self.aim.aim(pivot, self.pointer, self.config.calibration_deg);
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        self.pointer = pointer;
        let pivot = self.pivot();
        self.aim.aim(pivot, pointer, self.config.calibration_deg);
        self.mascot.track(pointer);
    }

    pub fn pointer_down(&mut self, pointer: Vec2, now_ms: f64) -> Shot {
        self.pointer_move(pointer);
        self.trigger.pull(now_ms);
        let decal = self.decals.spawn(pointer, now_ms);
        log::debug!("[shot] decal {:?} at ({:.0},{:.0})", decal, pointer.x, pointer.y);
        let hit_mascot = self.mascot.hit(pointer);
        if hit_mascot {
            self.mascot.kill(now_ms);
            log::debug!("[mascot] killed, revert at {:?}", self.mascot.revert_at_ms());
        }
        Shot { decal, hit_mascot }
    }

    /// Sweep all deadlines up to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        self.trigger.tick(now_ms);
        let expired = self.decals.tick(now_ms);
        if !expired.is_empty() {
            log::debug!("[decal] expired {:?}, {} active", expired, self.decals.len());
        }
        if self.mascot.tick(now_ms, self.pointer) {
            log::debug!("[mascot] revived as {}", self.mascot.expression().as_str());
        }
    }

    #[inline]
    pub fn pivot(&self) -> Vec2 {
        pivot_point(&self.config.gun, self.viewport)
    }

    #[inline]
    pub fn gun_box(&self) -> Rect {
        self.config.gun.container(self.viewport)
    }

    /// Scale applied to the gun graphic for the recoil pulse.
    #[inline]
    pub fn gun_scale(&self) -> f32 {
        if self.trigger.is_firing() {
            self.config.fire_scale
        } else {
            1.0
        }
    }

    #[inline]
    pub fn is_firing(&self) -> bool {
        self.trigger.is_firing()
    }

    #[inline]
    pub fn aim(&self) -> &AimTracker {
        &self.aim
    }

    #[inline]
    pub fn decals(&self) -> &DecalField {
        &self.decals
    }

    #[inline]
    pub fn mascot(&self) -> &Mascot {
        &self.mascot
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
