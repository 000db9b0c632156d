use crate::core::geometry::Rect;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Expression {
    #[default]
    Idle,
    Frightened,
    Dead,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Idle => "idle",
            Expression::Frightened => "frightened",
            Expression::Dead => "dead",
        }
    }
}

/// Fixed placement and tuning of the mascot.
///
/// - `left_px`, `bottom_px`: offsets from the bottom-left viewport corner
/// - `size_px`: edge of the square anchor box
/// - `eye_fractions`: eye anchors inside the box, as fractions from its top-left
/// - `proximity_px`: pointer distance to the box centre below which it gets scared
/// - `pupil_max_px`: how far a pupil may drift toward the pointer
/// - `revert_ms`: time spent dead after a click
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MascotParams {
    pub left_px: f32,
    pub bottom_px: f32,
    pub size_px: f32,
    pub eye_fractions: [Vec2; 2],
    pub proximity_px: f32,
    pub pupil_max_px: f32,
    pub revert_ms: f64,
}

/// Small creature that watches the cursor.
///
/// Idle and Frightened follow pointer proximity on every update. Dead is
/// entered only by a click and left only when the revert deadline passes;
/// a second click while dead replaces the deadline.
#[derive(Clone, Debug)]
pub struct Mascot {
    params: MascotParams,
    anchor: Rect,
    expression: Expression,
    revert_at_ms: Option<f64>,
    pupils: [Vec2; 2],
}

impl Mascot {
    pub fn new(params: MascotParams, viewport: Vec2) -> Self {
        Self {
            params,
            anchor: anchor_rect(&params, viewport),
            expression: Expression::Idle,
            revert_at_ms: None,
            pupils: [Vec2::ZERO; 2],
        }
    }

    /// Recompute the anchor box after a viewport resize.
    pub fn layout(&mut self, viewport: Vec2) {
        self.anchor = anchor_rect(&self.params, viewport);
    }

    /// React to a new pointer position: pupils always follow, the expression
    /// only while alive.
    pub fn track(&mut self, pointer: Vec2) {
        let eyes = self.eye_anchors();
        for (pupil, eye) in self.pupils.iter_mut().zip(eyes) {
            *pupil = (pointer - eye).clamp_length_max(self.params.pupil_max_px);
        }
        if self.expression != Expression::Dead {
            self.expression = self.proximity_expression(pointer);
        }
    }

    /// Whether `pointer` lands on the round face drawn inside the anchor box.
    #[inline]
    pub fn hit(&self, pointer: Vec2) -> bool {
        pointer.distance(self.anchor.center()) <= self.params.size_px * 0.5
    }

    /// Enter Dead and (re)start the revert countdown from `now_ms`.
    pub fn kill(&mut self, now_ms: f64) {
        self.expression = Expression::Dead;
        self.revert_at_ms = Some(now_ms + self.params.revert_ms);
    }

    /// Revert from Dead once the deadline has passed; returns true on revert.
    pub fn tick(&mut self, now_ms: f64, pointer: Vec2) -> bool {
        match self.revert_at_ms {
            Some(t) if now_ms >= t => {
                self.revert_at_ms = None;
                self.expression = self.proximity_expression(pointer);
                true
            }
            _ => false,
        }
    }

    fn proximity_expression(&self, pointer: Vec2) -> Expression {
        if pointer.distance(self.anchor.center()) < self.params.proximity_px {
            Expression::Frightened
        } else {
            Expression::Idle
        }
    }

    /// Eye anchor points in viewport space.
    pub fn eye_anchors(&self) -> [Vec2; 2] {
        self.params
            .eye_fractions
            .map(|f| self.anchor.min + f * self.anchor.size)
    }

    #[inline]
    pub fn expression(&self) -> Expression {
        self.expression
    }

    #[inline]
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    #[inline]
    pub fn pupils(&self) -> [Vec2; 2] {
        self.pupils
    }

    #[inline]
    pub fn revert_at_ms(&self) -> Option<f64> {
        self.revert_at_ms
    }
}

fn anchor_rect(params: &MascotParams, viewport: Vec2) -> Rect {
    Rect::new(
        params.left_px,
        viewport.y - params.bottom_px - params.size_px,
        params.size_px,
        params.size_px,
    )
}
