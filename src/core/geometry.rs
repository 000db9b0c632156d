use glam::Vec2;

/// Placement of the gun graphic relative to the bottom-right viewport corner.
///
/// Offsets follow CSS `right`/`bottom` semantics: a negative `bottom_px`
/// pushes the box below the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GunLayout {
    pub width_px: f32,
    pub height_px: f32,
    pub right_px: f32,
    pub bottom_px: f32,
    /// Pivot position inside the box, as fractions of width/height from the top-left.
    pub pivot_fraction: Vec2,
}

/// Axis-aligned rectangle in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

impl GunLayout {
    /// Box occupied by the gun graphic for the given viewport size.
    pub fn container(&self, viewport: Vec2) -> Rect {
        let right_edge = viewport.x - self.right_px;
        let bottom_edge = viewport.y - self.bottom_px;
        Rect::new(
            right_edge - self.width_px,
            bottom_edge - self.height_px,
            self.width_px,
            self.height_px,
        )
    }
}

/// Rotation pivot of the gun graphic in viewport coordinates.
#[inline]
pub fn pivot_point(layout: &GunLayout, viewport: Vec2) -> Vec2 {
    let right_edge = viewport.x - layout.right_px;
    let bottom_edge = viewport.y - layout.bottom_px;
    let x = right_edge - layout.width_px * (1.0 - layout.pivot_fraction.x);
    let y = bottom_edge - layout.height_px * (1.0 - layout.pivot_fraction.y);
    Vec2::new(x, y)
}

/// Screen angle from `pivot` to `pointer` in degrees, in (-180, 180].
///
/// Uses the y-down convention of the viewport: a pointer directly below the
/// pivot is +90.
#[inline]
pub fn pointer_angle_deg(pivot: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - pivot;
    d.y.atan2(d.x).to_degrees()
}

/// Rotation to apply to the sprite so it points at `pointer`.
#[inline]
pub fn rotation_deg(pivot: Vec2, pointer: Vec2, calibration_deg: f32) -> f32 {
    pointer_angle_deg(pivot, pointer) - calibration_deg
}

/// Normalise an angle difference into (-180, 180].
#[inline]
pub fn wrap_delta_deg(delta: f32) -> f32 {
    let mut d = delta % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

