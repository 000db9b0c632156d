use crate::constants::DECAL_VARIANTS;
use crate::core::geometry::Rect;
use crate::core::mascot::Expression;
use glam::Vec2;

// Inline CSS builders. Kept free of web-sys so they can be checked on the host.

pub const LAYER_STYLE: &str = "position:fixed;left:0;top:0;width:100vw;height:100vh;\
pointer-events:none;z-index:9999;overflow:hidden;";

/// Full-viewport stacking slot; slots are stacked in creation order.
pub fn slot_style(z_index: u32) -> String {
    format!("position:absolute;left:0;top:0;width:100%;height:100%;z-index:{z_index};")
}

pub fn gun_style(
    gun_box: Rect,
    pivot_fraction: Vec2,
    rotation_deg: f32,
    scale: f32,
    transition_ms: f64,
) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
transform-origin:{:.1}% {:.1}%;transform:rotate({:.2}deg) scale({:.3});\
transition:transform {:.0}ms linear;display:flex;justify-content:center;align-items:center;",
        gun_box.min.x,
        gun_box.min.y,
        gun_box.size.x,
        gun_box.size.y,
        pivot_fraction.x * 100.0,
        pivot_fraction.y * 100.0,
        rotation_deg,
        scale,
        transition_ms,
    )
}

/// Barrel drawn from `pivot` (relative to the gun box) along the sprite's
/// resting direction, so the calibration angle keeps its meaning.
pub fn barrel_style(pivot: Vec2, calibration_deg: f32, length_px: f32, thickness_px: f32) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
transform-origin:0 50%;transform:translateY(-50%) rotate({:.2}deg);\
background:linear-gradient(#5a5a5a,#2b2b2b);border-radius:4px;",
        pivot.x, pivot.y, length_px, thickness_px, calibration_deg,
    )
}

pub fn grip_style(pivot: Vec2, size_px: f32) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
border-radius:50%;background:#3b3b3b;box-shadow:0 0 6px rgba(0,0,0,0.4);",
        pivot.x - size_px * 0.5,
        pivot.y - size_px * 0.5,
        size_px,
        size_px,
    )
}

pub fn crosshair_style(pointer: Vec2) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:0;height:0;",
        pointer.x, pointer.y
    )
}

/// One arm of the crosshair; `vertical` selects the orientation.
pub fn crosshair_arm_style(vertical: bool, arm_px: f32, thickness_px: f32) -> String {
    let (w, h) = if vertical {
        (thickness_px, arm_px)
    } else {
        (arm_px, thickness_px)
    };
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;background:red;",
        -w * 0.5,
        -h * 0.5,
        w,
        h
    )
}

/// Bullet hole centred on `position`; `variant` picks one of the CSS looks.
pub fn decal_style(position: Vec2, variant: usize, fading: bool, fade_ms: f64) -> String {
    let (size_px, core, blur_px) = DECAL_VARIANTS
        .get(variant)
        .copied()
        .unwrap_or(DECAL_VARIANTS[0]);
    let opacity = if fading { 0.0 } else { 1.0 };
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
border-radius:50%;background:{core};box-shadow:0 0 {:.1}px rgba(0,0,0,0.5);\
transform:translate(-50%,-50%);opacity:{};transition:opacity {:.0}ms linear;",
        position.x, position.y, size_px, size_px, blur_px, opacity, fade_ms
    )
}

pub fn mascot_style(anchor: Rect, expression: Expression) -> String {
    let (face, tilt) = match expression {
        Expression::Idle => ("#ffd54f", 0.0),
        Expression::Frightened => ("#b3e5fc", -6.0),
        Expression::Dead => ("#bdbdbd", 90.0),
    };
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
border-radius:50%;background:{face};transform:rotate({tilt:.0}deg);\
transition:transform 200ms ease-out,background 200ms linear;",
        anchor.min.x, anchor.min.y, anchor.size.x, anchor.size.y,
    )
}

/// Eye socket centred on `center`, given relative to the mascot box.
pub fn eye_style(center: Vec2, size_px: f32) -> String {
    format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
border-radius:50%;background:white;display:flex;justify-content:center;align-items:center;\
font:bold {:.0}px sans-serif;color:#333;",
        center.x - size_px * 0.5,
        center.y - size_px * 0.5,
        size_px,
        size_px,
        size_px * 0.8,
    )
}

pub fn pupil_style(offset: Vec2, size_px: f32, visible: bool) -> String {
    format!(
        "width:{:.1}px;height:{:.1}px;border-radius:50%;background:#222;\
transform:translate({:.1}px,{:.1}px);display:{};",
        size_px,
        size_px,
        offset.x,
        offset.y,
        if visible { "block" } else { "none" },
    )
}

pub fn mouth_style(expression: Expression) -> &'static str {
    match expression {
        Expression::Idle => {
            "position:absolute;left:35%;top:62%;width:30%;height:12%;\
border-bottom:4px solid #5d4037;border-radius:0 0 50% 50%;"
        }
        Expression::Frightened => {
            "position:absolute;left:42%;top:60%;width:16%;height:20%;\
background:#5d4037;border-radius:50%;"
        }
        Expression::Dead => {
            "position:absolute;left:35%;top:68%;width:30%;height:0;\
border-top:4px solid #424242;"
        }
    }
}

pub const OVERLAY_STYLE: &str =
    "position:absolute;left:0;top:0;padding:50px;font-family:sans-serif;color:#333;user-select:none;";
