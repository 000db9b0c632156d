/// Layout, timing and tuning constants for the gun cursor scene.
///
/// All positions are CSS pixels in viewport space (y grows downward).
/// These are the defaults behind `SceneConfig`; the host page can override
/// a subset of them through `data-*` attributes on the root element.
// Gun container box, anchored to the bottom-right corner of the viewport
pub const GUN_BOX_WIDTH_PX: f32 = 500.0;
pub const GUN_BOX_HEIGHT_PX: f32 = 500.0;
pub const GUN_RIGHT_OFFSET_PX: f32 = 20.0;
pub const GUN_BOTTOM_OFFSET_PX: f32 = -250.0; // negative pushes the box below the fold

// Rotation pivot as a fraction of the gun box (the "shoulder")
pub const GUN_PIVOT_FRACTION_X: f32 = 0.5;
pub const GUN_PIVOT_FRACTION_Y: f32 = 0.8;

// Intrinsic pointing direction of the gun sprite, tuned by eye
pub const GUN_CALIBRATION_DEG: f32 = -109.0;

// Recoil
pub const FIRE_DURATION_MS: f64 = 100.0;
pub const FIRE_SCALE: f32 = 1.05;
pub const GUN_TRANSITION_MS: f64 = 50.0;

// Bullet-hole decals
pub const DECAL_DWELL_MS: f64 = 3000.0;
pub const DECAL_FADE_MS: f64 = 1000.0;
// Bullet-hole looks drawn in CSS: (diameter px, core colour, shadow blur px)
pub const DECAL_VARIANTS: [(f32, &str, f32); 3] = [
    (10.0, "#000000", 2.0),
    (13.0, "#1b1b1b", 3.0),
    (8.0, "#2e2622", 1.5),
];

// Mascot anchor box, anchored to the bottom-left corner of the viewport
pub const MASCOT_LEFT_PX: f32 = 40.0;
pub const MASCOT_BOTTOM_PX: f32 = 40.0;
pub const MASCOT_SIZE_PX: f32 = 120.0;
pub const PROXIMITY_THRESHOLD_PX: f32 = 180.0;
pub const MASCOT_REVERT_MS: f64 = 3000.0;

// Eye anchors as fractions of the mascot box, and the pupil clamp
pub const MASCOT_EYE_FRACTIONS: [[f32; 2]; 2] = [[0.36, 0.42], [0.64, 0.42]];
pub const PUPIL_MAX_OFFSET_PX: f32 = 5.0;
pub const EYE_SIZE_PX: f32 = 22.0;
pub const PUPIL_SIZE_PX: f32 = 9.0;

// Crosshair arms
pub const CROSSHAIR_ARM_PX: f32 = 20.0;
pub const CROSSHAIR_THICKNESS_PX: f32 = 2.0;

// Gun drawn in CSS: barrel from the pivot along the sprite direction, grip at the pivot
pub const GUN_BARREL_LENGTH_PX: f32 = 240.0;
pub const GUN_BARREL_THICKNESS_PX: f32 = 34.0;
pub const GUN_GRIP_SIZE_PX: f32 = 90.0;

// Static text overlay
pub const OVERLAY_TITLE: &str = "Portfolio Target Practice";
pub const OVERLAY_HINT: &str = "The screen is your canvas. Click to shoot.";

// DOM hooks
pub const ROOT_ELEMENT_ID: &str = "gun-cursor-root";
