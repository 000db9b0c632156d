pub mod aim;
pub mod config;
pub mod decals;
pub mod geometry;
pub mod mascot;
pub mod scene;
pub mod trigger;

pub use config::SceneConfig;
pub use decals::DecalId;
pub use mascot::Expression;
pub use scene::Scene;
