//! Scene module: configuration, the pure per-frame step and the scene lifecycle.
pub mod config;
pub mod effects;
pub mod errors;
pub mod geometry;
pub mod plugin;
pub mod state;
pub mod systems;
pub mod triggers;

pub use plugin::ScenePlugin;
