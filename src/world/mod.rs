//! World module housing the static town layout and the camera.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
