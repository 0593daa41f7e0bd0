//! Player module: input, movement controller and the player sprite.
pub mod components;
pub mod input;
pub mod movement;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
