//! Components used by the world module.
use bevy::prelude::*;

/// Tags every entity that belongs to one scene generation. A restart
/// despawns all of them together.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneEntity {
    pub generation: u64,
}

/// Marker for the black ground rectangle.
#[derive(Component, Debug, Default)]
pub struct Backdrop;

/// Marker for a house acting as a static wall.
#[derive(Component, Debug, Default)]
pub struct House;

/// Marker for the primary 2D camera.
#[derive(Component, Debug, Default)]
pub struct SceneCamera;
