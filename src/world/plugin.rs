//! WorldPlugin sets up the camera that frames the town.
use bevy::prelude::*;

use crate::world::systems::spawn_scene_camera;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene_camera);
    }
}
