//! ScenePlugin owns the game state resource and the per-frame step.
use bevy::prelude::*;

use crate::scene::{
    config::SceneConfig,
    effects::SceneEffect,
    state::GameState,
    systems::{advance_game_state, apply_configured_time_scale, restart_scene, spawn_initial_scene},
};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let config = SceneConfig::load_or_default();
        info!(
            "Scene configured: {}x{} world, {:?} bounds, player speed {:.0}/s",
            config.world.width, config.world.height, config.bounds_mode, config.player.speed
        );

        app.insert_resource(GameState::new(&config))
            .insert_resource(config)
            .add_message::<SceneEffect>()
            .add_systems(Startup, (apply_configured_time_scale, spawn_initial_scene))
            .add_systems(
                Update,
                (advance_game_state, restart_scene.after(advance_game_state)),
            );
    }
}
