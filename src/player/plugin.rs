//! Player plugin wiring input capture and sprite sync.
use bevy::prelude::*;

use crate::{
    player::{
        input::{capture_input, InputSnapshot},
        systems::sync_player_sprite,
    },
    scene::systems::{advance_game_state, restart_scene},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>().add_systems(
            Update,
            (
                capture_input.before(advance_game_state),
                sync_player_sprite
                    .after(advance_game_state)
                    .after(restart_scene),
            ),
        );
    }
}
