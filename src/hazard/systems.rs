//! Spawning for the pit.
use bevy::prelude::*;

use crate::{
    scene::{
        config::SceneConfig,
        geometry::{aabb_center, aabb_size},
    },
    world::{components::SceneEntity, systems::Z_PROPS},
};

const PIT_COLOR: Color = Color::srgb_u8(40, 30, 25);
const PIT_RIM_COLOR: Color = Color::srgb_u8(90, 75, 60);
const RIM_WIDTH: f32 = 4.0;

/// Marker for the pit sprite.
#[derive(Component, Debug)]
pub struct Pit;

pub fn spawn_pit(commands: &mut Commands, config: &SceneConfig, generation: u64) {
    let Some(pit) = config.pit.as_ref() else {
        debug!("No pit configured for generation {}", generation);
        return;
    };

    let size = aabb_size(pit);
    commands
        .spawn((
            Sprite::from_color(PIT_RIM_COLOR, size),
            Transform::from_translation(config.world.to_translation(aabb_center(pit), Z_PROPS)),
            Pit,
            SceneEntity { generation },
            Name::new("Pit"),
        ))
        .with_children(|rim| {
            rim.spawn((
                Sprite::from_color(PIT_COLOR, (size - Vec2::splat(RIM_WIDTH * 2.0)).max(Vec2::ZERO)),
                Transform::from_xyz(0.0, 0.0, 0.01),
            ));
        });
}
