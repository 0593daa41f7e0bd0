//! Spawning for the stationary NPC.
use bevy::prelude::*;

use crate::{npc::components::Npc, scene::config::SceneConfig, world::components::SceneEntity};

const CAT_COLOR: Color = Color::srgb_u8(230, 150, 60);
const CAT_EAR_COLOR: Color = Color::srgb_u8(200, 120, 40);
const CAT_SIZE: Vec2 = Vec2::new(36.0, 28.0);
const Z_NPC: f32 = 2.0;

/// Spawns the NPC for one scene generation. Does nothing when the NPC is
/// disabled in the config.
pub fn spawn_npc(commands: &mut Commands, config: &SceneConfig, generation: u64) {
    let Some(npc) = config.npc.as_ref() else {
        debug!("No NPC configured for generation {}", generation);
        return;
    };

    let translation = config.world.to_translation(npc.position, Z_NPC);

    commands
        .spawn((
            Sprite::from_color(CAT_COLOR, CAT_SIZE),
            Transform::from_translation(translation),
            Npc,
            SceneEntity { generation },
            Name::new(npc.name.clone()),
        ))
        .with_children(|cat| {
            for side in [-1.0, 1.0] {
                cat.spawn((
                    Sprite::from_color(CAT_EAR_COLOR, Vec2::new(8.0, 8.0)),
                    Transform::from_xyz(side * 11.0, CAT_SIZE.y * 0.5 + 3.0, 0.01),
                ));
            }
        });
}
