//! Systems for the world module.
use bevy::{camera::ScalingMode, prelude::*};

use crate::{
    scene::{
        config::SceneConfig,
        geometry::{aabb_center, aabb_size},
    },
    world::components::{Backdrop, House, SceneCamera, SceneEntity},
};

const GROUND_COLOR: Color = Color::BLACK;
const HOUSE_COLOR: Color = Color::srgb_u8(150, 105, 70);
const ROOF_COLOR: Color = Color::srgb_u8(170, 60, 50);

pub const Z_GROUND: f32 = 0.0;
pub const Z_PROPS: f32 = 1.0;

/// Spawns the camera, fitted so the whole world is always visible.
pub fn spawn_scene_camera(mut commands: Commands, config: Res<SceneConfig>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: config.world.width,
                min_height: config.world.height,
            },
            ..OrthographicProjection::default_2d()
        }),
        SceneCamera,
        Name::new("Scene Camera"),
    ));
}

/// Spawns the ground and the houses for one scene generation.
pub fn spawn_layout(commands: &mut Commands, config: &SceneConfig, generation: u64) {
    let world = config.world;
    let tag = SceneEntity { generation };

    commands.spawn((
        Sprite::from_color(GROUND_COLOR, world.size()),
        Transform::from_translation(world.to_translation(world.center(), Z_GROUND)),
        Backdrop,
        tag,
        Name::new("Ground"),
    ));

    for (index, wall) in config.walls.iter().enumerate() {
        let size = aabb_size(wall);
        let roof_height = size.y * 0.35;

        commands
            .spawn((
                Sprite::from_color(HOUSE_COLOR, size),
                Transform::from_translation(world.to_translation(aabb_center(wall), Z_PROPS)),
                House,
                tag,
                Name::new(format!("House {}", index)),
            ))
            .with_children(|house| {
                house.spawn((
                    Sprite::from_color(ROOF_COLOR, Vec2::new(size.x, roof_height)),
                    Transform::from_xyz(0.0, (size.y - roof_height) * 0.5, 0.01),
                ));
            });
    }
}
