//! Movement controller: input intent, velocity and bounded position updates.
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::{
    player::{
        components::{Facing, PlayerState},
        input::InputSnapshot,
    },
    scene::{
        config::{BoundsMode, SceneConfig},
        geometry::{aabb, penetrates},
    },
};

/// Resolves held keys into a per-axis intent of `-1`, `0` or `1`.
///
/// Each axis takes one direction only. When both keys of an axis are held
/// the negative one (left, up) wins.
pub fn movement_intent(input: &InputSnapshot) -> IVec2 {
    let x = if input.left() {
        -1
    } else if input.right() {
        1
    } else {
        0
    };

    let y = if input.up() {
        -1
    } else if input.down() {
        1
    } else {
        0
    };

    IVec2::new(x, y)
}

/// Diagonals are intentionally left unnormalised, so they run √2 faster.
pub fn velocity_for(intent: IVec2, speed: f32) -> Vec2 {
    intent.as_vec2() * speed
}

/// Applies one frame of movement to the player.
pub fn apply_movement(
    player: &mut PlayerState,
    input: &InputSnapshot,
    config: &SceneConfig,
    delta_seconds: f32,
) {
    let intent = movement_intent(input);
    player.velocity = velocity_for(intent, config.player.speed);
    if let Some(facing) = Facing::from_axes(intent) {
        player.facing = facing;
    }

    let half_size = config.player.half_size;
    let displacement = player.velocity * delta_seconds;

    let moved = match config.bounds_mode {
        BoundsMode::Clamp => player.position + displacement,
        BoundsMode::Colliders => {
            move_against_walls(player.position, displacement, half_size, &config.walls)
        }
    };

    player.position = config.world.clamp_center(moved, half_size);
}

/// Moves one axis at a time, pushing the box back out of any wall it ends up
/// inside along the axis it just travelled.
fn move_against_walls(start: Vec2, displacement: Vec2, half_size: Vec2, walls: &[Aabb2d]) -> Vec2 {
    let mut position = start;

    position.x += displacement.x;
    if displacement.x != 0.0 {
        for wall in walls {
            if penetrates(&aabb(position, half_size * 2.0), wall) {
                position.x = if displacement.x > 0.0 {
                    wall.min.x - half_size.x
                } else {
                    wall.max.x + half_size.x
                };
            }
        }
    }

    position.y += displacement.y;
    if displacement.y != 0.0 {
        for wall in walls {
            if penetrates(&aabb(position, half_size * 2.0), wall) {
                position.y = if displacement.y > 0.0 {
                    wall.min.y - half_size.y
                } else {
                    wall.max.y + half_size.y
                };
            }
        }
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::input::DirectionalKeys;

    fn keys(up: bool, down: bool, left: bool, right: bool) -> DirectionalKeys {
        DirectionalKeys {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn single_flags_map_to_facing_table() {
        let cases = [
            (keys(true, false, false, false), Facing::Up),
            (keys(false, true, false, false), Facing::Down),
            (keys(false, false, true, false), Facing::Left),
            (keys(false, false, false, true), Facing::Right),
        ];
        let config = SceneConfig::default();

        for (pressed, expected) in cases {
            for input in [
                InputSnapshot::default().with_arrows(pressed),
                InputSnapshot::default().with_wasd(pressed),
            ] {
                let mut player = PlayerState::spawn_at(config.player.spawn);
                apply_movement(&mut player, &input, &config, 1.0 / 60.0);
                assert_eq!(player.facing, expected);
            }
        }
    }

    #[test]
    fn negative_direction_wins_per_axis() {
        let both_horizontal = InputSnapshot::default().with_arrows(keys(false, false, true, true));
        assert_eq!(movement_intent(&both_horizontal), IVec2::new(-1, 0));

        let both_vertical = InputSnapshot::default().with_wasd(keys(true, true, false, false));
        assert_eq!(movement_intent(&both_vertical), IVec2::new(0, -1));

        let split_sources = InputSnapshot::default()
            .with_arrows(keys(false, true, false, true))
            .with_wasd(keys(true, false, true, false));
        assert_eq!(movement_intent(&split_sources), IVec2::new(-1, -1));
    }

    #[test]
    fn diagonal_speed_is_not_normalised() {
        let input = InputSnapshot::default().with_arrows(keys(false, true, false, true));
        let config = SceneConfig::default();
        let mut player = PlayerState::spawn_at(config.player.spawn);

        apply_movement(&mut player, &input, &config, 0.1);

        assert_eq!(player.velocity, Vec2::new(360.0, 360.0));
        assert!((player.velocity.length() - 360.0 * 2f32.sqrt()).abs() < 1e-3);
        assert_eq!(player.facing, Facing::DownRight);
        assert!((player.position - Vec2::new(548.0, 420.0)).length() < 1e-3);
    }

    #[test]
    fn idle_frame_keeps_facing_and_stops() {
        let config = SceneConfig::default();
        let mut player = PlayerState::spawn_at(config.player.spawn);
        let left = InputSnapshot::default().with_arrows(keys(false, false, true, false));

        apply_movement(&mut player, &left, &config, 0.1);
        apply_movement(&mut player, &InputSnapshot::default(), &config, 0.1);

        assert_eq!(player.facing, Facing::Left);
        assert_eq!(player.velocity, Vec2::ZERO);
    }

    #[test]
    fn clamp_mode_stops_at_world_edge() {
        let config = SceneConfig::default();
        let mut player = PlayerState::spawn_at(Vec2::new(20.0, 20.0));
        let up_left = InputSnapshot::default().with_arrows(keys(true, false, true, false));

        apply_movement(&mut player, &up_left, &config, 1.0);

        assert_eq!(player.position, Vec2::new(16.0, 16.0));
    }

    #[test]
    fn clamp_mode_walks_through_walls() {
        let config = SceneConfig::default();
        // Just right of the house at (350, 400).
        let mut player = PlayerState::spawn_at(Vec2::new(430.0, 400.0));
        let left = InputSnapshot::default().with_arrows(keys(false, false, true, false));

        apply_movement(&mut player, &left, &config, 0.1);

        assert!((player.position.x - 394.0).abs() < 1e-3);
    }

    #[test]
    fn collider_mode_stops_flush_against_wall() {
        let config = SceneConfig::default().with_bounds_mode(BoundsMode::Colliders);
        let mut player = PlayerState::spawn_at(Vec2::new(430.0, 400.0));
        let left = InputSnapshot::default().with_arrows(keys(false, false, true, false));

        apply_movement(&mut player, &left, &config, 0.1);

        // House spans x 287.5..412.5; player half width is 16.
        assert_eq!(player.position.x, 428.5);
        assert_eq!(player.position.y, 400.0);
    }

    #[test]
    fn collider_mode_slides_along_wall() {
        let config = SceneConfig::default().with_bounds_mode(BoundsMode::Colliders);
        // Resting on top of the house at (350, 400): top edge y = 350.
        let mut player = PlayerState::spawn_at(Vec2::new(350.0, 334.0));
        let down_right = InputSnapshot::default().with_arrows(keys(false, true, false, true));

        apply_movement(&mut player, &down_right, &config, 0.05);

        assert!((player.position.x - 368.0).abs() < 1e-3);
        assert_eq!(player.position.y, 334.0);
    }
}
