//! Systems that spawn the player sprite and mirror the scene state onto it.
use bevy::prelude::*;

use crate::{
    player::components::{FacingMarker, PlayerSprite},
    scene::{config::SceneConfig, state::GameState},
    world::components::SceneEntity,
};

const PLAYER_COLOR: Color = Color::srgb_u8(0x34, 0x98, 0xdb);
const MARKER_COLOR: Color = Color::WHITE;
const MARKER_SIZE: f32 = 6.0;
const Z_PLAYER: f32 = 3.0;

pub fn spawn_player(commands: &mut Commands, config: &SceneConfig, state: &GameState) {
    let player = &state.player;
    let size = config.player.half_size * 2.0;

    commands
        .spawn((
            Sprite::from_color(PLAYER_COLOR, size),
            Transform::from_translation(config.world.to_translation(player.position, Z_PLAYER)),
            PlayerSprite,
            SceneEntity {
                generation: state.generation,
            },
            Name::new("Player"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite::from_color(MARKER_COLOR, Vec2::splat(MARKER_SIZE)),
                Transform::from_translation(marker_offset(player.facing.direction(), size)),
                FacingMarker,
            ));
        });
}

/// Copies position, scale, opacity and facing from [`GameState`] to the sprites.
#[allow(clippy::type_complexity)]
pub fn sync_player_sprite(
    state: Res<GameState>,
    config: Res<SceneConfig>,
    mut players: Query<(&mut Transform, &mut Sprite), With<PlayerSprite>>,
    mut markers: Query<(&mut Transform, &mut Sprite), (With<FacingMarker>, Without<PlayerSprite>)>,
) {
    let player = &state.player;
    let size = config.player.half_size * 2.0;

    for (mut transform, mut sprite) in players.iter_mut() {
        transform.translation = config.world.to_translation(player.position, Z_PLAYER);
        transform.scale = Vec3::new(player.scale, player.scale, 1.0);
        sprite.color = PLAYER_COLOR.with_alpha(player.opacity);
    }

    for (mut transform, mut sprite) in markers.iter_mut() {
        transform.translation = marker_offset(player.facing.direction(), size);
        sprite.color = MARKER_COLOR.with_alpha(player.opacity);
    }
}

/// Places the marker just inside the edge of the player box, in local
/// (y-up) space.
fn marker_offset(direction: Vec2, size: Vec2) -> Vec3 {
    let reach = (size * 0.5 - Vec2::splat(MARKER_SIZE)).max(Vec2::ZERO);
    Vec3::new(direction.x * reach.x, -direction.y * reach.y, 0.01)
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::player::components::Facing;

    #[test]
    fn sync_moves_and_fades_player_sprite() {
        let config = SceneConfig::default();
        let mut state = GameState::new(&config);

        let mut app = App::new();
        app.insert_resource(config.clone());
        app.add_systems(Update, sync_player_sprite);

        let mut commands_state = state.clone();
        commands_state.player.position = Vec2::new(0.0, 0.0);
        app.world_mut()
            .run_system_once(move |mut commands: Commands, config: Res<SceneConfig>| {
                spawn_player(&mut commands, &config, &commands_state);
            })
            .expect("spawn system runs");

        state.player.position = Vec2::new(612.0, 284.0);
        state.player.scale = 0.5;
        state.player.opacity = 0.25;
        state.player.facing = Facing::Up;
        app.insert_resource(state);

        app.update();

        let mut players = app
            .world_mut()
            .query_filtered::<(&Transform, &Sprite), With<PlayerSprite>>();
        let (transform, sprite) = players.single(app.world()).expect("one player sprite");
        assert_eq!(transform.translation, Vec3::new(100.0, 100.0, Z_PLAYER));
        assert_eq!(transform.scale, Vec3::new(0.5, 0.5, 1.0));
        assert!((sprite.color.alpha() - 0.25).abs() < 1e-6);

        let mut markers = app
            .world_mut()
            .query_filtered::<&Transform, With<FacingMarker>>();
        let marker = markers.single(app.world()).expect("one facing marker");
        assert!(marker.translation.y > 0.0);
        assert_eq!(marker.translation.x, 0.0);
    }
}
