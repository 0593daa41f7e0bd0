//! Systems driving the scene step and the scene lifecycle.
use bevy::prelude::*;

use crate::{
    core::plugin::SimulationClock,
    hazard::systems::spawn_pit,
    npc::systems::spawn_npc,
    player::{input::InputSnapshot, systems::spawn_player},
    scene::{
        config::SceneConfig,
        effects::SceneEffect,
        state::{step, GameState},
    },
    ui::hint::spawn_controls_hint,
    world::{components::SceneEntity, systems::spawn_layout},
};

/// Spawns every per-scene entity for the current generation.
pub fn spawn_scene(commands: &mut Commands, config: &SceneConfig, state: &GameState) {
    let generation = state.generation;
    spawn_layout(commands, config, generation);
    spawn_pit(commands, config, generation);
    spawn_npc(commands, config, generation);
    spawn_player(commands, config, state);
    spawn_controls_hint(commands, generation);
}

pub fn spawn_initial_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    state: Res<GameState>,
) {
    spawn_scene(&mut commands, &config, &state);
    info!(
        "Scene generation {} spawned ({:?} bounds, {} walls)",
        state.generation,
        config.bounds_mode,
        config.walls.len()
    );
}

pub fn apply_configured_time_scale(config: Res<SceneConfig>, mut clock: ResMut<SimulationClock>) {
    clock.set_time_scale(config.time_scale);
    info!("Scene time scale: {:.3}", clock.time_scale());
}

/// Runs one scene step and broadcasts its side effects.
pub fn advance_game_state(
    clock: Res<SimulationClock>,
    config: Res<SceneConfig>,
    input: Res<InputSnapshot>,
    mut state: ResMut<GameState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    let outcome = step(&state, &config, &input, clock.last_scaled_delta());
    *state = outcome.state;

    for effect in outcome.effects {
        match &effect {
            SceneEffect::DialogueOpened { speaker, text } => {
                info!("{} says: \"{}\"", speaker, text);
            }
            SceneEffect::DialogueClosed => debug!("Dialogue dismissed"),
            SceneEffect::FallStarted { velocity } => {
                info!(
                    "Player fell into the pit at ({:.1}, {:.1}) facing {} with velocity ({:.1}, {:.1})",
                    state.player.position.x,
                    state.player.position.y,
                    state.player.facing.label(),
                    velocity.x,
                    velocity.y
                );
            }
            SceneEffect::SceneRestarted { generation } => {
                info!(
                    "Restarting scene as generation {} (frame {})",
                    generation,
                    clock.frames()
                );
            }
        }
        effects.write(effect);
    }
}

/// Tears down every per-scene entity and rebuilds the layout when a restart
/// is requested.
pub fn restart_scene(
    mut commands: Commands,
    mut effects: MessageReader<SceneEffect>,
    config: Res<SceneConfig>,
    state: Res<GameState>,
    entities: Query<Entity, With<SceneEntity>>,
) {
    // Drain every message so none linger into the next frame.
    let restarted = effects.read().fold(false, |restarted, effect| {
        restarted || matches!(effect, SceneEffect::SceneRestarted { .. })
    });
    if !restarted {
        return;
    }

    let mut despawned = 0usize;
    for entity in entities.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    debug!("Despawned {} scene entities", despawned);

    spawn_scene(&mut commands, &config, &state);
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;
    use crate::player::components::PlayerSprite;

    fn scene_app() -> App {
        let config = SceneConfig::default();
        let state = GameState::new(&config);

        let mut app = App::new();
        app.add_message::<SceneEffect>()
            .insert_resource(state)
            .insert_resource(config)
            .add_systems(Startup, spawn_initial_scene)
            .add_systems(Update, restart_scene);
        app
    }

    fn generations(app: &mut App) -> Vec<u64> {
        let mut query = app.world_mut().query::<&SceneEntity>();
        query.iter(app.world()).map(|tag| tag.generation).collect()
    }

    #[test]
    fn restart_rebuilds_every_scene_entity() {
        let mut app = scene_app();
        app.update();

        let initial = generations(&mut app);
        // Ground, three houses, pit, cat, player, hint.
        assert_eq!(initial.len(), 8);
        assert!(initial.iter().all(|generation| *generation == 0));

        let config = app.world().resource::<SceneConfig>().clone();
        let next = app.world().resource::<GameState>().restarted(&config);
        app.insert_resource(next);
        app.world_mut()
            .resource_mut::<Messages<SceneEffect>>()
            .write(SceneEffect::SceneRestarted { generation: 1 });
        app.update();

        let after = generations(&mut app);
        assert_eq!(after.len(), 8);
        assert!(after.iter().all(|generation| *generation == 1));

        let mut players = app.world_mut().query_filtered::<Entity, With<PlayerSprite>>();
        assert_eq!(players.iter(app.world()).count(), 1);
    }

    #[test]
    fn other_effects_leave_scene_alone() {
        let mut app = scene_app();
        app.update();
        let before = generations(&mut app).len();

        app.world_mut()
            .resource_mut::<Messages<SceneEffect>>()
            .write(SceneEffect::DialogueClosed);
        app.update();

        assert_eq!(generations(&mut app).len(), before);
    }

    #[test]
    fn advance_applies_step_and_forwards_effects() {
        let config = SceneConfig::default();
        let mut state = GameState::new(&config);
        state.dialogue = crate::dialogue::state::DialogueState::Visible {
            text: "line".to_string(),
        };

        let mut clock = SimulationClock::default();
        clock.tick(std::time::Duration::from_millis(10));

        let mut app = App::new();
        app.add_message::<SceneEffect>()
            .insert_resource(config)
            .insert_resource(state)
            .insert_resource(clock)
            .insert_resource(InputSnapshot {
                confirm_held: true,
                confirm_pressed: true,
                ..Default::default()
            })
            .add_systems(Update, advance_game_state);
        app.update();

        let state = app.world().resource::<GameState>();
        assert!(!state.dialogue.is_visible());
        assert_eq!(state.elapsed, std::time::Duration::from_millis(10));

        let effects: Vec<SceneEffect> = app
            .world_mut()
            .resource_mut::<Messages<SceneEffect>>()
            .drain()
            .collect();
        assert_eq!(effects, vec![SceneEffect::DialogueClosed]);
    }

    #[test]
    fn disabled_npc_and_pit_are_not_spawned() {
        let mut config = SceneConfig::default();
        config.npc = None;
        config.pit = None;
        config.walls.clear();

        let mut app = App::new();
        app.insert_resource(GameState::new(&config))
            .insert_resource(config)
            .add_systems(Startup, spawn_initial_scene);
        app.update();

        // Ground, player, hint.
        assert_eq!(generations(&mut app).len(), 3);
    }
}
