//! Whole-scene game state and the per-frame step.
//!
//! [`step`] is pure: it takes the previous state, the frame's input and the
//! elapsed time, and returns the next state together with the side effects
//! the engine layer has to carry out.
use std::time::Duration;

use bevy::prelude::*;
use serde::Serialize;

use crate::{
    dialogue::state::DialogueState,
    player::{components::PlayerState, input::InputSnapshot, movement::apply_movement},
    scene::{
        config::SceneConfig,
        effects::SceneEffect,
        triggers::{self, Trigger},
    },
};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameState {
    pub generation: u64,
    /// Scene time since this generation was created.
    pub elapsed: Duration,
    pub player: PlayerState,
    pub dialogue: DialogueState,
}

impl GameState {
    pub fn new(config: &SceneConfig) -> Self {
        Self::for_generation(config, 0)
    }

    fn for_generation(config: &SceneConfig, generation: u64) -> Self {
        Self {
            generation,
            elapsed: Duration::ZERO,
            player: PlayerState::spawn_at(config.player.spawn),
            dialogue: DialogueState::Hidden,
        }
    }

    /// Fresh state for the next generation, back at the spawn point.
    pub fn restarted(&self, config: &SceneConfig) -> Self {
        Self::for_generation(config, self.generation + 1)
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            generation: self.generation,
            elapsed_ms: self.elapsed.as_millis() as u64,
            position: self.player.position.to_array(),
            velocity: self.player.velocity.to_array(),
            facing: self.player.facing.label(),
            falling: self.player.is_falling(),
            dialogue: self.dialogue.clone(),
        }
    }
}

/// Serializable view of the state for debug logging.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub generation: u64,
    pub elapsed_ms: u64,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub facing: &'static str,
    pub falling: bool,
    pub dialogue: DialogueState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub state: GameState,
    pub effects: Vec<SceneEffect>,
}

impl FrameOutcome {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Advances the scene by one frame.
///
/// Order: an open dialogue consumes the frame (only dismiss is read), then an
/// active fall is sampled, then movement, then the interaction triggers.
pub fn step(
    state: &GameState,
    config: &SceneConfig,
    input: &InputSnapshot,
    delta: Duration,
) -> FrameOutcome {
    let mut next = state.clone();
    next.elapsed += delta;

    if next.dialogue.is_visible() {
        next.player.velocity = Vec2::ZERO;
        if input.confirm_pressed && next.dialogue.hide() {
            return FrameOutcome {
                state: next,
                effects: vec![SceneEffect::DialogueClosed],
            };
        }
        return FrameOutcome::quiet(next);
    }

    if let Some(fall) = next.player.fall {
        if fall.is_complete(next.elapsed, &config.fall) {
            let restarted = next.restarted(config);
            let generation = restarted.generation;
            return FrameOutcome {
                state: restarted,
                effects: vec![SceneEffect::SceneRestarted { generation }],
            };
        }

        let pose = fall.sample(next.elapsed, &config.fall);
        next.player.position = pose.position;
        next.player.scale = pose.scale;
        next.player.opacity = pose.opacity;
        return FrameOutcome::quiet(next);
    }

    apply_movement(&mut next.player, input, config, delta.as_secs_f32());

    let mut effects = Vec::new();
    match triggers::evaluate(&next.player, config, input, next.elapsed) {
        Some(Trigger::Fall(fall)) => {
            effects.push(SceneEffect::FallStarted {
                velocity: fall.start_velocity,
            });
            next.player.fall = Some(fall);
            next.player.velocity = Vec2::ZERO;
        }
        Some(Trigger::Dialogue { speaker, text }) => {
            if next.dialogue.show(text.clone()) {
                next.player.velocity = Vec2::ZERO;
                effects.push(SceneEffect::DialogueOpened { speaker, text });
            }
        }
        None => {}
    }

    FrameOutcome {
        state: next,
        effects,
    }
}
