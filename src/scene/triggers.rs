//! Interaction trigger: NPC proximity dialogue and pit overlap.
use std::time::Duration;

use crate::{
    hazard::fall::FallingTransition,
    player::{components::PlayerState, input::InputSnapshot},
    scene::{
        config::{NpcSettings, SceneConfig},
        geometry::{aabb, overlaps},
    },
};

/// Outcome of evaluating the triggers for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Dialogue { speaker: String, text: String },
    Fall(FallingTransition),
}

/// True when the confirm key went down this frame within talking range.
pub fn dialogue_triggered(player: &PlayerState, npc: &NpcSettings, input: &InputSnapshot) -> bool {
    input.confirm_pressed && player.position.distance(npc.position) < npc.talk_radius
}

pub fn pit_overlapped(player: &PlayerState, config: &SceneConfig) -> bool {
    let Some(pit) = config.pit.as_ref() else {
        return false;
    };
    let player_box = aabb(player.position, config.player.half_size * 2.0);
    overlaps(&player_box, pit)
}

/// Evaluates the pit first; a player that starts falling does not also open
/// a dialogue on the same frame.
pub fn evaluate(
    player: &PlayerState,
    config: &SceneConfig,
    input: &InputSnapshot,
    now: Duration,
) -> Option<Trigger> {
    if player.is_falling() {
        return None;
    }

    if pit_overlapped(player, config) {
        return Some(Trigger::Fall(FallingTransition::new(
            now,
            player.position,
            player.velocity,
        )));
    }

    let npc = config.npc.as_ref()?;
    dialogue_triggered(player, npc, input).then(|| Trigger::Dialogue {
        speaker: npc.name.clone(),
        text: npc.line.clone(),
    })
}
