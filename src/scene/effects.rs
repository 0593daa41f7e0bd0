//! Side effects produced by one scene step and broadcast to render/UI systems.
use bevy::prelude::*;

/// Emitted by [`step`](super::state::step) and forwarded as a Bevy message.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum SceneEffect {
    DialogueOpened { speaker: String, text: String },
    DialogueClosed,
    FallStarted { velocity: Vec2 },
    /// Every per-scene entity must be torn down and rebuilt for `generation`.
    SceneRestarted { generation: u64 },
}
