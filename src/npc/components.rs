//! NPC-specific components.
use bevy::prelude::*;

/// Marker for a stationary NPC the player can talk to.
#[derive(Component, Debug, Default)]
pub struct Npc;
