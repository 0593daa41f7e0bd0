//! NPC module: the stationary cat the player can talk to.
pub mod components;
pub mod systems;
