// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module providing the bottom box for NPC lines.

pub mod components;
pub mod plugin;
pub mod systems;

// Re-export main types
pub use plugin::UiPlugin;
