// src/ui/mod.rs
//
// UI module providing screen-space UI elements.
//
// Current features:
// - Dialogue panel (bottom-centre box showing the NPC line)
// - Controls hint (top-left instructions)

pub mod dialogue_panel;
pub mod hint;

// Re-export the main plugin
pub use dialogue_panel::UiPlugin;
