// src/ui/dialogue_panel/components.rs
//
// Components and resources for the dialogue panel.

use bevy::prelude::*;

/// Component attached to the dialogue panel root.
#[derive(Component, Debug)]
pub struct DialoguePanel {
    /// Display name of the speaking NPC.
    speaker_name: String,

    /// The line being displayed.
    content: String,
}

impl DialoguePanel {
    pub fn new(speaker_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker_name: speaker_name.into(),
            content: content.into(),
        }
    }

    pub fn speaker_name(&self) -> &str {
        &self.speaker_name
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Resource tracking the currently open panel. At most one exists.
#[derive(Resource, Debug, Default)]
pub struct DialoguePanelTracker {
    pub active_panel: Option<Entity>,
}

/// Resource containing layout settings for the dialogue panel.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Panel height (pixels).
    pub panel_height: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Font size for the line (points).
    pub text_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 600.0,
            panel_height: 100.0,
            bottom_offset: 38.0,
            border_width: 2.0,
            padding: 12.0,
            text_font_size: 20.0,
        }
    }
}
