// src/ui/dialogue_panel/plugin.rs
//
// UiPlugin coordinates dialogue panel systems and resources.

use bevy::prelude::*;

use crate::scene::systems::advance_game_state;

use super::components::{DialoguePanelSettings, DialoguePanelTracker};
use super::systems::update_dialogue_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(DialoguePanelSettings::default())
            .insert_resource(DialoguePanelTracker::default())
            .add_systems(Update, update_dialogue_panel.after(advance_game_state));
    }
}
