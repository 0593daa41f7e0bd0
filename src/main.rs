use bevy::prelude::*;

mod core;
mod dialogue;
mod hazard;
mod npc;
mod player;
mod scene;
mod ui;
mod world;

use crate::{
    core::CorePlugin, player::PlayerPlugin, scene::ScenePlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Cat Town".to_string(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin,
            ScenePlugin, // Inserts SceneConfig and GameState used by the plugins below
            WorldPlugin,
            PlayerPlugin,
            UiPlugin,
        ))
        .insert_resource(ClearColor(Color::BLACK))
        .run();
}
