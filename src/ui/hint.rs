// src/ui/hint.rs
//
// Top-left controls hint, rebuilt with every scene generation.

use bevy::prelude::*;

use crate::world::components::SceneEntity;

const HINT_TEXT: &str = "Arrow keys or WASD to move\nSpace to talk to cat";
const HINT_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

/// Marker for the controls hint text.
#[derive(Component, Debug)]
pub struct ControlsHint;

pub fn spawn_controls_hint(commands: &mut Commands, generation: u64) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        Text::new(HINT_TEXT),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(HINT_COLOR),
        ControlsHint,
        SceneEntity { generation },
        Name::new("Controls Hint"),
    ));
}
