// src/ui/dialogue_panel/systems.rs
//
// Systems for opening and closing the dialogue panel.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::scene::effects::SceneEffect;

use super::components::{DialoguePanel, DialoguePanelSettings, DialoguePanelTracker};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
const BORDER_COLOR: Color = Color::WHITE;
const TEXT_COLOR: Color = Color::WHITE;

/// Opens, closes or clears the panel in response to scene effects.
///
/// The panel root is a full-width row anchored to the bottom so the box is
/// centred horizontally regardless of window size.
pub fn update_dialogue_panel(
    mut commands: Commands,
    mut tracker: ResMut<DialoguePanelTracker>,
    settings: Res<DialoguePanelSettings>,
    mut effects: MessageReader<SceneEffect>,
    panels: Query<&DialoguePanel>,
) {
    for effect in effects.read() {
        match effect {
            SceneEffect::DialogueOpened { speaker, text } => {
                close_panel(&mut commands, &mut tracker, &panels);
                let panel = spawn_panel(&mut commands, &settings, speaker, text);
                tracker.active_panel = Some(panel);
            }
            SceneEffect::DialogueClosed | SceneEffect::SceneRestarted { .. } => {
                close_panel(&mut commands, &mut tracker, &panels);
            }
            SceneEffect::FallStarted { .. } => {}
        }
    }
}

fn close_panel(
    commands: &mut Commands,
    tracker: &mut DialoguePanelTracker,
    panels: &Query<&DialoguePanel>,
) {
    let Some(panel) = tracker.active_panel.take() else {
        return;
    };
    if let Ok(component) = panels.get(panel) {
        debug!("Closing dialogue panel for {}", component.speaker_name());
    }
    commands.entity(panel).despawn();
}

fn spawn_panel(
    commands: &mut Commands,
    settings: &DialoguePanelSettings,
    speaker: &str,
    text: &str,
) -> Entity {
    info!("Opening dialogue panel for {}", speaker);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            DialoguePanel::new(speaker, text),
            Name::new("Dialogue Panel"),
        ))
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(settings.panel_width),
                    height: Val::Px(settings.panel_height),
                    padding: UiRect::all(Val::Px(settings.padding)),
                    border: UiRect::all(Val::Px(settings.border_width)),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                BorderColor::from(BORDER_COLOR),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new(text),
                    TextFont {
                        font_size: settings.text_font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });
        })
        .id()
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;

    fn panel_app() -> App {
        let mut app = App::new();
        app.add_message::<SceneEffect>()
            .init_resource::<DialoguePanelTracker>()
            .insert_resource(DialoguePanelSettings::default())
            .add_systems(Update, update_dialogue_panel);
        app
    }

    fn send(app: &mut App, effect: SceneEffect) {
        app.world_mut()
            .resource_mut::<Messages<SceneEffect>>()
            .write(effect);
        app.update();
    }

    fn open_panels(app: &mut App) -> Vec<String> {
        let mut query = app.world_mut().query::<&DialoguePanel>();
        query
            .iter(app.world())
            .map(|panel| panel.content().to_string())
            .collect()
    }

    #[test]
    fn opens_and_closes_single_panel() {
        let mut app = panel_app();

        send(
            &mut app,
            SceneEffect::DialogueOpened {
                speaker: "Cat".into(),
                text: "Hey kid... don't bother me.".into(),
            },
        );
        assert_eq!(open_panels(&mut app), vec!["Hey kid... don't bother me."]);
        assert!(app
            .world()
            .resource::<DialoguePanelTracker>()
            .active_panel
            .is_some());

        send(&mut app, SceneEffect::DialogueClosed);
        assert!(open_panels(&mut app).is_empty());
        assert!(app
            .world()
            .resource::<DialoguePanelTracker>()
            .active_panel
            .is_none());
    }

    #[test]
    fn restart_clears_open_panel() {
        let mut app = panel_app();

        send(
            &mut app,
            SceneEffect::DialogueOpened {
                speaker: "Cat".into(),
                text: "line".into(),
            },
        );
        send(&mut app, SceneEffect::SceneRestarted { generation: 1 });

        assert!(open_panels(&mut app).is_empty());
    }
}
