//! Per-frame input snapshot consumed by the scene step.
use bevy::input::ButtonInput;
use bevy::prelude::*;

/// Held state of one directional key set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalKeys {
    fn read(
        keyboard: &ButtonInput<KeyCode>,
        up: KeyCode,
        down: KeyCode,
        left: KeyCode,
        right: KeyCode,
    ) -> Self {
        Self {
            up: keyboard.pressed(up),
            down: keyboard.pressed(down),
            left: keyboard.pressed(left),
            right: keyboard.pressed(right),
        }
    }
}

/// Input read once at the start of a frame. The step never mutates it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub arrows: DirectionalKeys,
    pub wasd: DirectionalKeys,
    pub confirm_held: bool,
    /// True only on the frame the confirm key went down.
    pub confirm_pressed: bool,
}

impl InputSnapshot {
    pub fn up(&self) -> bool {
        self.arrows.up || self.wasd.up
    }

    pub fn down(&self) -> bool {
        self.arrows.down || self.wasd.down
    }

    pub fn left(&self) -> bool {
        self.arrows.left || self.wasd.left
    }

    pub fn right(&self) -> bool {
        self.arrows.right || self.wasd.right
    }
}

#[cfg(test)]
impl InputSnapshot {
    pub fn with_arrows(mut self, keys: DirectionalKeys) -> Self {
        self.arrows = keys;
        self
    }

    pub fn with_wasd(mut self, keys: DirectionalKeys) -> Self {
        self.wasd = keys;
        self
    }

    /// Marks confirm as pressed this frame (and therefore held).
    pub fn with_confirm_pressed(mut self) -> Self {
        self.confirm_held = true;
        self.confirm_pressed = true;
        self
    }

    pub fn with_confirm_held(mut self) -> Self {
        self.confirm_held = true;
        self
    }
}

/// Copies keyboard state into the [`InputSnapshot`] resource.
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut snapshot: ResMut<InputSnapshot>) {
    *snapshot = InputSnapshot {
        arrows: DirectionalKeys::read(
            &keyboard,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        ),
        wasd: DirectionalKeys::read(
            &keyboard,
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
        ),
        confirm_held: keyboard.pressed(KeyCode::Space),
        confirm_pressed: keyboard.just_pressed(KeyCode::Space),
    };
}
