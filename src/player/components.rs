//! Player state and the components attached to the player sprite.
use bevy::prelude::*;
use serde::Serialize;

use crate::hazard::fall::FallingTransition;

/// Eight-way facing derived from the movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Facing {
    /// Maps an intent of signs (`-1`, `0`, `1` per axis, screen space) to a facing.
    /// Zero intent has no facing; callers keep the previous one.
    pub fn from_axes(intent: IVec2) -> Option<Self> {
        match (intent.x.signum(), intent.y.signum()) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            (-1, -1) => Some(Self::UpLeft),
            (1, -1) => Some(Self::UpRight),
            (-1, 1) => Some(Self::DownLeft),
            (1, 1) => Some(Self::DownRight),
            _ => None,
        }
    }

    /// Animation name for this facing.
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        }
    }

    /// Unit direction in screen space.
    pub fn direction(self) -> Vec2 {
        let (x, y) = match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::UpLeft => (-1.0, -1.0),
            Self::UpRight => (1.0, -1.0),
            Self::DownLeft => (-1.0, 1.0),
            Self::DownRight => (1.0, 1.0),
        };
        Vec2::new(x, y).normalize()
    }
}

/// The player entity as seen by the scene step.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Set once on entering the pit; a restart creates a fresh player.
    pub fall: Option<FallingTransition>,
    pub scale: f32,
    pub opacity: f32,
}

impl PlayerState {
    pub fn spawn_at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            fall: None,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.fall.is_some()
    }
}

/// Marker for the rendered player sprite.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Small child sprite pointing in the facing direction.
#[derive(Component, Debug)]
pub struct FacingMarker;
