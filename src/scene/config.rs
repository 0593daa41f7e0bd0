//! Scene layout and tuning loaded from `config/scene.toml`.
use std::{fs, path::Path, time::Duration};

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;
use serde::Deserialize;

use super::{
    errors::SceneConfigError,
    geometry::{aabb, WorldBounds},
};

const CONFIG_PATH: &str = "config/scene.toml";
const MIN_TIME_SCALE: f32 = 0.001;

#[derive(Debug, Clone, Deserialize)]
struct RawSceneConfig {
    #[serde(default)]
    simulation: RawSimulationSection,
    #[serde(default)]
    world: RawWorldSection,
    #[serde(default)]
    player: RawPlayerSection,
    #[serde(default)]
    npc: RawNpcSection,
    #[serde(default)]
    pit: RawPitSection,
    #[serde(default)]
    fall: RawFallSection,
    #[serde(default = "default_walls")]
    walls: Vec<RawWall>,
}

impl Default for RawSceneConfig {
    fn default() -> Self {
        Self {
            simulation: RawSimulationSection::default(),
            world: RawWorldSection::default(),
            player: RawPlayerSection::default(),
            npc: RawNpcSection::default(),
            pit: RawPitSection::default(),
            fall: RawFallSection::default(),
            walls: default_walls(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSimulationSection {
    time_scale: f32,
}

impl Default for RawSimulationSection {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawWorldSection {
    width: f32,
    height: f32,
    bounds_mode: BoundsMode,
}

impl Default for RawWorldSection {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            bounds_mode: BoundsMode::Clamp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayerSection {
    spawn: [f32; 2],
    size: [f32; 2],
    speed: f32,
}

impl Default for RawPlayerSection {
    fn default() -> Self {
        Self {
            spawn: [512.0, 384.0],
            size: [32.0, 32.0],
            speed: 360.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawNpcSection {
    enabled: bool,
    name: String,
    position: [f32; 2],
    talk_radius: f32,
    line: String,
}

impl Default for RawNpcSection {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Cat".to_string(),
            position: [200.0, 300.0],
            talk_radius: 60.0,
            line: "Hey kid... don't bother me.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPitSection {
    enabled: bool,
    center: [f32; 2],
    size: [f32; 2],
}

impl Default for RawPitSection {
    fn default() -> Self {
        Self {
            enabled: true,
            center: [780.0, 580.0],
            size: [64.0, 64.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawFallSection {
    duration_ms: u64,
    drop: f32,
    end_scale: f32,
}

impl Default for RawFallSection {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            drop: 200.0,
            end_scale: 0.3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawWall {
    center: [f32; 2],
    size: [f32; 2],
}

fn default_walls() -> Vec<RawWall> {
    vec![
        RawWall {
            center: [100.0, 100.0],
            size: [150.0, 120.0],
        },
        RawWall {
            center: [600.0, 100.0],
            size: [125.0, 100.0],
        },
        RawWall {
            center: [350.0, 400.0],
            size: [125.0, 100.0],
        },
    ]
}

/// How the player is kept inside the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// Clamp the player centre to the world edges.
    #[default]
    Clamp,
    /// Resolve against static walls, then clamp to the world edges.
    Colliders,
}

#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub spawn: Vec2,
    pub half_size: Vec2,
    /// Units per second along each active axis.
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct NpcSettings {
    pub name: String,
    pub position: Vec2,
    pub talk_radius: f32,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct FallSettings {
    pub duration: Duration,
    /// Extra screen-down travel added on top of the captured velocity.
    pub drop: f32,
    pub end_scale: f32,
}

/// Immutable per-scene setup data.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    pub time_scale: f32,
    pub world: WorldBounds,
    pub bounds_mode: BoundsMode,
    pub player: PlayerSettings,
    pub npc: Option<NpcSettings>,
    pub pit: Option<Aabb2d>,
    pub walls: Vec<Aabb2d>,
    pub fall: FallSettings,
}

impl SceneConfig {
    pub fn load_or_default() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => config,
            Err(err) => {
                warn!("{}. Falling back to defaults.", err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SceneConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|err| SceneConfigError::read(path, err))?;
        Self::from_toml_str(&data).map_err(|err| SceneConfigError::parse(path, err))
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawSceneConfig>(data).map(Into::into)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_bounds_mode(mut self, mode: BoundsMode) -> Self {
        self.bounds_mode = mode;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        RawSceneConfig::default().into()
    }
}

impl From<RawSceneConfig> for SceneConfig {
    fn from(value: RawSceneConfig) -> Self {
        let world = WorldBounds::new(value.world.width.max(1.0), value.world.height.max(1.0));

        let half_size = (Vec2::from(value.player.size).abs() * 0.5).min(world.size() * 0.5);
        let player = PlayerSettings {
            spawn: world.clamp_center(Vec2::from(value.player.spawn), half_size),
            half_size,
            speed: value.player.speed.max(0.0),
        };

        let npc = value.npc.enabled.then(|| NpcSettings {
            name: value.npc.name,
            position: Vec2::from(value.npc.position),
            talk_radius: value.npc.talk_radius.max(0.0),
            line: value.npc.line,
        });

        let pit = value
            .pit
            .enabled
            .then(|| aabb(Vec2::from(value.pit.center), Vec2::from(value.pit.size)));

        let walls = value
            .walls
            .into_iter()
            .map(|wall| aabb(Vec2::from(wall.center), Vec2::from(wall.size)))
            .collect();

        Self {
            time_scale: value.simulation.time_scale.max(MIN_TIME_SCALE),
            world,
            bounds_mode: value.world.bounds_mode,
            player,
            npc,
            pit,
            walls,
            fall: FallSettings {
                duration: Duration::from_millis(value.fall.duration_ms.max(1)),
                drop: value.fall.drop,
                end_scale: value.fall.end_scale.clamp(0.0, 1.0),
            },
        }
    }
}
