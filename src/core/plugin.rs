//! CorePlugin wires frame timing and debug logging for the scene.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

#[cfg(feature = "core_debug")]
use crate::scene::state::GameState;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks scaled frame time derived from real frame deltas.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    last_real_delta: Duration,
    last_scaled_delta: Duration,
    elapsed: Duration,
    frames: u64,
}

impl SimulationClock {
    /// Creates a new clock with the provided time-scale multiplier.
    pub fn new(time_scale: f32) -> Self {
        let clamped = time_scale.max(MIN_TIME_SCALE);
        Self {
            time_scale: clamped,
            last_real_delta: Duration::ZERO,
            last_scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// Sets the time-scale multiplier (clamped to a small positive minimum).
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Delta handed to the scene step this frame.
    pub fn last_scaled_delta(&self) -> Duration {
        self.last_scaled_delta
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of ticks applied since startup.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies a real delta to the clock, storing both the real and scaled durations.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_scaled_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.last_scaled_delta;
        self.frames = self.frames.saturating_add(1);
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers frame timing systems and resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(First, update_simulation_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Last, log_scaled_ticks);
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_scaled_ticks(
    mut timer: ResMut<DebugTickTimer>,
    clock: Res<SimulationClock>,
    state: Res<GameState>,
) {
    if !timer.timer.tick(clock.last_real_delta()).just_finished() {
        return;
    }

    let snapshot = match serde_json::to_string(&state.snapshot()) {
        Ok(json) => json,
        Err(err) => format!("<unserializable: {}>", err),
    };

    info!(
        target: "core_debug",
        "Frame {} | elapsed: {:.2}s | scale: {:.3} | real dt: {:.4}s | scaled dt: {:.4}s | state: {}",
        clock.frames(),
        clock.elapsed().as_secs_f32(),
        clock.time_scale(),
        clock.last_real_delta().as_secs_f32(),
        clock.last_scaled_delta().as_secs_f32(),
        snapshot,
    );
}
