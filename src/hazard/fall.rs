//! Scripted fall into the pit, sampled once per frame against scene time.
use std::time::Duration;

use bevy::prelude::*;

use crate::scene::config::FallSettings;

/// Started on the first pit overlap. Holds everything needed to sample the
/// fall at any later scene time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingTransition {
    pub start_time: Duration,
    pub start_position: Vec2,
    pub start_velocity: Vec2,
}

/// Interpolated player pose at one moment of the fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallPose {
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl FallingTransition {
    pub fn new(start_time: Duration, start_position: Vec2, start_velocity: Vec2) -> Self {
        Self {
            start_time,
            start_position,
            start_velocity,
        }
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.start_time)
    }

    /// Fraction of the fall completed, in `[0, 1]`.
    pub fn progress(&self, now: Duration, settings: &FallSettings) -> f32 {
        let duration = settings.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f32() / duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Duration, settings: &FallSettings) -> bool {
        self.elapsed(now) >= settings.duration
    }

    /// Total travel: the captured velocity plus a fixed screen-down drop.
    pub fn travel(&self, settings: &FallSettings) -> Vec2 {
        self.start_velocity + Vec2::new(0.0, settings.drop)
    }

    pub fn sample(&self, now: Duration, settings: &FallSettings) -> FallPose {
        let t = self.progress(now, settings);
        FallPose {
            position: self.start_position + self.travel(settings) * t,
            scale: 1.0 + (settings.end_scale - 1.0) * t,
            opacity: 1.0 - t,
        }
    }
}
