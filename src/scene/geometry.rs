//! Screen-space geometry helpers shared by movement, triggers and rendering.
//!
//! Scene coordinates follow the town layout: origin at the top-left corner,
//! x to the right, y downward. Bevy renders with a centred, y-up frame, so
//! [`WorldBounds::to_translation`] is the only place the two meet.
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Fixed extent of the playable world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Clamps a box centre so the whole box stays inside the world.
    pub fn clamp_center(&self, center: Vec2, half_size: Vec2) -> Vec2 {
        let max = (self.size() - half_size).max(half_size);
        center.clamp(half_size, max)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_box(&self, center: Vec2, half_size: Vec2) -> bool {
        let max = self.size() - half_size;
        center.x >= half_size.x && center.y >= half_size.y && center.x <= max.x && center.y <= max.y
    }

    /// Converts a scene point into a Bevy translation.
    pub fn to_translation(&self, point: Vec2, z: f32) -> Vec3 {
        Vec3::new(point.x - self.width * 0.5, self.height * 0.5 - point.y, z)
    }
}

pub fn aabb(center: Vec2, size: Vec2) -> Aabb2d {
    Aabb2d::new(center, size.abs() * 0.5)
}

pub fn aabb_center(aabb: &Aabb2d) -> Vec2 {
    (aabb.min + aabb.max) * 0.5
}

pub fn aabb_size(aabb: &Aabb2d) -> Vec2 {
    aabb.max - aabb.min
}

/// Overlap test that counts touching edges as overlapping.
pub fn overlaps(a: &Aabb2d, b: &Aabb2d) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

/// Strict overlap: boxes sharing only an edge do not penetrate.
pub fn penetrates(a: &Aabb2d, b: &Aabb2d) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_box_inside_world() {
        let bounds = WorldBounds::new(1024.0, 768.0);
        let half = Vec2::splat(16.0);

        assert_eq!(
            bounds.clamp_center(Vec2::new(2000.0, -50.0), half),
            Vec2::new(1008.0, 16.0)
        );
        assert_eq!(
            bounds.clamp_center(Vec2::new(512.0, 384.0), half),
            Vec2::new(512.0, 384.0)
        );
        assert!(bounds.contains_box(Vec2::new(1008.0, 752.0), half));
        assert!(!bounds.contains_box(Vec2::new(1008.5, 752.0), half));
    }

    #[test]
    fn translation_flips_y_around_world_centre() {
        let bounds = WorldBounds::new(1024.0, 768.0);
        assert_eq!(bounds.to_translation(bounds.center(), 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            bounds.to_translation(Vec2::ZERO, 0.0),
            Vec3::new(-512.0, 384.0, 0.0)
        );
    }

    #[test]
    fn touching_boxes_overlap_but_do_not_penetrate() {
        let left = aabb(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let right = aabb(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let far = aabb(Vec2::new(30.0, 0.0), Vec2::splat(10.0));

        assert!(overlaps(&left, &right));
        assert!(!penetrates(&left, &right));
        assert!(!overlaps(&left, &far));
        assert_eq!(aabb_center(&right), Vec2::new(10.0, 0.0));
        assert_eq!(aabb_size(&right), Vec2::splat(10.0));
    }
}
