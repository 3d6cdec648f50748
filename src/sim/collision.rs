//! Collision detection for axis-aligned arcade geometry
//!
//! Three primitive tests cover every game: box-box overlap, circle-circle
//! proximity, and circle-box for the mixed cases (coin pickup, ball vs
//! brick). Overlap is strict on every bound - two boxes sharing an edge do
//! not collide.

use glam::Vec2;

/// An axis-aligned box (top-left origin, like the canvas)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict interior containment
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

/// Box-box overlap; both axes' intervals must intersect strictly
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Circle-circle proximity: center distance strictly under the radius sum
#[inline]
pub fn circle_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) < (a_radius + b_radius) * (a_radius + b_radius)
}

/// Circle against a box: distance from the circle center to the closest
/// point of the box strictly under the radius
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.right()),
        center.y.clamp(rect.y, rect.bottom()),
    );
    center.distance_squared(closest) < radius * radius
}
