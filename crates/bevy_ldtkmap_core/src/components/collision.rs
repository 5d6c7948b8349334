//! Collision shape components for merged IntGrid rectangles.

use bevy::prelude::*;

/// Axis-aligned box spawned for every merged IntGrid rectangle.
///
/// The entity's `Transform` holds the rectangle center; this component holds
/// its full extent. Layer 3 physics plugins turn it into a real collider.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CollisionRect {
    /// Width and height in level pixels
    pub size: Vec2,
}

impl CollisionRect {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Half extents, as most collider constructors expect.
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }
}
