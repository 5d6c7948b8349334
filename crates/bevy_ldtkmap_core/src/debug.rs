//! Debug visualization for merged IntGrid rectangles.

use bevy::prelude::*;

use crate::components::CollisionRect;

/// Resource to enable collision rectangle debug visualization.
///
/// Insert this resource to outline every [`CollisionRect`] with gizmos.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_ldtkmap_core::debug::DebugCollisionRects;
/// fn enable_debug(mut commands: Commands) {
///     commands.insert_resource(DebugCollisionRects::default());
/// }
/// ```
#[derive(Resource, Debug, Clone)]
pub struct DebugCollisionRects {
    /// Outline color
    pub color: Color,
}

impl Default for DebugCollisionRects {
    fn default() -> Self {
        Self {
            color: Color::srgba(1.0, 0.3, 0.0, 0.8), // Orange
        }
    }
}

/// System that outlines each collision rectangle at its world position.
///
/// Only runs when `DebugCollisionRects` resource is present.
pub fn draw_collision_rects_debug(
    config: Res<DebugCollisionRects>,
    rects: Query<(&CollisionRect, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    for (rect, global_transform) in &rects {
        let center = global_transform.translation().truncate();
        gizmos.rect_2d(Isometry2d::from_translation(center), rect.size, config.color);
    }
}
