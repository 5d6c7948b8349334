//! IntGrid target that spawns `Avian2D` colliders.

use avian2d::prelude::*;
use bevy::ecs::error::Result;
use bevy::prelude::*;
use bevy_ldtkmap_core::components::CollisionRect;
use bevy_ldtkmap_core::intgrid::IntGridTarget;

use crate::config::ColliderConfig;

/// Components spawned for every rectangle.
pub type ColliderBundle = (
    Transform,
    RigidBody,
    Collider,
    Friction,
    Restitution,
    CollisionLayers,
    CollisionRect,
);

/// Spawns one rigid body with a rectangle collider per merged rectangle.
///
/// Spawned entities carry `Transform`, `RigidBody`, `Collider`, `Friction`,
/// `Restitution`, `CollisionLayers` and `CollisionRect`, plus `Sensor` and
/// `ColliderDensity` when the configuration calls for them.
#[derive(Debug, Clone, Default)]
pub struct ColliderTarget {
    config: ColliderConfig,
}

impl ColliderTarget {
    pub fn new(config: ColliderConfig) -> Self {
        Self { config }
    }

    /// Create a target configured by the [`ColliderConfig`] resource of `world`.
    ///
    /// Uses the default configuration when the resource is absent.
    pub fn from_world(world: &World) -> Self {
        Self::new(world.get_resource::<ColliderConfig>().cloned().unwrap_or_default())
    }

    pub fn config(&self) -> &ColliderConfig {
        &self.config
    }

    /// Components for a rectangle centered at `center` with the given `size`.
    pub fn bundle(&self, center: Vec2, size: Vec2) -> ColliderBundle {
        (
            Transform::from_xyz(center.x, center.y, 0.0),
            self.config.body_type,
            Collider::rectangle(size.x, size.y),
            Friction::new(self.config.friction).with_combine_rule(CoefficientCombine::Average),
            Restitution::new(self.config.restitution)
                .with_combine_rule(CoefficientCombine::Average),
            self.config.collision_layers,
            CollisionRect::new(size),
        )
    }
}

impl IntGridTarget for ColliderTarget {
    fn spawn(&self, world: &mut World, center: Vec2, size: Vec2) -> Result {
        let mut entity = world.spawn(self.bundle(center, size));

        if self.config.body_type == RigidBody::Dynamic {
            entity.insert(ColliderDensity(self.config.density));
        }
        if self.config.is_sensor {
            entity.insert(Sensor);
        }

        Ok(())
    }
}
