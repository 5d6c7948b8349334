//! Physics parameters for IntGrid colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics parameters applied to every collider a [`ColliderTarget`] spawns.
///
/// # Example
///
/// ```rust,no_run
/// use avian2d::prelude::*;
/// use bevy_ldtkmap_avian::ColliderConfig;
///
/// let ice = ColliderConfig::default()
///     .with_friction(0.02)
///     .with_restitution(0.1);
/// ```
///
/// [`ColliderTarget`]: crate::target::ColliderTarget
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ColliderConfig {
    /// Rigid body type.
    ///
    /// Default: [`RigidBody::Static`]
    pub body_type: RigidBody,

    /// Friction coefficient (0.0 = no friction, 1.0 = high friction).
    ///
    /// Default: `0.5`
    pub friction: f32,

    /// Restitution coefficient (0.0 = no bounce, 1.0 = perfect bounce).
    ///
    /// Default: `0.0`
    pub restitution: f32,

    /// Density, only applied to dynamic bodies.
    ///
    /// Default: `1.0`
    pub density: f32,

    /// Sensors detect overlaps without generating collision responses.
    ///
    /// Default: `false`
    pub is_sensor: bool,

    /// Collision layers of the spawned colliders.
    ///
    /// Default: [`CollisionLayers::default()`]
    pub collision_layers: CollisionLayers,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            body_type: RigidBody::Static,
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
            is_sensor: false,
            collision_layers: CollisionLayers::default(),
        }
    }
}

impl ColliderConfig {
    /// Builder method: set the rigid body type.
    pub fn with_body_type(mut self, body_type: RigidBody) -> Self {
        self.body_type = body_type;
        self
    }

    /// Builder method: set friction.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Builder method: set restitution.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Builder method: set density.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Builder method: set the sensor flag.
    pub fn with_is_sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Builder method: set collision layers.
    pub fn with_collision_layers(mut self, layers: CollisionLayers) -> Self {
        self.collision_layers = layers;
        self
    }
}
