//! Plugin for `Avian2D` physics integration.

use bevy::prelude::*;

use crate::config::ColliderConfig;

/// Plugin that makes a default [`ColliderConfig`] available as a resource.
///
/// Colliders are spawned explicitly by handing a
/// [`ColliderTarget`](crate::target::ColliderTarget) to the IntGrid loader;
/// this plugin does not run any systems.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_avian::{ColliderConfig, LdtkAvianPlugin};
/// use avian2d::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(PhysicsPlugins::default())
///     .add_plugins(LdtkAvianPlugin::new(
///         ColliderConfig::default().with_friction(0.3),
///     ))
///     .run();
/// ```
#[derive(Default)]
pub struct LdtkAvianPlugin {
    /// Physics configuration
    pub config: ColliderConfig,
}

impl LdtkAvianPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: ColliderConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LdtkAvianPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        info!("LdtkAvianPlugin initialized");
    }
}
