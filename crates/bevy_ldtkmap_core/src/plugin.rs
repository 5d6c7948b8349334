//! Plugin for `bevy_ldtkmap_core`.

use bevy::prelude::*;

use crate::components::{CollisionRect, Tile, TileLayerSprite};
use crate::debug::{DebugCollisionRects, draw_collision_rects_debug};

/// Configuration for the level loaders.
///
/// # Example
///
/// ```rust,no_run
/// use bevy_ldtkmap_core::LoadConfig;
///
/// let config = LoadConfig::default()
///     .with_tile_layer_priority_base(100)
///     .with_tileset_path_prefixes(["../", "gfx/"]);
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Priority of the first emitted tile layer; each following layer gets +1.
    ///
    /// Default: `10`
    pub tile_layer_priority_base: i32,

    /// Prefixes stripped from tileset paths, each at most once, in order.
    ///
    /// Default: `["../", "assets/", "images/"]`
    pub tileset_path_prefixes: Vec<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            tile_layer_priority_base: 10,
            tileset_path_prefixes: vec![
                "../".to_string(),
                "assets/".to_string(),
                "images/".to_string(),
            ],
        }
    }
}

impl LoadConfig {
    /// Builder method: set the base tile layer priority.
    pub fn with_tile_layer_priority_base(mut self, base: i32) -> Self {
        self.tile_layer_priority_base = base;
        self
    }

    /// Builder method: replace the tileset path prefixes.
    pub fn with_tileset_path_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tileset_path_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Plugin for the `bevy_ldtkmap_core` loaders.
///
/// Inserts [`LoadConfig`] as a resource, registers the spawned component
/// types for reflection, and adds the collision rectangle debug overlay (only
/// active while [`DebugCollisionRects`] exists). Loading itself is explicit: build a
/// [`LevelLoader`](crate::loader::LevelLoader) from a project and call its
/// `load_*` methods with a `&mut World`.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_assets::LdtkAssetsPlugin;
/// use bevy_ldtkmap_core::{LdtkCorePlugin, LoadConfig};
///
/// App::new()
///     .add_plugins(LdtkAssetsPlugin::default())
///     .add_plugins(LdtkCorePlugin::new(
///         LoadConfig::default().with_tile_layer_priority_base(0),
///     ));
/// ```
#[derive(Default)]
pub struct LdtkCorePlugin {
    config: LoadConfig,
}

impl LdtkCorePlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LdtkCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .register_type::<CollisionRect>()
            .register_type::<TileLayerSprite>()
            .register_type::<Tile>();

        // Debug overlay (only runs when DebugCollisionRects resource is present)
        app.add_systems(
            Update,
            draw_collision_rects_debug.run_if(resource_exists::<DebugCollisionRects>),
        );

        debug!("LdtkCorePlugin initialized");
    }
}
