//! Unified plugin for `bevy_ldtkmap`.

use bevy::prelude::*;

use bevy_ldtkmap_assets::LdtkAssetsPlugin;
use bevy_ldtkmap_assets::source::SourceConfig;
use bevy_ldtkmap_core::{LdtkCorePlugin, LoadConfig};

#[cfg(feature = "avian")]
use bevy_ldtkmap_avian::{ColliderConfig, LdtkAvianPlugin};

/// Unified plugin that adds all enabled `bevy_ldtkmap` functionality.
///
/// This plugin automatically includes:
/// - Asset loading ([`LdtkAssetsPlugin`])
/// - Level loading configuration ([`LdtkCorePlugin`])
/// - Enabled Layer 3 integrations based on feature flags
///
/// # Features
///
/// - `avian` (default): Adds [`LdtkAvianPlugin`] for `Avian2D` colliders
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(LdtkmapPlugin::default())
///     .run();
/// ```
///
/// # With Custom Configuration
///
/// Each configuration is inserted as a resource. Loaders pick it up through
/// [`LdtkProject::parse_in_world`](bevy_ldtkmap_assets::project::LdtkProject::parse_in_world),
/// [`LevelLoader::from_world`](bevy_ldtkmap_core::loader::LevelLoader::from_world) and
/// `ColliderTarget::from_world`.
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         LdtkmapPlugin::default()
///             .with_source(SourceConfig::default().with_env_var("GAME_ENV"))
///             .with_load(LoadConfig::default().with_tile_layer_priority_base(0)),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct LdtkmapPlugin {
    /// Project source configuration
    pub source: SourceConfig,

    /// Level loading configuration
    pub load: LoadConfig,

    /// Avian collider configuration (if feature enabled)
    #[cfg(feature = "avian")]
    pub avian: ColliderConfig,
}

impl LdtkmapPlugin {
    /// Create with custom source configuration
    pub fn with_source(mut self, config: SourceConfig) -> Self {
        self.source = config;
        self
    }

    /// Create with custom level loading configuration
    pub fn with_load(mut self, config: LoadConfig) -> Self {
        self.load = config;
        self
    }

    /// Create with custom Avian collider configuration
    #[cfg(feature = "avian")]
    pub fn with_avian(mut self, config: ColliderConfig) -> Self {
        self.avian = config;
        self
    }
}

impl Plugin for LdtkmapPlugin {
    fn build(&self, app: &mut App) {
        // Layer 1: Assets (always required)
        app.add_plugins(LdtkAssetsPlugin::new(self.source.clone()));

        // Layer 2: Core (always required)
        app.add_plugins(LdtkCorePlugin::new(self.load.clone()));

        // Layer 3: Physics (feature-gated)
        #[cfg(feature = "avian")]
        app.add_plugins(LdtkAvianPlugin::new(self.avian.clone()));

        info!("LdtkmapPlugin initialized");
    }
}
