use bevy::prelude::*;

use crate::loaders::project::LdtkProjectLoader;
use crate::project::LdtkProject;
use crate::source::SourceConfig;

/// Plugin that registers the LDtk project asset type and loader
///
/// This plugin enables loading `.ldtk` files as Bevy assets.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_assets::LdtkAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(LdtkAssetsPlugin::default())
///     .run();
/// ```
///
/// # What this plugin does
///
/// - Registers the `LdtkProject` asset type
/// - Registers `LdtkProjectLoader` for `.ldtk` files
/// - Inserts the [`SourceConfig`] resource used by direct (non-asset-server) parsing
///
/// # What this plugin does NOT do
///
/// - Entity spawning (that's Layer 2 - `bevy_ldtkmap_core`)
/// - Rendering or physics
///
/// This is a **Layer 1** plugin: pure asset loading with no ECS concerns.
#[derive(Default)]
pub struct LdtkAssetsPlugin {
    /// Source selection configuration
    pub source: SourceConfig,
}

impl LdtkAssetsPlugin {
    /// Create a new plugin with a custom source configuration.
    pub fn new(source: SourceConfig) -> Self {
        Self { source }
    }
}

impl Plugin for LdtkAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<LdtkProject>()
            .register_asset_loader(LdtkProjectLoader);

        app.insert_resource(self.source.clone());
    }
}
