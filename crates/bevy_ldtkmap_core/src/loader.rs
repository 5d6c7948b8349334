//! Level loader shared by the entity, IntGrid and tile loading passes.

use bevy::prelude::*;
use bevy_ldtkmap_assets::prelude::{LdtkProject, ParsedLevel};

use crate::plugin::LoadConfig;

/// Spawns the contents of levels from a parsed project into a `World`.
///
/// The project is only borrowed, so several loaders can share one project.
/// The passes are independent; call the ones you need:
///
/// - [`load_entities`](Self::load_entities) dispatches entity instances to handlers
/// - [`load_int_grid`](Self::load_int_grid) spawns merged IntGrid rectangles
/// - [`load_tiles`](Self::load_tiles) spawns one entity per tile layer
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_assets::prelude::*;
/// use bevy_ldtkmap_core::prelude::*;
///
/// fn load(project: &LdtkProject, world: &mut World) -> Result<(), LoadError> {
///     let loader = LevelLoader::from_world(project, world);
///     loader.load_tiles("Level_0", world);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LevelLoader<'a> {
    project: &'a LdtkProject,
    config: LoadConfig,
}

impl<'a> LevelLoader<'a> {
    pub fn new(project: &'a LdtkProject) -> Self {
        Self {
            project,
            config: LoadConfig::default(),
        }
    }

    /// Create a loader configured by the [`LoadConfig`] resource of `world`.
    ///
    /// Uses the default configuration when the resource is absent, so this
    /// honors whatever [`LdtkCorePlugin`](crate::plugin::LdtkCorePlugin) inserted.
    pub fn from_world(project: &'a LdtkProject, world: &World) -> Self {
        Self {
            project,
            config: world.get_resource::<LoadConfig>().cloned().unwrap_or_default(),
        }
    }

    /// Builder method: replace the load configuration.
    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn project(&self) -> &'a LdtkProject {
        self.project
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Look up a level, warning when it doesn't exist.
    pub(crate) fn level(&self, name: &str) -> Option<&'a ParsedLevel> {
        let level = self.project.get_level(name);
        if level.is_none() {
            warn!("Level '{}' not found", name);
        }
        level
    }
}

/// Counts returned by each loading pass.
///
/// What counts as processed depends on the pass: handled entity instances,
/// spawned IntGrid rectangles, or spawned tile layers. Skipped items were
/// logged and left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub processed: usize,
    pub skipped: usize,
}

impl LoadReport {
    /// True when nothing was processed or skipped.
    pub fn is_empty(&self) -> bool {
        self.processed == 0 && self.skipped == 0
    }
}
