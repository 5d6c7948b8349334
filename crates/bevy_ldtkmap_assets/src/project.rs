//! LDtk project (`.ldtk`) parsing and level lookup.
//!
//! A project is parsed once and then used as a read-only cache. Every level
//! block is decoded and classified up front; a level that fails to decode is
//! logged and left out of the cache without affecting the other levels.
//!
//! # Example
//!
//! ```rust,no_run
//! use bevy_ldtkmap_assets::prelude::*;
//!
//! let assets = EmbeddedAssets::new();
//! let project = LdtkProject::parse(&assets, "assets/world.ldtk").unwrap();
//!
//! match project.level("Level_0") {
//!     Ok(level) => println!("{} layers", level.layer_instances.len()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::ProjectError;
use crate::level::{ParsedLevel, null_as_empty};
use crate::source::{AssetSource, SourceConfig, SourceMode};

/// Tileset definition from `defs.tilesets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesetDef {
    pub identifier: String,

    /// Image path relative to the project file. `None` for embedded atlases.
    #[serde(default)]
    pub rel_path: Option<String>,

    /// Image width in pixels.
    #[serde(default)]
    pub px_wid: i32,

    /// Image height in pixels.
    #[serde(default)]
    pub px_hei: i32,

    /// Size of one tile in pixels.
    #[serde(default)]
    pub tile_grid_size: i32,

    pub uid: i32,
}

/// Project-level definitions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definitions {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tilesets: Vec<TilesetDef>,
}

/// Minimal level shape decoded before the full level, so a broken level can
/// still be named in the log.
#[derive(Deserialize)]
struct LevelHeader {
    identifier: String,
}

/// A parsed LDtk project.
///
/// Built once by [`LdtkProject::parse`] (or the asset loader) and immutable
/// afterwards. Levels are looked up by identifier.
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct LdtkProject {
    /// Raw level blocks, in file order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub levels: Vec<serde_json::Value>,

    #[serde(default)]
    pub defs: Definitions,

    /// Decoded levels keyed by identifier.
    #[serde(skip)]
    parsed_levels: HashMap<String, ParsedLevel>,
}

impl LdtkProject {
    /// Parse a project, choosing the source from the environment.
    ///
    /// See [`SourceMode::detect`] for how the mode is selected.
    pub fn parse(source: &dyn AssetSource, path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        Self::parse_with(source, path, &SourceConfig::default())
    }

    /// Parse a project with an explicit source configuration.
    pub fn parse_with(
        source: &dyn AssetSource,
        path: impl AsRef<Path>,
        config: &SourceConfig,
    ) -> Result<Self, ProjectError> {
        Self::parse_from(SourceMode::detect(config), source, path, config)
    }

    /// Parse a project using the [`SourceConfig`] resource of `world`.
    ///
    /// Falls back to the default configuration when the resource is absent.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// fn load_world(world: &mut World) {
    ///     let assets = EmbeddedAssets::new().with_file("data.ldtk", WORLD_BYTES);
    ///     let project = LdtkProject::parse_in_world(&assets, "assets/world.ldtk", world);
    /// }
    /// ```
    pub fn parse_in_world(
        source: &dyn AssetSource,
        path: impl AsRef<Path>,
        world: &World,
    ) -> Result<Self, ProjectError> {
        match world.get_resource::<SourceConfig>() {
            Some(config) => Self::parse_with(source, path, config),
            None => Self::parse(source, path),
        }
    }

    /// Parse a project from an explicit mode.
    ///
    /// - [`SourceMode::Embedded`] reads `config.embedded_file` from `source`
    /// - [`SourceMode::Filesystem`] reads `path` from disk
    pub fn parse_from(
        mode: SourceMode,
        source: &dyn AssetSource,
        path: impl AsRef<Path>,
        config: &SourceConfig,
    ) -> Result<Self, ProjectError> {
        let data = match mode {
            SourceMode::Embedded => source.read(&config.embedded_file).map_err(|e| {
                error!("Error reading LDtk file from embedded assets: {}", e);
                ProjectError::Read {
                    path: config.embedded_file.clone().into(),
                    source: e,
                }
            })?,
            SourceMode::Filesystem => {
                let path = path.as_ref();
                std::fs::read(path).map_err(|e| ProjectError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
        };

        Self::from_slice(&data)
    }

    /// Decode a project from raw JSON bytes and pre-parse every level.
    pub fn from_slice(data: &[u8]) -> Result<Self, ProjectError> {
        let mut project: LdtkProject = serde_json::from_slice(data).map_err(|e| {
            error!("Error parsing LDtk file: {}", e);
            ProjectError::Format(e)
        })?;

        project.parsed_levels = parse_levels(&project.levels);
        debug!(
            "Parsed LDtk project: {} of {} levels, {} tilesets",
            project.parsed_levels.len(),
            project.levels.len(),
            project.defs.tilesets.len()
        );

        Ok(project)
    }

    /// Get a parsed level by identifier.
    pub fn level(&self, name: &str) -> Result<&ParsedLevel, ProjectError> {
        self.parsed_levels
            .get(name)
            .ok_or_else(|| ProjectError::LevelNotFound(name.to_string()))
    }

    /// Get a parsed level by identifier, or `None`.
    pub fn get_level(&self, name: &str) -> Option<&ParsedLevel> {
        self.parsed_levels.get(name)
    }

    pub fn has_level(&self, name: &str) -> bool {
        self.parsed_levels.contains_key(name)
    }

    /// Iterate identifiers of all successfully parsed levels.
    pub fn level_names(&self) -> impl Iterator<Item = &str> {
        self.parsed_levels.keys().map(String::as_str)
    }

    /// Iterate all successfully parsed levels.
    pub fn levels(&self) -> impl Iterator<Item = &ParsedLevel> {
        self.parsed_levels.values()
    }

    /// Pixel width of a level, or `0` (with a warning) if it doesn't exist.
    pub fn width_for(&self, name: &str) -> i32 {
        match self.parsed_levels.get(name) {
            Some(level) => level.px_wid,
            None => {
                warn!("Level '{}' not found", name);
                0
            }
        }
    }

    /// Pixel height of a level, or `0` (with a warning) if it doesn't exist.
    pub fn height_for(&self, name: &str) -> i32 {
        match self.parsed_levels.get(name) {
            Some(level) => level.px_hei,
            None => {
                warn!("Level '{}' not found", name);
                0
            }
        }
    }

    /// Cell size of a layer in a level, or `0` if either doesn't exist.
    pub fn layer_grid_size(&self, level: &str, layer: &str) -> i32 {
        self.parsed_levels
            .get(level)
            .map_or(0, |level| level.grid_size_of(layer))
    }

    pub fn tilesets(&self) -> &[TilesetDef] {
        &self.defs.tilesets
    }

    /// Get a tileset definition by uid (first match).
    pub fn tileset(&self, uid: i32) -> Option<&TilesetDef> {
        self.defs.tilesets.iter().find(|t| t.uid == uid)
    }
}

/// Decode every level block, skipping the ones that fail.
fn parse_levels(blocks: &[serde_json::Value]) -> HashMap<String, ParsedLevel> {
    let mut parsed = HashMap::new();

    for (index, block) in blocks.iter().enumerate() {
        let header = match LevelHeader::deserialize(block) {
            Ok(header) => header,
            Err(e) => {
                warn!("Skipping level #{}: missing identifier ({})", index, e);
                continue;
            }
        };

        match ParsedLevel::from_value(block) {
            Ok(level) => {
                parsed.insert(header.identifier, level);
            }
            Err(e) => {
                warn!("Error parsing level '{}': {}", header.identifier, e);
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedAssets;
    use serde_json::json;

    fn project_json() -> serde_json::Value {
        json!({
            "levels": [
                {
                    "identifier": "Level_0",
                    "pxWid": 256,
                    "pxHei": 128,
                    "layerInstances": []
                },
                {
                    "identifier": "Broken",
                    "pxWid": "wide",
                    "layerInstances": []
                },
                {
                    "pxWid": 16
                },
                {
                    "identifier": "Level_1",
                    "pxWid": 64,
                    "pxHei": 64,
                    "layerInstances": [
                        { "__identifier": "Walls", "__type": "IntGrid",
                          "__cWid": 2, "__cHei": 2, "__gridSize": 32,
                          "intGridCsv": [1, 1, 1, 1] }
                    ]
                }
            ],
            "defs": {
                "tilesets": [
                    { "identifier": "Cavern", "relPath": "../assets/images/cavern.png",
                      "pxWid": 128, "pxHei": 64, "tileGridSize": 16, "uid": 3 }
                ]
            }
        })
    }

    fn project_bytes() -> Vec<u8> {
        serde_json::to_vec(&project_json()).unwrap()
    }

    #[test]
    fn test_broken_level_is_isolated() {
        let project = LdtkProject::from_slice(&project_bytes()).unwrap();

        assert!(project.has_level("Level_0"));
        assert!(project.has_level("Level_1"));
        assert!(!project.has_level("Broken"));
        assert!(matches!(
            project.level("Broken"),
            Err(ProjectError::LevelNotFound(ref name)) if name == "Broken"
        ));
        assert_eq!(project.level_names().count(), 2);
        assert_eq!(project.levels.len(), 4);
    }

    #[test]
    fn test_dimensions() {
        let project = LdtkProject::from_slice(&project_bytes()).unwrap();
        assert_eq!(project.width_for("Level_0"), 256);
        assert_eq!(project.height_for("Level_0"), 128);
        assert_eq!(project.width_for("Missing"), 0);
        assert_eq!(project.height_for("Missing"), 0);
    }

    #[test]
    fn test_tilesets() {
        let project = LdtkProject::from_slice(&project_bytes()).unwrap();
        let tileset = project.tileset(3).unwrap();
        assert_eq!(tileset.identifier, "Cavern");
        assert_eq!(tileset.tile_grid_size, 16);
        assert_eq!(tileset.rel_path.as_deref(), Some("../assets/images/cavern.png"));
        assert!(project.tileset(4).is_none());
        assert_eq!(project.tilesets().len(), 1);
    }

    #[test]
    fn test_levels_are_classified_at_parse_time() {
        let project = LdtkProject::from_slice(&project_bytes()).unwrap();
        let level = project.level("Level_1").unwrap();
        assert_eq!(level.int_grids["Walls"].width(), 2);
        assert_eq!(project.layer_grid_size("Level_1", "Walls"), 32);
        assert_eq!(project.layer_grid_size("Level_1", "Floor"), 0);
        assert_eq!(project.layer_grid_size("Missing", "Walls"), 0);
    }

    #[test]
    fn test_null_layer_list_keeps_level() {
        let data = json!({
            "levels": [
                { "identifier": "Ext", "pxWid": 320, "pxHei": 240, "layerInstances": null }
            ],
            "defs": { "tilesets": null }
        });
        let project = LdtkProject::from_slice(&serde_json::to_vec(&data).unwrap()).unwrap();

        assert!(project.has_level("Ext"));
        assert_eq!(project.width_for("Ext"), 320);
        assert_eq!(project.height_for("Ext"), 240);
        assert!(project.level("Ext").unwrap().layer_instances.is_empty());
        assert!(project.tilesets().is_empty());
    }

    #[test]
    fn test_format_error() {
        let result = LdtkProject::from_slice(br#"{"levels": 12}"#);
        assert!(matches!(result, Err(ProjectError::Format(_))));

        let result = LdtkProject::from_slice(b"not json");
        assert!(matches!(result, Err(ProjectError::Format(_))));
    }

    #[test]
    fn test_parse_embedded() {
        let bytes: &'static [u8] = Box::leak(project_bytes().into_boxed_slice());
        let assets = EmbeddedAssets::new().with_file("data.ldtk", bytes);

        let project = LdtkProject::parse_from(
            SourceMode::Embedded,
            &assets,
            "ignored/path.ldtk",
            &SourceConfig::default(),
        )
        .unwrap();
        assert!(project.has_level("Level_0"));
    }

    #[test]
    fn test_parse_embedded_missing_file() {
        let assets = EmbeddedAssets::new();
        let result = LdtkProject::parse_from(
            SourceMode::Embedded,
            &assets,
            "ignored.ldtk",
            &SourceConfig::default(),
        );
        assert!(matches!(result, Err(ProjectError::Read { .. })));
    }

    #[test]
    fn test_parse_filesystem() {
        let path = std::env::temp_dir().join(format!(
            "bevy_ldtkmap_assets_test_{}.ldtk",
            std::process::id()
        ));
        std::fs::write(&path, project_bytes()).unwrap();

        let result = LdtkProject::parse_from(
            SourceMode::Filesystem,
            &EmbeddedAssets::new(),
            &path,
            &SourceConfig::default(),
        );
        std::fs::remove_file(&path).ok();

        let project = result.unwrap();
        assert_eq!(project.width_for("Level_1"), 64);
    }

    #[test]
    fn test_parse_in_world_reads_source_config() {
        // An environment variable that is set for every test run selects embedded mode.
        let Ok(path_value) = std::env::var("PATH") else {
            return;
        };
        let bytes: &'static [u8] = Box::leak(project_bytes().into_boxed_slice());
        let assets = EmbeddedAssets::new().with_file("levels.ldtk", bytes);

        let mut world = World::new();
        world.insert_resource(
            SourceConfig::default()
                .with_env_var("PATH")
                .with_production_value(path_value)
                .with_embedded_file("levels.ldtk"),
        );

        let project =
            LdtkProject::parse_in_world(&assets, "does/not/exist.ldtk", &world).unwrap();
        assert!(project.has_level("Level_1"));
    }

    #[test]
    fn test_parse_in_world_without_config() {
        let world = World::new();
        let result =
            LdtkProject::parse_in_world(&EmbeddedAssets::new(), "does/not/exist.ldtk", &world);
        assert!(matches!(result, Err(ProjectError::Read { .. })));
    }

    #[test]
    fn test_parse_filesystem_missing_file() {
        let result = LdtkProject::parse_from(
            SourceMode::Filesystem,
            &EmbeddedAssets::new(),
            "does/not/exist.ldtk",
            &SourceConfig::default(),
        );
        match result {
            Err(ProjectError::Read { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.ldtk"));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
