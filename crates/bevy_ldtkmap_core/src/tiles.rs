//! Tile loading: one entity per tile layer.
//!
//! Each tile layer becomes a single entity at the origin carrying a
//! [`TileLayerSprite`] with every tile of the layer. Layers are spawned in
//! declaration order, and their priorities increase in the same order.

use bevy::prelude::*;
use bevy_ldtkmap_assets::prelude::{GridTile, TileLayerData};

use crate::components::{Tile, TileLayerSprite};
use crate::loader::{LevelLoader, LoadReport};

/// Flip flags of a grid tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileFlip {
    pub x: bool,
    pub y: bool,
}

impl TileFlip {
    /// Decode the LDtk flip mask: bit 0 is X, bit 1 is Y.
    pub fn from_bits(mask: i32) -> Self {
        Self {
            x: mask & 1 != 0,
            y: mask & 2 != 0,
        }
    }
}

/// Strip each prefix from `path` at most once, in the given order.
///
/// ```
/// use bevy_ldtkmap_core::tiles::normalize_tileset_path;
///
/// let prefixes = ["../", "assets/", "images/"];
/// assert_eq!(normalize_tileset_path("../assets/images/cave.png", &prefixes), "cave.png");
/// assert_eq!(normalize_tileset_path("images/assets/cave.png", &prefixes), "assets/cave.png");
/// ```
pub fn normalize_tileset_path<S: AsRef<str>>(path: &str, prefixes: &[S]) -> String {
    prefixes
        .iter()
        .fold(path, |path, prefix| {
            path.strip_prefix(prefix.as_ref()).unwrap_or(path)
        })
        .to_string()
}

/// Convert a grid tile, with its source position measured in tiles.
fn convert_tile(tile: &GridTile, tile_size: i32) -> Tile {
    let flip = TileFlip::from_bits(tile.f);
    Tile {
        source_x: tile.src[0] / tile_size,
        source_y: tile.src[1] / tile_size,
        tile_id: tile.t,
        flipped_x: flip.x,
        flipped_y: flip.y,
        x: tile.px[0] as f32,
        y: tile.px[1] as f32,
    }
}

impl LevelLoader<'_> {
    /// Spawn one `(TileLayerSprite, Transform, Name)` entity per tile layer.
    ///
    /// Layers whose tileset is unknown, has no image, or has a non-positive
    /// tile size are logged and skipped. Skipped layers don't consume a
    /// priority.
    pub fn load_tiles(&self, level_name: &str, world: &mut World) -> LoadReport {
        let mut report = LoadReport::default();
        let Some(level) = self.level(level_name) else {
            return report;
        };

        for (layer_name, data) in level.iter_tile_layers() {
            let Some(sprite) = self.build_layer_sprite(layer_name, data, report.processed) else {
                report.skipped += 1;
                continue;
            };

            world.spawn((
                sprite,
                Transform::IDENTITY,
                Name::new(format!("Tile Layer: {}", layer_name)),
            ));
            report.processed += 1;
        }

        debug!(
            "Loaded tiles for level '{}': {} layers, {} skipped",
            level_name, report.processed, report.skipped
        );
        report
    }

    fn build_layer_sprite(
        &self,
        layer_name: &str,
        data: &TileLayerData,
        index: usize,
    ) -> Option<TileLayerSprite> {
        let Some(tileset) = self.project().tileset(data.tileset_def_uid) else {
            warn!(
                "Tileset {} for layer '{}' not found",
                data.tileset_def_uid, layer_name
            );
            return None;
        };

        let Some(rel_path) = tileset.rel_path.as_deref().filter(|p| !p.is_empty()) else {
            warn!(
                "Tileset '{}' for layer '{}' has no image",
                tileset.identifier, layer_name
            );
            return None;
        };

        if tileset.tile_grid_size <= 0 {
            warn!(
                "Tileset '{}' for layer '{}' has invalid tile size {}",
                tileset.identifier, layer_name, tileset.tile_grid_size
            );
            return None;
        }

        let config = self.config();
        Some(TileLayerSprite {
            image: normalize_tileset_path(rel_path, &config.tileset_path_prefixes),
            priority: config.tile_layer_priority_base + index as i32,
            offset: Vec2::ZERO,
            tiles: data
                .grid_tiles
                .iter()
                .map(|tile| convert_tile(tile, tileset.tile_grid_size))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{LdtkCorePlugin, LoadConfig};
    use bevy_ldtkmap_assets::prelude::LdtkProject;
    use serde_json::json;

    const PREFIXES: [&str; 3] = ["../", "assets/", "images/"];

    fn project() -> LdtkProject {
        let data = json!({
            "levels": [{
                "identifier": "Level_0",
                "pxWid": 64,
                "pxHei": 64,
                "layerInstances": [
                    { "__identifier": "Foreground", "__type": "Tiles",
                      "__tilesetDefUid": 1,
                      "gridTiles": [
                          { "src": [32, 16], "px": [0, 0], "t": 10, "f": 0 },
                          { "src": [0, 0], "px": [16, 0], "t": 0, "f": 3 }
                      ] },
                    { "__identifier": "Missing", "__type": "Tiles",
                      "__tilesetDefUid": 99, "gridTiles": [] },
                    { "__identifier": "NoImage", "__type": "Tiles",
                      "__tilesetDefUid": 2, "gridTiles": [] },
                    { "__identifier": "ZeroSize", "__type": "Tiles",
                      "__tilesetDefUid": 3, "gridTiles": [] },
                    { "__identifier": "Background", "__type": "Tiles",
                      "__tilesetDefUid": 4,
                      "gridTiles": [
                          { "src": [8, 8], "px": [8, 8], "t": 5, "f": 2 }
                      ] }
                ]
            }],
            "defs": {
                "tilesets": [
                    { "identifier": "Cave", "relPath": "../assets/images/cave.png",
                      "tileGridSize": 16, "uid": 1 },
                    { "identifier": "Atlas", "relPath": null, "tileGridSize": 16, "uid": 2 },
                    { "identifier": "Zero", "relPath": "zero.png", "tileGridSize": 0, "uid": 3 },
                    { "identifier": "Sky", "relPath": "images/sky.png", "tileGridSize": 8, "uid": 4 }
                ]
            }
        });
        LdtkProject::from_slice(&serde_json::to_vec(&data).unwrap()).unwrap()
    }

    fn sprites(world: &mut World) -> Vec<(String, TileLayerSprite)> {
        let mut sprites: Vec<_> = world
            .query::<(&Name, &TileLayerSprite)>()
            .iter(world)
            .map(|(name, sprite)| (name.to_string(), sprite.clone()))
            .collect();
        sprites.sort_by_key(|(_, sprite)| sprite.priority);
        sprites
    }

    #[test]
    fn test_flip_bits() {
        assert_eq!(TileFlip::from_bits(0), TileFlip { x: false, y: false });
        assert_eq!(TileFlip::from_bits(1), TileFlip { x: true, y: false });
        assert_eq!(TileFlip::from_bits(2), TileFlip { x: false, y: true });
        assert_eq!(TileFlip::from_bits(3), TileFlip { x: true, y: true });
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_tileset_path("../assets/images/a.png", &PREFIXES), "a.png");
        assert_eq!(normalize_tileset_path("assets/a.png", &PREFIXES), "a.png");
        assert_eq!(normalize_tileset_path("tiles/a.png", &PREFIXES), "tiles/a.png");
        // Each prefix is stripped once, in order
        assert_eq!(normalize_tileset_path("../../a.png", &PREFIXES), "../a.png");
        assert_eq!(
            normalize_tileset_path("images/assets/a.png", &PREFIXES),
            "assets/a.png"
        );
        assert_eq!(normalize_tileset_path::<&str>("../a.png", &[]), "../a.png");
    }

    #[test]
    fn test_layers_become_sprites() {
        let project = project();
        let mut world = World::new();

        let report = LevelLoader::new(&project).load_tiles("Level_0", &mut world);
        assert_eq!(report, LoadReport { processed: 2, skipped: 3 });

        let sprites = sprites(&mut world);
        assert_eq!(sprites.len(), 2);

        let (name, foreground) = &sprites[0];
        assert_eq!(name, "Tile Layer: Foreground");
        assert_eq!(foreground.image, "cave.png");
        assert_eq!(foreground.priority, 10);
        assert_eq!(foreground.offset, Vec2::ZERO);
        assert_eq!(
            foreground.tiles,
            vec![
                Tile {
                    source_x: 2,
                    source_y: 1,
                    tile_id: 10,
                    flipped_x: false,
                    flipped_y: false,
                    x: 0.0,
                    y: 0.0,
                },
                Tile {
                    source_x: 0,
                    source_y: 0,
                    tile_id: 0,
                    flipped_x: true,
                    flipped_y: true,
                    x: 16.0,
                    y: 0.0,
                },
            ]
        );

        // Skipped layers don't use up priorities
        let (name, background) = &sprites[1];
        assert_eq!(name, "Tile Layer: Background");
        assert_eq!(background.image, "sky.png");
        assert_eq!(background.priority, 11);
        assert_eq!(background.tiles[0].source_x, 1);
        assert!(background.tiles[0].flipped_y);
    }

    #[test]
    fn test_layer_entity_at_origin() {
        let project = project();
        let mut world = World::new();
        LevelLoader::new(&project).load_tiles("Level_0", &mut world);

        for transform in world.query_filtered::<&Transform, With<TileLayerSprite>>().iter(&world) {
            assert_eq!(*transform, Transform::IDENTITY);
        }
    }

    #[test]
    fn test_custom_config() {
        let project = project();
        let mut world = World::new();
        let config = LoadConfig::default()
            .with_tile_layer_priority_base(0)
            .with_tileset_path_prefixes(["../"]);

        LevelLoader::new(&project)
            .with_config(config)
            .load_tiles("Level_0", &mut world);

        let sprites = sprites(&mut world);
        assert_eq!(sprites[0].1.image, "assets/images/cave.png");
        assert_eq!(sprites[0].1.priority, 0);
        assert_eq!(sprites[1].1.priority, 1);
    }

    #[test]
    fn test_config_from_plugin_resource() {
        let project = project();
        let mut app = App::new();
        app.add_plugins(LdtkCorePlugin::new(
            LoadConfig::default().with_tile_layer_priority_base(0),
        ));

        let loader = LevelLoader::from_world(&project, app.world());
        assert_eq!(loader.config().tile_layer_priority_base, 0);
        loader.load_tiles("Level_0", app.world_mut());

        let sprites = sprites(app.world_mut());
        assert_eq!(sprites[0].1.priority, 0);
        assert_eq!(sprites[1].1.priority, 1);
    }

    #[test]
    fn test_config_without_resource_is_default() {
        let project = project();
        let world = World::new();
        let loader = LevelLoader::from_world(&project, &world);
        assert_eq!(*loader.config(), LoadConfig::default());
    }

    #[test]
    fn test_missing_level_is_a_no_op() {
        let project = project();
        let mut world = World::new();
        let report = LevelLoader::new(&project).load_tiles("Nope", &mut world);
        assert!(report.is_empty());
        assert!(sprites(&mut world).is_empty());
    }
}
