//! Parsed level data and layer classification.
//!
//! Every level is decoded once when the project is parsed. Its raw layer list is
//! split into three buckets keyed by layer identifier:
//!
//! - `Entities` layers → [`EntityInstance`] lists
//! - `IntGrid` layers → row-major [`Grid`]s
//! - `Tiles` layers with a tileset → [`TileLayerData`]
//!
//! Layers of any other type are dropped. The buckets keep layer declaration
//! order so loaders iterate them deterministically.

use bevy::prelude::*;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::entity::EntityInstance;

/// Decode a list that LDtk may write as `null`, treating `null` as empty.
///
/// Projects saved with separate level files store `"layerInstances": null` in
/// the level headers.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Kind of a classified layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Entities,
    IntGrid,
    Tiles,
}

impl LayerKind {
    /// Map an LDtk `__type` tag to a layer kind.
    ///
    /// `AutoLayer` and unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Entities" => Some(LayerKind::Entities),
            "IntGrid" => Some(LayerKind::IntGrid),
            "Tiles" => Some(LayerKind::Tiles),
            _ => None,
        }
    }
}

/// Raw layer instance as stored in a level block.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,

    /// Declared layer type tag.
    #[serde(rename = "__type")]
    pub layer_type: String,

    /// Width in cells.
    #[serde(rename = "__cWid", default)]
    pub c_wid: i32,

    /// Height in cells.
    #[serde(rename = "__cHei", default)]
    pub c_hei: i32,

    /// Cell size in pixels.
    #[serde(rename = "__gridSize", default)]
    pub grid_size: i32,

    /// Flat, row-major IntGrid values.
    #[serde(rename = "intGridCsv", default, deserialize_with = "null_as_empty")]
    pub int_grid_csv: Vec<i32>,

    #[serde(rename = "__tilesetDefUid", default)]
    pub tileset_def_uid: Option<i32>,

    #[serde(rename = "__tilesetRelPath", default)]
    pub tileset_rel_path: Option<String>,

    #[serde(rename = "entityInstances", default, deserialize_with = "null_as_empty")]
    pub entity_instances: Vec<EntityInstance>,

    #[serde(rename = "gridTiles", default, deserialize_with = "null_as_empty")]
    pub grid_tiles: Vec<GridTile>,
}

/// A tile placed in a `Tiles` layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridTile {
    /// Pixel coordinates of the tile in the tileset image.
    pub src: [i32; 2],

    /// Pixel coordinates of the tile in the level.
    pub px: [i32; 2],

    /// Tile id within the tileset.
    pub t: i32,

    /// Flip bitmask: bit 0 = horizontal, bit 1 = vertical.
    #[serde(default)]
    pub f: i32,
}

/// Tile layer contents, aggregated per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerData {
    pub tileset_def_uid: i32,
    pub tileset_rel_path: String,
    pub grid_tiles: Vec<GridTile>,
}

/// Rectangular grid of IntGrid values.
///
/// `rows[y][x]` is defined for every `0 <= y < height` and `0 <= x < width`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<i32>>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Short rows are zero-filled to the width of the longest row.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows: Vec<Vec<i32>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, 0);
                row
            })
            .collect();
        Self {
            width,
            height: rows.len(),
            rows,
        }
    }

    /// Reshape a flat CSV array into `height` rows of `width` cells.
    ///
    /// Cells past the end of `csv` are zero.
    pub fn from_csv(csv: &[i32], width: usize, height: usize) -> Self {
        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| csv.get(y * width + x).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Cell value, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        self.rows.get(y)?.get(x).copied()
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

/// A level decoded and classified at project parse time.
///
/// Cached for the lifetime of the project and never mutated after parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedLevel {
    pub identifier: String,

    #[serde(rename = "pxWid", default)]
    pub px_wid: i32,

    #[serde(rename = "pxHei", default)]
    pub px_hei: i32,

    #[serde(rename = "layerInstances", default, deserialize_with = "null_as_empty")]
    pub layer_instances: Vec<LayerInstance>,

    /// Entity instances per `Entities` layer.
    #[serde(skip)]
    pub entity_layers: HashMap<String, Vec<EntityInstance>>,

    /// Grid per `IntGrid` layer.
    #[serde(skip)]
    pub int_grids: HashMap<String, Grid>,

    /// Tile data per `Tiles` layer that references a tileset.
    #[serde(skip)]
    pub tile_layers: HashMap<String, TileLayerData>,

    /// Classified layer identifiers in declaration order.
    #[serde(skip)]
    order: Vec<(String, LayerKind)>,

    /// The raw level block this level was decoded from.
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl ParsedLevel {
    /// Decode a level block and classify its layers.
    pub fn from_value(raw: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut level = ParsedLevel::deserialize(raw)?;
        level.raw = raw.clone();
        level.classify();
        Ok(level)
    }

    /// Split raw layer instances into the typed buckets.
    pub fn classify(&mut self) {
        self.entity_layers.clear();
        self.int_grids.clear();
        self.tile_layers.clear();
        self.order.clear();

        for layer in &self.layer_instances {
            let Some(kind) = LayerKind::from_tag(&layer.layer_type) else {
                debug!(
                    "Level '{}': ignoring layer '{}' of type '{}'",
                    self.identifier, layer.identifier, layer.layer_type
                );
                continue;
            };

            if self.layer_kind(&layer.identifier).is_some() {
                warn!(
                    "Level '{}': duplicate layer identifier '{}', keeping the first",
                    self.identifier, layer.identifier
                );
                continue;
            }

            let id = layer.identifier.clone();
            match kind {
                LayerKind::Entities => {
                    self.entity_layers
                        .insert(id.clone(), layer.entity_instances.clone());
                }
                LayerKind::IntGrid => {
                    let grid = Grid::from_csv(
                        &layer.int_grid_csv,
                        layer.c_wid.max(0) as usize,
                        layer.c_hei.max(0) as usize,
                    );
                    self.int_grids.insert(id.clone(), grid);
                }
                LayerKind::Tiles => {
                    let Some(uid) = layer.tileset_def_uid else {
                        continue;
                    };
                    self.tile_layers.insert(
                        id.clone(),
                        TileLayerData {
                            tileset_def_uid: uid,
                            tileset_rel_path: layer.tileset_rel_path.clone().unwrap_or_default(),
                            grid_tiles: layer.grid_tiles.clone(),
                        },
                    );
                }
            }
            self.order.push((id, kind));
        }
    }

    /// Which bucket a layer was classified into, if any.
    pub fn layer_kind(&self, layer: &str) -> Option<LayerKind> {
        self.order
            .iter()
            .find(|(id, _)| id == layer)
            .map(|(_, kind)| *kind)
    }

    /// Cell size of the first layer instance with this identifier.
    ///
    /// Returns `0` if no such layer exists.
    pub fn grid_size_of(&self, layer: &str) -> i32 {
        self.layer_instances
            .iter()
            .find(|l| l.identifier == layer)
            .map_or(0, |l| l.grid_size)
    }

    fn ordered(&self, kind: LayerKind) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|(id, _)| id.as_str())
    }

    /// Iterate entity layers in declaration order.
    pub fn iter_entity_layers(&self) -> impl Iterator<Item = (&str, &[EntityInstance])> {
        self.ordered(LayerKind::Entities)
            .filter_map(|id| Some((id, self.entity_layers.get(id)?.as_slice())))
    }

    /// Iterate IntGrid layers in declaration order.
    pub fn iter_int_grids(&self) -> impl Iterator<Item = (&str, &Grid)> {
        self.ordered(LayerKind::IntGrid)
            .filter_map(|id| Some((id, self.int_grids.get(id)?)))
    }

    /// Iterate tile layers in declaration order.
    pub fn iter_tile_layers(&self) -> impl Iterator<Item = (&str, &TileLayerData)> {
        self.ordered(LayerKind::Tiles)
            .filter_map(|id| Some((id, self.tile_layers.get(id)?)))
    }
}
