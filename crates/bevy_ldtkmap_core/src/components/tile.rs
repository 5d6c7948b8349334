//! Tile layer components.
//!
//! Individual tiles are NOT spawned as entities. Each tile layer becomes one
//! entity carrying a `TileLayerSprite` that lists every tile it draws.

use bevy::prelude::*;

/// A whole tile layer drawn from a single tileset image.
///
/// Rendering plugins decide how to draw this (sprites, a tilemap crate, etc.).
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_ldtkmap_core::components::TileLayerSprite;
/// fn count_tiles(layers: Query<&TileLayerSprite>) {
///     for layer in &layers {
///         info!("{} draws {} tiles", layer.image, layer.tiles.len());
///     }
/// }
/// ```
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TileLayerSprite {
    /// Tileset image path, relative to the asset root
    pub image: String,

    /// Draw priority; higher layers are drawn later
    pub priority: i32,

    /// Offset of the whole layer
    pub offset: Vec2,

    /// Tiles in the order LDtk lists them
    pub tiles: Vec<Tile>,
}

/// One tile within a [`TileLayerSprite`].
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Tile {
    /// Source column in the tileset, in tiles
    pub source_x: i32,
    /// Source row in the tileset, in tiles
    pub source_y: i32,
    pub tile_id: i32,
    pub flipped_x: bool,
    pub flipped_y: bool,
    /// Destination position in level pixels
    pub x: f32,
    pub y: f32,
}

impl Tile {
    /// Destination position as a vector.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
