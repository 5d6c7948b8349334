//! Components spawned by the `bevy_ldtkmap_core` loaders.

pub mod collision;
pub mod tile;

pub use collision::CollisionRect;
pub use tile::{Tile, TileLayerSprite};
