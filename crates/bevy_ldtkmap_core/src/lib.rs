//! # `bevy_ldtkmap_core`
//!
//! Entity spawning backbone for `bevy_ldtkmap`. Converts parsed LDtk levels
//! into ECS entities: entity instances go through user handlers, IntGrid cells
//! are merged into rectangles, and tile layers become one entity each.
//!
//! **This crate does NOT handle rendering or physics** - those are Layer 3
//! concerns that consume the components spawned here.
//!
//! ## Architecture
//!
//! Layer 2 (this crate) sits between:
//! - **Layer 1** (`bevy_ldtkmap_assets`): Pure project parsing
//! - **Layer 3** (`bevy_ldtkmap_avian`, etc.): Physics and rendering integrations
//!
//! ## What Layer 2 Provides
//!
//! 1. **Entity dispatch**: `EntityRegistry` maps entity identifiers to handlers
//! 2. **Collision rectangles**: greedy merging of IntGrid cells, handed to `IntGridTarget`s
//! 3. **Tile layers**: one `TileLayerSprite` per layer (NOT one entity per tile)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_ldtkmap_assets::prelude::*;
//! use bevy_ldtkmap_core::prelude::*;
//!
//! #[derive(Component, Clone)]
//! struct Wall;
//!
//! fn load_level(project: &LdtkProject, world: &mut World) -> Result<(), LoadError> {
//!     let registry = EntityRegistry::new().with_handler("Player", |entity, world| {
//!         let pos = entity.position().as_vec2();
//!         world.spawn((Name::new("Player"), Transform::from_xyz(pos.x, pos.y, 0.0)));
//!         Ok(())
//!     });
//!     let walls = BundleTarget::new(Wall);
//!
//!     let loader = LevelLoader::from_world(project, world);
//!     loader.load_entities("Level_0", world, &registry)?;
//!     loader.load_int_grid("Level_0", world, &[&walls])?;
//!     loader.load_tiles("Level_0", world);
//!     Ok(())
//! }
//! ```

pub mod components;
pub mod debug;
pub mod entities;
pub mod error;
pub mod intgrid;
pub mod loader;
pub mod merge;
pub mod plugin;
pub mod tiles;

pub mod prelude {
    //! Common imports for `bevy_ldtkmap_core` users.

    pub use crate::components::{CollisionRect, Tile, TileLayerSprite};
    pub use crate::debug::DebugCollisionRects;
    pub use crate::entities::{EntityHandler, EntityRegistry};
    pub use crate::error::LoadError;
    pub use crate::intgrid::{BundleTarget, IntGridTarget};
    pub use crate::loader::{LevelLoader, LoadReport};
    pub use crate::merge::{MergedRect, merge_rectangles};
    pub use crate::plugin::{LdtkCorePlugin, LoadConfig};
    pub use crate::tiles::{TileFlip, normalize_tileset_path};
}

// Re-export plugin types at crate root for convenience
pub use plugin::{LdtkCorePlugin, LoadConfig};
