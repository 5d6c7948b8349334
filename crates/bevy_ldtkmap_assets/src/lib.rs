//! # `bevy_ldtkmap_assets`
//!
//! Layer 1 of `bevy_ldtkmap`: pure data loading for LDtk project files.
//!
//! This crate parses an `.ldtk` JSON export into an immutable [`LdtkProject`],
//! pre-classifying every level's layers into entity, IntGrid and tile buckets.
//! It has no ECS concerns; spawning lives in `bevy_ldtkmap_core`.
//!
//! ## Loading a project directly
//!
//! ```rust,no_run
//! use bevy_ldtkmap_assets::prelude::*;
//!
//! let embedded = EmbeddedAssets::new().with_file("data.ldtk", b"{\"levels\": []}");
//! let project = LdtkProject::parse(&embedded, "assets/world.ldtk").unwrap();
//! println!("{} levels", project.level_names().count());
//! ```
//!
//! ## Loading through the asset server
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_ldtkmap_assets::prelude::*;
//!
//! fn load(asset_server: Res<AssetServer>) {
//!     let _handle: Handle<LdtkProject> = asset_server.load("world.ldtk");
//! }
//! ```

pub mod entity;
pub mod error;
pub mod level;
pub mod loaders;
pub mod plugin;
pub mod project;
pub mod source;

// Re-export the plugin for convenience
pub use plugin::LdtkAssetsPlugin;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entity::{EntityInstance, FieldInstance};
    pub use crate::error::{FieldError, ProjectError};
    pub use crate::level::{Grid, GridTile, LayerInstance, LayerKind, ParsedLevel, TileLayerData};
    pub use crate::loaders::project::LdtkProjectLoader;
    pub use crate::plugin::LdtkAssetsPlugin;
    pub use crate::project::{LdtkProject, TilesetDef};
    pub use crate::source::{
        AssetSource, DirectorySource, EmbeddedAssets, SourceConfig, SourceMode,
    };
}
