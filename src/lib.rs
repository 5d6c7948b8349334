//! # `bevy_ldtkmap`
//!
//! LDtk level loader and integration for Bevy.
//!
//! This is a unified meta-crate that combines all `bevy_ldtkmap_*` sub-crates with convenient
//! feature flags for easy integration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_ldtkmap::prelude::*;
//!
//! #[derive(Component, Clone)]
//! struct Wall;
//!
//! fn load_level(world: &mut World) -> Result<(), BevyError> {
//!     let embedded = EmbeddedAssets::new();
//!     let project = LdtkProject::parse_in_world(&embedded, "assets/world.ldtk", world)?;
//!
//!     let registry = EntityRegistry::new().with_handler("Player", |entity, world| {
//!         let pos = entity.position().as_vec2();
//!         world.spawn((Name::new("Player"), Transform::from_xyz(pos.x, pos.y, 0.0)));
//!         Ok(())
//!     });
//!
//!     let loader = LevelLoader::from_world(&project, world);
//!     loader.load_entities("Level_0", world, &registry)?;
//!     loader.load_int_grid("Level_0", world, &[&BundleTarget::new(Wall)])?;
//!     loader.load_tiles("Level_0", world);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: Includes `avian`
//! - **avian**: Collider generation for IntGrid layers using `avian2d`
//!
//! ## Architecture
//!
//! This crate is organized into 3 layers:
//!
//! - **Layer 1** ([`assets`]): Pure parsing of LDtk project files (`.ldtk`)
//! - **Layer 2** ([`core`]): ECS population from parsed levels
//! - **Layer 3** (optional): Integration plugins
//!   - [`avian`]: Physics colliders with `Avian2D`
//!
//! ## Using Individual Crates
//!
//! You can also use the individual sub-crates directly if you prefer more control:
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_ldtkmap_assets::LdtkAssetsPlugin;
//! use bevy_ldtkmap_core::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(LdtkAssetsPlugin::default())
//!     .add_plugins(LdtkCorePlugin::default())
//!     .run();
//! ```

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_ldtkmap_assets as assets;
pub use bevy_ldtkmap_core as core;

#[cfg(feature = "avian")]
pub use bevy_ldtkmap_avian as avian;

/// Unified prelude for `bevy_ldtkmap`
///
/// This module re-exports the most commonly used types from all sub-crates
/// for convenient access.
pub mod prelude {
    // Core functionality (always available)
    pub use crate::assets::prelude::*;
    pub use crate::core::prelude::*;

    // Layer 3 plugins (feature-gated)
    #[cfg(feature = "avian")]
    pub use crate::avian::prelude::*;

    // Unified plugin
    pub use crate::plugin::LdtkmapPlugin;
}
