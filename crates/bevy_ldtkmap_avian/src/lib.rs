//! `Avian2D` physics integration for `bevy_ldtkmap`.
//!
//! This crate turns merged IntGrid rectangles into `Avian2D` colliders. It
//! plugs into the Layer 2 IntGrid loader as an [`IntGridTarget`]:
//! [`ColliderTarget`] spawns one rigid body per merged rectangle.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_ldtkmap_assets::prelude::*;
//! use bevy_ldtkmap_core::prelude::*;
//! use bevy_ldtkmap_avian::prelude::*;
//!
//! fn load_walls(project: &LdtkProject, world: &mut World) -> Result<(), LoadError> {
//!     // Configured by the resource LdtkAvianPlugin inserted
//!     let walls = ColliderTarget::from_world(world);
//!     let hazards = ColliderTarget::new(ColliderConfig::default().with_is_sensor(true));
//!
//!     // IntGrid value 1 = walls, 2 = hazards
//!     let loader = LevelLoader::from_world(project, world);
//!     loader.load_int_grid("Level_0", world, &[&walls, &hazards])?;
//!     Ok(())
//! }
//! ```
//!
//! [`IntGridTarget`]: bevy_ldtkmap_core::intgrid::IntGridTarget

pub mod config;
pub mod plugin;
pub mod target;

pub mod prelude {
    //! Common imports for `bevy_ldtkmap_avian` users.

    pub use crate::config::ColliderConfig;
    pub use crate::plugin::LdtkAvianPlugin;
    pub use crate::target::{ColliderBundle, ColliderTarget};
}

pub use config::ColliderConfig;
pub use plugin::LdtkAvianPlugin;
pub use target::ColliderTarget;
