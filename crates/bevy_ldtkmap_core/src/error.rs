//! Errors raised while loading a level into the world.

use bevy::ecs::error::BevyError;
use thiserror::Error;

/// A user callback failed and loading stopped.
///
/// Entities and rectangles spawned before the failure stay in the world.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An entity handler returned an error.
    #[error("Handler for entity '{identifier}' ({iid}) failed: {reason}")]
    Handler {
        identifier: String,
        iid: String,
        reason: BevyError,
    },

    /// An IntGrid target returned an error.
    #[error("IntGrid target for value {value} in layer '{layer}' failed: {reason}")]
    Target {
        layer: String,
        value: i32,
        reason: BevyError,
    },
}
