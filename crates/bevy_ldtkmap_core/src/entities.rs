//! Entity loading: dispatch entity instances to user handlers by identifier.

use bevy::ecs::error::Result;
use bevy::prelude::*;
use bevy_ldtkmap_assets::prelude::EntityInstance;
use std::collections::HashMap;
use std::fmt;

use crate::error::LoadError;
use crate::loader::{LevelLoader, LoadReport};

/// Boxed entity handler.
pub type EntityHandler = Box<dyn Fn(&EntityInstance, &mut World) -> Result + Send + Sync>;

/// Maps entity identifiers (e.g. `"Player"`) to spawn handlers.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_core::prelude::*;
///
/// let mut registry = EntityRegistry::new();
/// registry.register("Coin", |entity, world| {
///     let value = entity.int_field_or("value", 1);
///     let pos = entity.position().as_vec2();
///     world.spawn((
///         Name::new(format!("Coin ({value})")),
///         Transform::from_xyz(pos.x, pos.y, 0.0),
///     ));
///     Ok(())
/// });
/// ```
#[derive(Resource, Default)]
pub struct EntityRegistry {
    handlers: HashMap<String, EntityHandler>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for `identifier`.
    pub fn register<F>(&mut self, identifier: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&EntityInstance, &mut World) -> Result + Send + Sync + 'static,
    {
        self.handlers.insert(identifier.into(), Box::new(handler));
        self
    }

    /// Builder method: register a handler.
    pub fn with_handler<F>(mut self, identifier: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&EntityInstance, &mut World) -> Result + Send + Sync + 'static,
    {
        self.register(identifier, handler);
        self
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.handlers.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&EntityHandler> {
        self.handlers.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("identifiers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LevelLoader<'_> {
    /// Run the registered handler for every entity instance of a level.
    ///
    /// Layers are visited in declaration order, instances in file order.
    /// Instances without a handler are logged and counted as skipped. The
    /// first handler error stops loading.
    pub fn load_entities(
        &self,
        level_name: &str,
        world: &mut World,
        registry: &EntityRegistry,
    ) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        let Some(level) = self.level(level_name) else {
            return Ok(report);
        };

        for (layer_name, instances) in level.iter_entity_layers() {
            for instance in instances {
                let Some(handler) = registry.get(&instance.identifier) else {
                    warn!(
                        "No handler registered for entity type '{}' in layer '{}'",
                        instance.identifier, layer_name
                    );
                    report.skipped += 1;
                    continue;
                };

                handler(instance, world).map_err(|reason| LoadError::Handler {
                    identifier: instance.identifier.clone(),
                    iid: instance.iid.clone(),
                    reason,
                })?;
                report.processed += 1;
            }
        }

        debug!(
            "Loaded entities for level '{}': {} handled, {} skipped",
            level_name, report.processed, report.skipped
        );
        Ok(report)
    }
}
