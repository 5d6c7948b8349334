//! IntGrid loading: spawn one entity per merged rectangle.
//!
//! Targets are positional: `targets[0]` receives rectangles of cells with
//! value `1`, `targets[1]` value `2`, and so on. Values without a target are
//! ignored.

use bevy::ecs::error::Result;
use bevy::prelude::*;

use crate::components::CollisionRect;
use crate::error::LoadError;
use crate::loader::{LevelLoader, LoadReport};
use crate::merge::merge_rectangles;

/// Receives merged IntGrid rectangles and spawns whatever they stand for.
///
/// Implemented for closures `Fn(&mut World, Vec2, Vec2) -> Result`, where the
/// vectors are the rectangle center and size in level pixels.
pub trait IntGridTarget: Send + Sync {
    fn spawn(&self, world: &mut World, center: Vec2, size: Vec2) -> Result;
}

impl<F> IntGridTarget for F
where
    F: Fn(&mut World, Vec2, Vec2) -> Result + Send + Sync,
{
    fn spawn(&self, world: &mut World, center: Vec2, size: Vec2) -> Result {
        self(world, center, size)
    }
}

/// Target that spawns `(Transform, CollisionRect, B)` for every rectangle.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_ldtkmap_core::prelude::*;
///
/// #[derive(Component, Clone)]
/// struct Wall;
///
/// let walls = BundleTarget::new((Wall, Name::new("Wall")));
/// ```
#[derive(Debug, Clone)]
pub struct BundleTarget<B> {
    bundle: B,
}

impl<B: Bundle + Clone> BundleTarget<B> {
    pub fn new(bundle: B) -> Self {
        Self { bundle }
    }
}

impl<B: Bundle + Clone> IntGridTarget for BundleTarget<B> {
    fn spawn(&self, world: &mut World, center: Vec2, size: Vec2) -> Result {
        world.spawn((
            Transform::from_xyz(center.x, center.y, 0.0),
            CollisionRect::new(size),
            self.bundle.clone(),
        ));
        Ok(())
    }
}

impl LevelLoader<'_> {
    /// Spawn merged rectangles for every IntGrid layer of a level.
    ///
    /// For each layer, in declaration order, and each value `v` in
    /// `1..=targets.len()`, cells equal to `v` are merged and every rectangle
    /// is handed to `targets[v - 1]` at its center. A layer without a cell
    /// size is logged and skipped. The first target error stops loading.
    pub fn load_int_grid(
        &self,
        level_name: &str,
        world: &mut World,
        targets: &[&dyn IntGridTarget],
    ) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        let Some(level) = self.level(level_name) else {
            return Ok(report);
        };

        for (layer_name, grid) in level.iter_int_grids() {
            let cell_size = level.grid_size_of(layer_name);
            if cell_size <= 0 {
                warn!("Couldn't find grid size for layer '{}'", layer_name);
                report.skipped += 1;
                continue;
            }

            for (index, target) in targets.iter().enumerate() {
                let value = index as i32 + 1;
                for rect in merge_rectangles(grid, value, cell_size) {
                    target
                        .spawn(world, rect.center(), rect.size())
                        .map_err(|reason| LoadError::Target {
                            layer: layer_name.to_string(),
                            value,
                            reason,
                        })?;
                    report.processed += 1;
                }
            }
        }

        debug!(
            "Loaded IntGrid for level '{}': {} rectangles, {} layers skipped",
            level_name, report.processed, report.skipped
        );
        Ok(report)
    }
}
