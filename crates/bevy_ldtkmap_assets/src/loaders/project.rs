use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    prelude::*,
    tasks::ConditionalSendFuture,
};

use crate::error::ProjectError;
use crate::project::LdtkProject;

/// Asset loader for LDtk projects (.ldtk files)
///
/// Reads the whole file and runs the same parse as [`LdtkProject::from_slice`]:
/// every level is decoded and classified while the asset loads, so systems see
/// a ready-to-query project once the handle resolves.
///
/// Tileset images are not loaded as dependencies. Tile layers only carry the
/// normalized image path; rendering decides what to do with it.
#[derive(Default)]
pub struct LdtkProjectLoader;

impl AssetLoader for LdtkProjectLoader {
    type Asset = LdtkProject;
    type Settings = ();
    type Error = ProjectError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let project = LdtkProject::from_slice(&bytes)?;
            debug!(
                "Loaded LDtk project {:?} with {} levels",
                load_context.asset_path(),
                project.level_names().count()
            );

            Ok(project)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["ldtk"]
    }
}
