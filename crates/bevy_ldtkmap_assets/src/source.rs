//! Project source selection: embedded assets or the live filesystem.
//!
//! Production builds ship the project file inside the binary (or web bundle),
//! while development builds read it straight from disk so edits in LDtk show
//! up without recompiling. [`SourceMode::detect`] picks between the two from an
//! environment variable, and always picks embedded assets on `wasm32`.

use bevy::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only file table used in embedded mode.
pub trait AssetSource {
    /// Read the whole file stored under `name`.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// In-memory assets, usually filled with `include_bytes!`.
///
/// # Example
///
/// ```rust,ignore
/// let assets = EmbeddedAssets::new()
///     .with_file("data.ldtk", include_bytes!("../assets/world.ldtk"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssets {
    files: HashMap<String, &'static [u8]>,
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add a file.
    pub fn with_file(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.files.insert(name.into(), bytes);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}

impl AssetSource for EmbeddedAssets {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files.get(name).map(|bytes| bytes.to_vec()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("embedded asset '{}' not found", name),
            )
        })
    }
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirectorySource {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(name))
    }
}

/// Where the project file is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Read [`SourceConfig::embedded_file`] from an [`AssetSource`].
    Embedded,
    /// Read the caller-given path from disk.
    Filesystem,
}

impl SourceMode {
    /// Pick a mode from the environment.
    ///
    /// Embedded when `config.env_var` equals `config.production_value`, or when
    /// compiled for `wasm32`. Filesystem otherwise.
    pub fn detect(config: &SourceConfig) -> Self {
        let env_value = std::env::var(&config.env_var).ok();
        Self::resolve(env_value.as_deref(), cfg!(target_arch = "wasm32"), config)
    }

    /// Mode for an explicit environment value and platform.
    pub fn resolve(env_value: Option<&str>, is_wasm: bool, config: &SourceConfig) -> Self {
        if is_wasm || env_value == Some(config.production_value.as_str()) {
            SourceMode::Embedded
        } else {
            SourceMode::Filesystem
        }
    }
}

/// Configuration for project source selection.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Environment variable consulted by [`SourceMode::detect`].
    ///
    /// Default: `"LDTK_ENV"`
    pub env_var: String,

    /// Value of `env_var` that selects embedded mode.
    ///
    /// Default: `"production"`
    pub production_value: String,

    /// File name read from the embedded source.
    ///
    /// Default: `"data.ldtk"`
    pub embedded_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            env_var: "LDTK_ENV".to_string(),
            production_value: "production".to_string(),
            embedded_file: "data.ldtk".to_string(),
        }
    }
}

impl SourceConfig {
    /// Builder method: set the environment variable name.
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Builder method: set the production value.
    pub fn with_production_value(mut self, value: impl Into<String>) -> Self {
        self.production_value = value.into();
        self
    }

    /// Builder method: set the embedded file name.
    pub fn with_embedded_file(mut self, name: impl Into<String>) -> Self {
        self.embedded_file = name.into();
        self
    }
}
