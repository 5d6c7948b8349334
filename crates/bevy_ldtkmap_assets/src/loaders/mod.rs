//! Bevy asset loaders for LDtk files.

pub mod project;
