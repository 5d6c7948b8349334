//! Entity instances and their typed field accessors.
//!
//! Field values are kept as raw JSON and decoded lazily when a caller asks for
//! a concrete type. Each `get_*_field` accessor has an `*_field_or` variant that
//! falls back to a caller-supplied default instead of failing.

use bevy::prelude::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::FieldError;
use crate::level::null_as_empty;

/// An entity placed in an `Entities` layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityInstance {
    /// Entity type identifier (e.g. `"Player"`), used for handler dispatch.
    #[serde(rename = "__identifier")]
    pub identifier: String,

    /// Unique instance id.
    #[serde(default)]
    pub iid: String,

    /// Pixel position `[x, y]` within the level.
    #[serde(default)]
    pub px: [i32; 2],

    #[serde(default)]
    pub width: i32,

    #[serde(default)]
    pub height: i32,

    /// Custom fields in declaration order.
    #[serde(default, rename = "fieldInstances", deserialize_with = "null_as_empty")]
    pub field_instances: Vec<FieldInstance>,
}

/// A single custom field on an entity instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,

    /// LDtk declared type (e.g. `"Int"`, `"String"`, `"Array<Point>"`).
    #[serde(rename = "__type", default)]
    pub field_type: String,

    /// Raw encoded value.
    #[serde(rename = "__value", default)]
    pub value: serde_json::Value,
}

impl EntityInstance {
    /// Pixel position within the level.
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.px[0], self.px[1])
    }

    /// Pixel size of the instance.
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Get a field by name (first match wins).
    pub fn field(&self, name: &str) -> Option<&FieldInstance> {
        self.field_instances.iter().find(|f| f.identifier == name)
    }

    /// Decode a field into any deserializable type.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let targets: Vec<String> = entity.get_field_as("targets")?;
    /// ```
    pub fn get_field_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, FieldError> {
        let field = self
            .field(name)
            .ok_or_else(|| FieldError::NotFound(name.to_string()))?;

        T::deserialize(&field.value).map_err(|source| FieldError::Decode {
            name: name.to_string(),
            source,
        })
    }

    pub fn get_string_field(&self, name: &str) -> Result<String, FieldError> {
        self.get_field_as(name)
    }

    pub fn get_int_field(&self, name: &str) -> Result<i64, FieldError> {
        self.get_field_as(name)
    }

    pub fn get_float_field(&self, name: &str) -> Result<f32, FieldError> {
        self.get_field_as(name)
    }

    pub fn get_bool_field(&self, name: &str) -> Result<bool, FieldError> {
        self.get_field_as(name)
    }

    /// String field, or `default` if missing or not a string.
    pub fn string_field_or(&self, name: &str, default: &str) -> String {
        self.get_string_field(name)
            .unwrap_or_else(|_| default.to_string())
    }

    /// Int field, or `default` if missing or not an integer.
    pub fn int_field_or(&self, name: &str, default: i64) -> i64 {
        self.get_int_field(name).unwrap_or(default)
    }

    /// Float field, or `default` if missing or not a number.
    pub fn float_field_or(&self, name: &str, default: f32) -> f32 {
        self.get_float_field(name).unwrap_or(default)
    }

    /// Bool field, or `default` if missing or not a boolean.
    pub fn bool_field_or(&self, name: &str, default: bool) -> bool {
        self.get_bool_field(name).unwrap_or(default)
    }
}
