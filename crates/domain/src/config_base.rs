//! Config entity base — the `name` + `profiles` contract shared by every
//! configuration entity, and the field helpers concrete entities parse with.
//!
//! An entity with no profiles is always active. An entity with profiles is
//! active only while at least one of them is in the active profile set.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::EntityError;

/// JSON object backing a configuration entity.
pub type JsonObject = Map<String, Value>;

/// Common data every configuration entity carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBase {
    name: String,
    profiles: Vec<String>,
}

impl ConfigBase {
    /// Parse `name` (required, non-empty) and `profiles` (optional) from a
    /// JSON fragment.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] naming the field when the fragment is not
    /// an object, `name` is missing, empty or not a string, or `profiles`
    /// is not an array of strings.
    pub fn from_json(entity: &'static str, json: &Value) -> Result<Self, EntityError> {
        Self::from_object(entity, as_object(entity, json)?)
    }

    /// Same as [`from_json`](Self::from_json) for an already unwrapped object.
    ///
    /// # Errors
    ///
    /// See [`from_json`](Self::from_json).
    pub fn from_object(entity: &'static str, obj: &JsonObject) -> Result<Self, EntityError> {
        let name = required_str(entity, obj, "name")?;
        if name.is_empty() {
            return Err(EntityError::EmptyField {
                entity,
                field: "name",
            });
        }
        let profiles = optional_str_list(entity, obj, "profiles")?;
        Ok(Self { name, profiles })
    }

    /// Stable identifier of the entity.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Profiles the entity is restricted to; empty means always included.
    #[must_use]
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }
}

/// Read-only view shared by all configuration entities.
pub trait ConfigEntity {
    /// The embedded common data.
    fn base(&self) -> &ConfigBase;

    /// Stable identifier of the entity.
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Profiles the entity is restricted to.
    fn profiles(&self) -> &[String] {
        self.base().profiles()
    }

    /// Whether the entity participates given the currently active profiles.
    fn is_active(&self, active: &HashSet<String>) -> bool {
        profiles_match(self.profiles(), active)
    }
}

impl ConfigEntity for ConfigBase {
    fn base(&self) -> &ConfigBase {
        self
    }
}

/// `true` when `profiles` is empty or shares at least one entry with `active`.
#[must_use]
pub fn profiles_match(profiles: &[String], active: &HashSet<String>) -> bool {
    profiles.is_empty() || profiles.iter().any(|p| active.contains(p))
}

/// Unwrap a fragment into its JSON object.
///
/// # Errors
///
/// Returns [`EntityError::NotAnObject`] for any other JSON value.
pub fn as_object<'a>(entity: &'static str, json: &'a Value) -> Result<&'a JsonObject, EntityError> {
    json.as_object()
        .ok_or(EntityError::NotAnObject { entity })
}

/// Read a mandatory string field.
///
/// # Errors
///
/// Returns [`EntityError::MissingField`] or [`EntityError::InvalidField`].
pub fn required_str(
    entity: &'static str,
    obj: &JsonObject,
    field: &'static str,
) -> Result<String, EntityError> {
    let value = obj
        .get(field)
        .ok_or(EntityError::MissingField { entity, field })?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(EntityError::InvalidField {
            entity,
            field,
            expected: "a string",
        })
}

/// Read a mandatory array-of-strings field.
///
/// # Errors
///
/// Returns [`EntityError::MissingField`] or [`EntityError::InvalidField`].
pub fn required_str_list(
    entity: &'static str,
    obj: &JsonObject,
    field: &'static str,
) -> Result<Vec<String>, EntityError> {
    let value = obj
        .get(field)
        .ok_or(EntityError::MissingField { entity, field })?;
    str_list(entity, field, value)
}

/// Read an optional array-of-strings field, defaulting to empty.
///
/// # Errors
///
/// Returns [`EntityError::InvalidField`] when present but not an array of
/// strings.
pub fn optional_str_list(
    entity: &'static str,
    obj: &JsonObject,
    field: &'static str,
) -> Result<Vec<String>, EntityError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => str_list(entity, field, value),
    }
}

fn str_list(
    entity: &'static str,
    field: &'static str,
    value: &Value,
) -> Result<Vec<String>, EntityError> {
    let invalid = EntityError::InvalidField {
        entity,
        field,
        expected: "an array of strings",
    };
    let Some(items) = value.as_array() else {
        return Err(invalid);
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .ok_or(invalid)
}
