//! Event — binds groups to the actions run against them.
//!
//! Each configured action is kept as its raw JSON fragment; turning the
//! fragment into a behaviour is the action factory's job.

use serde_json::Value;

use crate::config_base::{
    ConfigBase, ConfigEntity, JsonObject, as_object, optional_str_list, required_str,
};
use crate::error::EntityError;

/// One entry of an event's `actions` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionConfig {
    name: String,
    config: Value,
}

impl ActionConfig {
    const ENTITY: &'static str = "action";

    /// Parse an action entry; only `name` is checked here.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] when the entry is not an object or its
    /// `name` is missing, mistyped or empty.
    pub fn new(json: &Value) -> Result<Self, EntityError> {
        let obj = as_object(Self::ENTITY, json)?;
        let name = required_str(Self::ENTITY, obj, "name")?;
        if name.is_empty() {
            return Err(EntityError::EmptyField {
                entity: Self::ENTITY,
                field: "name",
            });
        }
        Ok(Self {
            name,
            config: json.clone(),
        })
    }

    /// Registered action name this entry refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full fragment handed to the action's constructor.
    #[must_use]
    pub fn config(&self) -> &Value {
        &self.config
    }
}

/// An event as described in `events.json`.
#[derive(Debug)]
pub struct Event {
    base: ConfigBase,
    groups: Vec<String>,
    actions: Vec<ActionConfig>,
}

impl Event {
    /// File the event configuration is read from.
    pub const CONF_FILE: &'static str = "events.json";

    const ENTITY: &'static str = "event";

    /// Parse an event from its JSON fragment.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] when `name` or `actions` is missing or
    /// mistyped, `actions` is empty, or any action entry lacks a name.
    pub fn new(json: &Value) -> Result<Self, EntityError> {
        let obj = as_object(Self::ENTITY, json)?;
        let base = ConfigBase::from_object(Self::ENTITY, obj)?;
        let groups = optional_str_list(Self::ENTITY, obj, "groups")?;
        let actions = parse_actions(obj)?;
        Ok(Self {
            base,
            groups,
            actions,
        })
    }

    /// Names of the groups the actions run against.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Configured actions, in declaration order.
    #[must_use]
    pub fn actions(&self) -> &[ActionConfig] {
        &self.actions
    }
}

impl ConfigEntity for Event {
    fn base(&self) -> &ConfigBase {
        &self.base
    }
}

fn parse_actions(obj: &JsonObject) -> Result<Vec<ActionConfig>, EntityError> {
    let value = obj.get("actions").ok_or(EntityError::MissingField {
        entity: Event::ENTITY,
        field: "actions",
    })?;
    let items = value.as_array().ok_or(EntityError::InvalidField {
        entity: Event::ENTITY,
        field: "actions",
        expected: "an array of objects",
    })?;
    if items.is_empty() {
        return Err(EntityError::EmptyField {
            entity: Event::ENTITY,
            field: "actions",
        });
    }
    items.iter().map(ActionConfig::new).collect()
}
