//! Fan — a configured, controllable fan.
//!
//! A fan belongs to one cooling zone, is made up of one or more sensors that
//! expose a speed `Target` property, and is driven through a target
//! interface. When no profiles are given the fan is always part of its zone.

use serde_json::Value;

use crate::bus::BusHandle;
use crate::config_base::{
    ConfigBase, ConfigEntity, JsonObject, as_object, required_str, required_str_list,
};
use crate::error::EntityError;

/// A fan as described in `fans.json`.
#[derive(Debug)]
pub struct Fan {
    base: ConfigBase,
    bus: BusHandle,
    zone: String,
    sensors: Vec<String>,
    interface: String,
}

impl Fan {
    /// File the fan configuration is read from.
    pub const CONF_FILE: &'static str = "fans.json";

    const ENTITY: &'static str = "fan";

    /// Parse a fan from its JSON fragment, keeping `bus` for later use by
    /// the zone engine.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] naming the field when `name`, `zone`,
    /// `sensors` or `interface` is missing or mistyped, or when `sensors`
    /// is empty.
    pub fn new(bus: BusHandle, json: &Value) -> Result<Self, EntityError> {
        let obj = as_object(Self::ENTITY, json)?;
        let base = ConfigBase::from_object(Self::ENTITY, obj)?;
        let zone = required_str(Self::ENTITY, obj, "zone")?;
        let sensors = required_str_list(Self::ENTITY, obj, "sensors")?;
        if sensors.is_empty() {
            return Err(EntityError::EmptyField {
                entity: Self::ENTITY,
                field: "sensors",
            });
        }
        let interface = parse_interface(obj)?;

        Ok(Self {
            base,
            bus,
            zone,
            sensors,
            interface,
        })
    }

    /// Zone this fan belongs to.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Sensors with a `Target` property that make up the fan.
    #[must_use]
    pub fn sensors(&self) -> &[String] {
        &self.sensors
    }

    /// Interface containing `Target` on the sensors.
    #[must_use]
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Bus handle retained for the zone engine.
    #[must_use]
    pub fn bus(&self) -> &BusHandle {
        &self.bus
    }
}

impl ConfigEntity for Fan {
    fn base(&self) -> &ConfigBase {
        &self.base
    }
}

// Older configuration files spell the key `target_interface`.
fn parse_interface(obj: &JsonObject) -> Result<String, EntityError> {
    if obj.contains_key("interface") || !obj.contains_key("target_interface") {
        required_str(Fan::ENTITY, obj, "interface")
    } else {
        required_str(Fan::ENTITY, obj, "target_interface")
    }
}
