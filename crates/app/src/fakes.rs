//! In-memory stand-ins for the zone engine, shared by unit tests.

use std::collections::HashMap;

use fanctl_domain::group::Group;
use fanctl_domain::property::PropertyValue;
use serde_json::json;

use crate::ports::ZoneControl;

/// Property cache keyed by `(path, interface, property)`.
pub type Cache = HashMap<(String, String, String), PropertyValue>;

/// Zone that records increase requests.
#[derive(Debug, Default)]
pub struct FakeZone {
    pub inc_delta: u64,
    pub requests: Vec<u64>,
}

impl FakeZone {
    pub fn with_inc_delta(inc_delta: u64) -> Self {
        Self {
            inc_delta,
            requests: Vec::new(),
        }
    }

    pub fn last_request(&self) -> Option<u64> {
        self.requests.last().copied()
    }
}

impl ZoneControl for FakeZone {
    fn name(&self) -> &str {
        "zone0"
    }

    fn inc_delta(&self) -> u64 {
        self.inc_delta
    }

    fn request_increase(&mut self, delta: u64) {
        self.requests.push(delta);
        self.inc_delta = self.inc_delta.max(delta);
    }
}

pub const INTERFACE: &str = "xyz.openbmc_project.Sensor.Value";
pub const PROPERTY: &str = "Value";

/// Group over `members` reading [`INTERFACE`].[`PROPERTY`].
pub fn group(members: &[&str]) -> Group {
    Group::new(&json!({
        "name": "test group",
        "members": members,
        "interface": INTERFACE,
        "property": PROPERTY,
    }))
    .expect("test group should be valid")
}

/// Cache holding `values` for `(member, INTERFACE, PROPERTY)`.
pub fn cache(values: &[(&str, PropertyValue)]) -> Cache {
    values
        .iter()
        .map(|(path, value)| {
            (
                ((*path).to_string(), INTERFACE.to_string(), PROPERTY.to_string()),
                value.clone(),
            )
        })
        .collect()
}
