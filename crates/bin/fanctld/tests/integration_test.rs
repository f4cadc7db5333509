//! End-to-end tests across the domain and application crates.
//!
//! Each test builds a registry, parses entities from JSON the way the daemon
//! reads them from disk, resolves event actions and runs them against an
//! in-memory zone.

use std::collections::{HashMap, HashSet};

use fanctl_app::actions::{
    self, Action, ActionBase, ActionError, ActionFactory, ActionFn, RegisterAction,
};
use fanctl_app::actions::net_target_increase::NetTargetIncrease;
use fanctl_app::events::ResolvedEvent;
use fanctl_app::ports::{PropertySource, ZoneControl};
use fanctl_domain::bus::BusHandle;
use fanctl_domain::config_base::ConfigEntity;
use fanctl_domain::event::Event;
use fanctl_domain::fan::Fan;
use fanctl_domain::group::Group;
use fanctl_domain::property::PropertyValue;
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Zone {
    requests: Vec<u64>,
}

impl ZoneControl for Zone {
    fn name(&self) -> &str {
        "0"
    }

    fn inc_delta(&self) -> u64 {
        self.requests.iter().copied().max().unwrap_or(0)
    }

    fn request_increase(&mut self, delta: u64) {
        self.requests.push(delta);
    }
}

/// Requests a fixed speed, `target` from configuration, 100 by default.
struct SetSpeed {
    base: ActionBase,
    target: u64,
}

impl Action for SetSpeed {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn action(&self) -> ActionFn<'_> {
        Box::new(
            move |zone: &mut dyn ZoneControl, _group: &Group, _values: &dyn PropertySource| {
                zone.request_increase(self.target);
            },
        )
    }
}

impl RegisterAction for SetSpeed {
    const NAME: &'static str = "set_speed";

    fn create(name: &str, config: &Value) -> Result<Self, ActionError> {
        Ok(Self {
            base: ActionBase::new(name),
            target: config.get("target").and_then(Value::as_u64).unwrap_or(100),
        })
    }
}

type Cache = HashMap<(String, String, String), PropertyValue>;

fn inventory() -> Group {
    Group::new(&json!({
        "name": "fan inventory",
        "members": ["/system/chassis/fan0", "/system/chassis/fan1"],
        "interface": "xyz.openbmc_project.Inventory.Item",
        "property": "Present"
    }))
    .unwrap()
}

fn presence(fan0: bool, fan1: bool) -> Cache {
    [("/system/chassis/fan0", fan0), ("/system/chassis/fan1", fan1)]
        .into_iter()
        .map(|(path, present)| {
            (
                (
                    path.to_string(),
                    "xyz.openbmc_project.Inventory.Item".to_string(),
                    "Present".to_string(),
                ),
                PropertyValue::Bool(present),
            )
        })
        .collect()
}

fn run(action: &dyn Action, group: &Group, values: &Cache) -> Vec<u64> {
    let mut zone = Zone::default();
    (action.action())(&mut zone, group, values);
    zone.requests
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn should_resolve_action_registered_under_custom_name() {
    let mut factory = ActionFactory::new();
    factory.register_as::<SetSpeed>("set_speed").unwrap();

    let action = factory.resolve("set_speed", &json!({})).unwrap();
    assert_eq!(action.name(), "set_speed");
    assert_eq!(run(action.as_ref(), &inventory(), &Cache::new()), [100]);
}

#[test]
fn should_reject_duplicate_registration_and_keep_first() {
    let mut factory = ActionFactory::new();
    factory.register_as::<SetSpeed>("set_speed").unwrap();

    let err = factory.register_as::<NetTargetIncrease>("set_speed").unwrap_err();
    assert!(matches!(err, ActionError::AlreadyRegistered(name) if name == "set_speed"));

    let action = factory
        .resolve("set_speed", &json!({"target": 40}))
        .unwrap();
    assert_eq!(run(action.as_ref(), &inventory(), &Cache::new()), [40]);
}

#[test]
fn should_report_unknown_action_with_available_names() {
    let mut factory = ActionFactory::new();
    factory.register::<SetSpeed>().unwrap();
    factory.register::<NetTargetIncrease>().unwrap();

    let err = factory.resolve("bogus", &json!({})).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bogus"));
    assert!(message.contains("set_speed"));
    assert!(message.contains("net_target_increase"));
    assert!(matches!(err, ActionError::Unknown { available, .. } if available.len() == 2));
}

#[test]
fn should_expose_builtins_through_process_registry() {
    let factory = actions::init().unwrap();
    assert!(factory.contains("net_target_increase"));
    assert!(std::ptr::eq(actions::global().unwrap(), factory));
}

// ---------------------------------------------------------------------------
// Fans
// ---------------------------------------------------------------------------

#[test]
fn should_build_fan_and_match_profiles() {
    let bus = BusHandle::system();
    let fan = Fan::new(
        bus.clone(),
        &json!({
            "name": "fan0",
            "zone": "0",
            "sensors": ["fan0_0", "fan0_1"],
            "interface": "xyz.openbmc_project.Control.FanSpeed",
            "profiles": ["P1"]
        }),
    )
    .unwrap();

    assert_eq!(fan.name(), "fan0");
    assert_eq!(fan.zone(), "0");
    assert_eq!(fan.sensors(), ["fan0_0", "fan0_1"]);
    assert_eq!(fan.interface(), "xyz.openbmc_project.Control.FanSpeed");
    assert!(fan.bus().same_connection(&bus));

    assert!(fan.is_active(&HashSet::from(["P1".to_string()])));
    assert!(!fan.is_active(&HashSet::from(["P2".to_string()])));
    assert!(!fan.is_active(&HashSet::new()));
}

#[test]
fn should_reject_fan_without_zone() {
    let err = Fan::new(
        BusHandle::system(),
        &json!({"name": "fan0", "sensors": ["fan0_0"], "interface": "i"}),
    )
    .unwrap_err();
    assert_eq!(err.field(), Some("zone"));
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn should_raise_zone_target_when_a_fan_is_missing() {
    let factory = actions::init().unwrap();
    let event = Event::new(&json!({
        "name": "missing fans",
        "groups": ["fan inventory"],
        "actions": [{"name": "net_target_increase", "state": false, "delta": 255}]
    }))
    .unwrap();
    let resolved = ResolvedEvent::resolve(factory, &event).unwrap();
    let action = &resolved.actions()[0];

    assert_eq!(run(action.as_ref(), &inventory(), &presence(true, true)), [0]);
    assert_eq!(run(action.as_ref(), &inventory(), &presence(true, false)), [255]);
}

#[test]
fn should_fail_event_referencing_unregistered_action() {
    let factory = actions::init().unwrap();
    let event = Event::new(&json!({
        "name": "boost",
        "actions": [{"name": "set_speed", "target": 200}]
    }))
    .unwrap();

    let err = ResolvedEvent::resolve(factory, &event).unwrap_err();
    assert!(matches!(err, ActionError::Unknown { name, .. } if name == "set_speed"));
}
