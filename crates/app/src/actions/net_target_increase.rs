//! `net_target_increase` — raise the zone target while group members are
//! at or beyond a configured state.
//!
//! For numeric members at or above `state` the requested increase scales
//! with the distance from `state`: a float member asks for
//! `(value - state) * delta`, an integer member for at least one `delta`.
//! Boolean and string members equal to `state` ask for exactly `delta`.
//! The zone is sent the largest of those and its current increase.

use fanctl_domain::group::Group;
use fanctl_domain::property::PropertyValue;
use serde_json::Value;

use super::action::{Action, ActionBase, ActionFn};
use super::error::ActionError;
use super::registration::RegisterAction;
use crate::ports::{PropertySource, ZoneControl};

/// Configured increase keyed on a member state.
#[derive(Debug)]
pub struct NetTargetIncrease {
    base: ActionBase,
    state: PropertyValue,
    delta: u64,
}

impl NetTargetIncrease {
    /// State members are compared against.
    #[must_use]
    pub fn state(&self) -> &PropertyValue {
        &self.state
    }

    /// Increase applied per unit above `state`.
    #[must_use]
    pub fn delta(&self) -> u64 {
        self.delta
    }

    fn run(&self, zone: &mut dyn ZoneControl, group: &Group, values: &dyn PropertySource) {
        let mut net_delta = zone.inc_delta();
        for member in group.members() {
            // Members without a cached value leave the delta unchanged.
            let Some(value) = values.property(member, group.interface(), group.property()) else {
                continue;
            };
            match self.increase_for(&value) {
                Some(delta) => net_delta = net_delta.max(delta),
                None if !same_kind(&value, &self.state) => {
                    tracing::error!(
                        action = self.base.name(),
                        zone = zone.name(),
                        member = %member,
                        interface = group.interface(),
                        property = group.property(),
                        member_type = value.type_name(),
                        state_type = self.state.type_name(),
                        "unsupported group member type"
                    );
                }
                None => {}
            }
        }
        zone.request_increase(net_delta);
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn increase_for(&self, value: &PropertyValue) -> Option<u64> {
        match (value, &self.state) {
            (PropertyValue::Int(v), PropertyValue::Int(s)) => {
                if v < s {
                    return None;
                }
                // Increase by at least one delta to bring it back under state.
                let factor = v.saturating_sub(*s).max(1) as u64;
                Some(factor.saturating_mul(self.delta))
            }
            (v, s) if v.is_numeric() && s.is_numeric() => {
                let (v, s) = (v.as_f64()?, s.as_f64()?);
                if v < s {
                    return None;
                }
                Some(((v - s) * self.delta as f64) as u64)
            }
            (PropertyValue::Bool(v), PropertyValue::Bool(s)) => (v == s).then_some(self.delta),
            (PropertyValue::String(v), PropertyValue::String(s)) => {
                (v == s).then_some(self.delta)
            }
            _ => None,
        }
    }
}

impl Action for NetTargetIncrease {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn action(&self) -> ActionFn<'_> {
        Box::new(
            move |zone: &mut dyn ZoneControl, group: &Group, values: &dyn PropertySource| {
                self.run(zone, group, values);
            },
        )
    }
}

impl RegisterAction for NetTargetIncrease {
    const NAME: &'static str = "net_target_increase";

    fn create(name: &str, config: &Value) -> Result<Self, ActionError> {
        let state = config
            .get("state")
            .ok_or_else(|| ActionError::parse(name, "Missing required state value"))?;
        let state = serde_json::from_value::<PropertyValue>(state.clone()).map_err(|_| {
            ActionError::parse(name, "state must be a bool, integer, float or string")
        })?;
        let delta = config
            .get("delta")
            .ok_or_else(|| ActionError::parse(name, "Missing required delta value"))?
            .as_u64()
            .ok_or_else(|| ActionError::parse(name, "delta must be an unsigned integer"))?;

        Ok(Self {
            base: ActionBase::new(name),
            state,
            delta,
        })
    }
}

fn same_kind(a: &PropertyValue, b: &PropertyValue) -> bool {
    (a.is_numeric() && b.is_numeric()) || std::mem::discriminant(a) == std::mem::discriminant(b)
}
