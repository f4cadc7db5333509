//! Group — bus objects sharing one interface/property that actions evaluate.

use serde_json::Value;

use crate::config_base::{ConfigBase, ConfigEntity, as_object, required_str, required_str_list};
use crate::error::EntityError;

/// A group as described in `groups.json`.
#[derive(Debug)]
pub struct Group {
    base: ConfigBase,
    members: Vec<String>,
    interface: String,
    property: String,
}

impl Group {
    /// File the group configuration is read from.
    pub const CONF_FILE: &'static str = "groups.json";

    const ENTITY: &'static str = "group";

    /// Parse a group from its JSON fragment.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] when `name`, `members`, `interface` or
    /// `property` is missing or mistyped, or `members` is empty.
    pub fn new(json: &Value) -> Result<Self, EntityError> {
        let obj = as_object(Self::ENTITY, json)?;
        let base = ConfigBase::from_object(Self::ENTITY, obj)?;
        let members = required_str_list(Self::ENTITY, obj, "members")?;
        if members.is_empty() {
            return Err(EntityError::EmptyField {
                entity: Self::ENTITY,
                field: "members",
            });
        }
        let interface = required_str(Self::ENTITY, obj, "interface")?;
        let property = required_str(Self::ENTITY, obj, "property")?;

        Ok(Self {
            base,
            members,
            interface,
            property,
        })
    }

    /// Object paths in the group.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Interface hosting [`property`](Self::property) on every member.
    #[must_use]
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Property read from every member.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }
}

impl ConfigEntity for Group {
    fn base(&self) -> &ConfigBase {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn group_json() -> Value {
        json!({
            "name": "fan inventory",
            "members": ["/system/chassis/fan0", "/system/chassis/fan1"],
            "interface": "xyz.openbmc_project.State.Decorator.OperationalStatus",
            "property": "Functional"
        })
    }

    #[test]
    fn should_parse_group() {
        let group = Group::new(&group_json()).unwrap();
        assert_eq!(group.name(), "fan inventory");
        assert_eq!(group.members().len(), 2);
        assert_eq!(group.property(), "Functional");
        assert!(group.profiles().is_empty());
    }

    #[test]
    fn should_reject_group_missing_property() {
        let mut json = group_json();
        json.as_object_mut().unwrap().remove("property");
        let err = Group::new(&json).unwrap_err();
        assert!(matches!(
            err,
            EntityError::MissingField {
                entity: "group",
                field: "property"
            }
        ));
    }

    #[test]
    fn should_reject_group_without_members() {
        let mut json = group_json();
        json["members"] = json!([]);
        let err = Group::new(&json).unwrap_err();
        assert!(matches!(err, EntityError::EmptyField { field: "members", .. }));
    }
}
