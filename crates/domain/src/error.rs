//! Errors raised while turning JSON fragments into configuration entities.

/// A configuration fragment could not be turned into an entity.
///
/// Every variant names the entity kind and the offending field so the
/// loader can report exactly what is wrong with the file.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// The fragment is not a JSON object.
    #[error("{entity} configuration must be a JSON object")]
    NotAnObject { entity: &'static str },

    /// A mandatory field is absent.
    #[error("missing required `{field}` in {entity} configuration")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("`{field}` in {entity} configuration must be {expected}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// A field is present and well-typed but empty.
    #[error("`{field}` in {entity} configuration must not be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

impl EntityError {
    /// Name of the field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::MissingField { field, .. }
            | Self::InvalidField { field, .. }
            | Self::EmptyField { field, .. } => Some(*field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_missing_field_with_entity_and_field() {
        let err = EntityError::MissingField {
            entity: "fan",
            field: "zone",
        };
        assert_eq!(err.to_string(), "missing required `zone` in fan configuration");
    }

    #[test]
    fn should_display_invalid_field_with_expected_shape() {
        let err = EntityError::InvalidField {
            entity: "group",
            field: "members",
            expected: "an array of strings",
        };
        assert_eq!(
            err.to_string(),
            "`members` in group configuration must be an array of strings"
        );
    }

    #[test]
    fn should_expose_field_name() {
        let err = EntityError::EmptyField {
            entity: "fan",
            field: "sensors",
        };
        assert_eq!(err.field(), Some("sensors"));
        assert_eq!(EntityError::NotAnObject { entity: "fan" }.field(), None);
    }
}
