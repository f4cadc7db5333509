//! Action registration and resolution errors.

/// Failure while registering or resolving an action.
///
/// None of these are recoverable: they mean the build or the configuration
/// is wrong and the daemon must not start its control loop.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// An action was registered under an empty name.
    #[error("action name must not be empty")]
    EmptyName,

    /// Two behaviours claimed the same name.
    #[error("action `{0}` is already registered")]
    AlreadyRegistered(String),

    /// Configuration referenced a name nothing registered.
    #[error("action `{name}` is not registered (available actions: {})", .available.join(", "))]
    Unknown {
        name: String,
        available: Vec<String>,
    },

    /// A behaviour rejected its configuration fragment.
    #[error("action `{action}`: {reason}")]
    Parse { action: String, reason: String },

    /// The registry was queried before [`init`](super::init) ran.
    #[error("action registry has not been initialised")]
    NotInitialized,
}

impl ActionError {
    /// Shorthand for a [`Parse`](Self::Parse) error.
    pub fn parse(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_available_actions_in_unknown_error() {
        let err = ActionError::Unknown {
            name: "unknown_action".to_string(),
            available: vec!["count_state_floor".to_string(), "set_speed".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "action `unknown_action` is not registered (available actions: count_state_floor, set_speed)"
        );
    }

    #[test]
    fn should_display_parse_error_with_action_name() {
        let err = ActionError::parse("net_target_increase", "Missing required delta value");
        assert_eq!(
            err.to_string(),
            "action `net_target_increase`: Missing required delta value"
        );
    }
}
