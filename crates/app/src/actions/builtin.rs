//! Behaviours compiled into the daemon.

use super::error::ActionError;
use super::factory::ActionFactory;
use super::net_target_increase::NetTargetIncrease;
use super::registration::register_actions;

/// Register every built-in behaviour with `factory`.
///
/// Each type is registered exactly once. Order does not matter; a name
/// claimed twice fails here, before any configuration is resolved.
///
/// # Errors
///
/// Returns [`ActionError::AlreadyRegistered`] when a built-in name collides
/// with one already in `factory`.
pub fn register_all(factory: &mut ActionFactory) -> Result<(), ActionError> {
    register_actions!(factory, [NetTargetIncrease])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_register_every_builtin() {
        let mut factory = ActionFactory::new();
        register_all(&mut factory).unwrap();
        assert_eq!(factory.names().collect::<Vec<_>>(), ["net_target_increase"]);
    }

    #[test]
    fn should_fail_when_builtins_are_registered_twice() {
        let mut factory = ActionFactory::new();
        register_all(&mut factory).unwrap();
        let err = register_all(&mut factory).unwrap_err();
        assert!(matches!(err, ActionError::AlreadyRegistered(name) if name == "net_target_increase"));
    }
}
