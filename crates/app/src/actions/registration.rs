//! Self-registration of behaviour types.
//!
//! A behaviour type implements [`RegisterAction`] and is listed once in
//! [`register_all`](super::builtin::register_all) with [`register_actions!`].
//! Nothing else needs to know the type exists.

use serde_json::Value;

use super::action::Action;
use super::error::ActionError;

/// A behaviour type that can be registered with the
/// [`ActionFactory`](super::ActionFactory).
pub trait RegisterAction: Action + Sized + 'static {
    /// Name the type is registered under by default.
    const NAME: &'static str;

    /// Build an instance from its JSON fragment.
    ///
    /// `name` is the name the instance is resolved under, which is
    /// [`NAME`](Self::NAME) unless the type was registered under another one.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Parse`] when the fragment is missing a field
    /// the behaviour needs or has one of the wrong type.
    fn create(name: &str, config: &Value) -> Result<Self, ActionError>;
}

/// Register every listed type with `$factory`, in order, stopping at the
/// first failure.
macro_rules! register_actions {
    ($factory:expr, [$($action:ty),+ $(,)?]) => {
        Ok(())$(.and_then(|()| $factory.register::<$action>()))+
    };
}

pub(crate) use register_actions;
