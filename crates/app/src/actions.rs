//! Actions — named, pluggable behaviours selected from configuration.
//!
//! Every behaviour type implements [`Action`] and [`RegisterAction`], and is
//! listed once in [`builtin::register_all`]. [`init`] builds the
//! process-wide [`ActionFactory`] from that list and freezes it; after that
//! the zone engine resolves configured names through [`global`].

mod action;
pub mod builtin;
mod error;
mod factory;
pub mod net_target_increase;
mod registration;

use std::sync::OnceLock;

pub use action::{Action, ActionBase, ActionFn};
pub use error::ActionError;
pub use factory::{ActionCtor, ActionFactory};
pub use registration::RegisterAction;

static REGISTRY: OnceLock<ActionFactory> = OnceLock::new();

/// Build the process-wide action registry and freeze it.
///
/// Must run during startup, before any configuration is resolved. Calling
/// it again returns the already frozen registry. There is no way to add
/// actions afterwards, so the returned factory can be shared freely across
/// threads.
///
/// # Errors
///
/// Returns [`ActionError::AlreadyRegistered`] when two built-in behaviours
/// claim the same name. The daemon must not start in that case.
pub fn init() -> Result<&'static ActionFactory, ActionError> {
    if let Some(factory) = REGISTRY.get() {
        return Ok(factory);
    }

    let mut factory = ActionFactory::new();
    builtin::register_all(&mut factory)?;
    let factory = REGISTRY.get_or_init(|| factory);
    tracing::info!(
        actions = %factory.available(),
        "action registry initialised"
    );
    Ok(factory)
}

/// The registry frozen by [`init`].
///
/// # Errors
///
/// Returns [`ActionError::NotInitialized`] when [`init`] has not run yet.
pub fn global() -> Result<&'static ActionFactory, ActionError> {
    REGISTRY.get().ok_or(ActionError::NotInitialized)
}
