//! Action contract.

use std::fmt;

use fanctl_domain::group::Group;

use crate::ports::{PropertySource, ZoneControl};

/// Effect of an action: evaluate `group` and drive the zone accordingly.
///
/// The effect borrows the action it came from, so it can use the action's
/// configured state without copying it.
pub type ActionFn<'a> =
    Box<dyn Fn(&mut dyn ZoneControl, &Group, &dyn PropertySource) + Send + Sync + 'a>;

/// A named behaviour the zone engine invokes.
///
/// Instances are created by the [`ActionFactory`](super::ActionFactory) and
/// handed out boxed; they are never cloned, so whatever state an action
/// captured at construction has exactly one owner.
pub trait Action: Send + Sync {
    /// Name the action was constructed under.
    fn name(&self) -> &str;

    /// The effect this action performs. Calling this has no side effect.
    fn action(&self) -> ActionFn<'_>;
}

impl fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name()).finish()
    }
}

/// Name storage shared by action implementations.
#[derive(Debug)]
pub struct ActionBase {
    name: String,
}

impl ActionBase {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
