//! Event action resolution — turns an event's configured action entries
//! into owned behaviours.

use fanctl_domain::config_base::ConfigEntity;
use fanctl_domain::event::Event;

use crate::actions::{Action, ActionError, ActionFactory};

/// An event together with the behaviours resolved for it.
pub struct ResolvedEvent<'a> {
    event: &'a Event,
    actions: Vec<Box<dyn Action>>,
}

impl<'a> ResolvedEvent<'a> {
    /// Resolve every action of `event` through `factory`.
    ///
    /// # Errors
    ///
    /// Fails on the first action that cannot be resolved; nothing of the
    /// event is kept in that case.
    pub fn resolve(factory: &ActionFactory, event: &'a Event) -> Result<Self, ActionError> {
        let actions = resolve_event_actions(factory, event)?;
        Ok(Self { event, actions })
    }

    #[must_use]
    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// Resolved behaviours, in configuration order.
    #[must_use]
    pub fn actions(&self) -> &[Box<dyn Action>] {
        &self.actions
    }
}

impl std::fmt::Debug for ResolvedEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedEvent")
            .field("event", &self.event.name())
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Resolve the actions configured on `event`, in order.
///
/// # Errors
///
/// Returns the first [`ActionError`] raised, either for an unknown name or
/// by a behaviour rejecting its fragment.
#[tracing::instrument(skip_all, fields(event = event.name()))]
pub fn resolve_event_actions(
    factory: &ActionFactory,
    event: &Event,
) -> Result<Vec<Box<dyn Action>>, ActionError> {
    let actions = event
        .actions()
        .iter()
        .map(|entry| factory.resolve(entry.name(), entry.config()))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = actions.len(), "resolved event actions");
    Ok(actions)
}
