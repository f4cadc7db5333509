//! Action factory — name → constructor table.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde_json::Value;

use super::action::Action;
use super::error::ActionError;
use super::registration::RegisterAction;

/// Builds a boxed action from the name it is resolved under and its JSON
/// fragment.
pub type ActionCtor = fn(&str, &Value) -> Result<Box<dyn Action>, ActionError>;

/// Registry of every action available to the configuration.
///
/// Populated during startup only. Once populated it is only read, and
/// since it holds nothing but function pointers it can be shared across
/// threads without locking.
#[derive(Default)]
pub struct ActionFactory {
    actions: BTreeMap<String, ActionCtor>,
}

impl ActionFactory {
    /// Create an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its own [`NAME`](RegisterAction::NAME).
    ///
    /// # Errors
    ///
    /// See [`register_as`](Self::register_as).
    pub fn register<T: RegisterAction>(&mut self) -> Result<(), ActionError> {
        self.register_as::<T>(T::NAME)
    }

    /// Register `T` under `name`.
    ///
    /// A name is never silently reassigned: if it is already taken the
    /// registration fails, whatever type holds it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyName`] for an empty `name` and
    /// [`ActionError::AlreadyRegistered`] when `name` is taken.
    pub fn register_as<T: RegisterAction>(&mut self, name: &str) -> Result<(), ActionError> {
        self.insert(name, create_action::<T>)
    }

    fn insert(&mut self, name: &str, ctor: ActionCtor) -> Result<(), ActionError> {
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        match self.actions.entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::error!(action = name, "action is already registered");
                Err(ActionError::AlreadyRegistered(name.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(ctor);
                tracing::debug!(action = name, "registered action");
                Ok(())
            }
        }
    }

    /// Construct the action registered as `name` from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Unknown`], listing every registered name, when
    /// `name` is not registered. Errors raised by the action's own
    /// constructor are returned unchanged.
    pub fn resolve(&self, name: &str, config: &Value) -> Result<Box<dyn Action>, ActionError> {
        let Some(ctor) = self.actions.get(name) else {
            let available: Vec<String> = self.actions.keys().cloned().collect();
            tracing::error!(
                action = name,
                available_actions = %available.join(", "),
                "action is not registered"
            );
            return Err(ActionError::Unknown {
                name: name.to_string(),
                available,
            });
        };
        ctor(name, config)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Registered names, comma-joined.
    #[must_use]
    pub fn available(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionFactory")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn create_action<T: RegisterAction>(
    name: &str,
    config: &Value,
) -> Result<Box<dyn Action>, ActionError> {
    Ok(Box::new(T::create(name, config)?))
}
