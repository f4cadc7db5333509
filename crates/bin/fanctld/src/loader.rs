//! Entity loading — reads `fans.json`, `groups.json` and `events.json` from
//! the configuration directory and builds the typed entities.
//!
//! Loading is all-or-nothing: the first malformed entry aborts it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use fanctl_domain::bus::BusHandle;
use fanctl_domain::config_base::ConfigEntity;
use fanctl_domain::error::EntityError;
use fanctl_domain::event::Event;
use fanctl_domain::fan::Fan;
use fanctl_domain::group::Group;
use serde_json::Value;

/// Every entity read from the configuration directory.
#[derive(Debug, Default)]
pub struct Entities {
    pub fans: Vec<Fan>,
    pub groups: Vec<Group>,
    pub events: Vec<Event>,
}

impl Entities {
    /// Group named `name`, if configured.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Fans that take part in their zone under `active` profiles.
    pub fn active_fans<'a>(&'a self, active: &'a HashSet<String>) -> impl Iterator<Item = &'a Fan> {
        self.fans.iter().filter(move |f| f.is_active(active))
    }

    /// Events that are enabled under `active` profiles.
    pub fn active_events<'a>(
        &'a self,
        active: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.is_active(active))
    }
}

/// Read and validate every entity file under `dir`.
///
/// `fans.json` is required; `groups.json` and `events.json` are optional.
///
/// # Errors
///
/// Returns a [`LoadError`] naming the file (and entry index) that failed.
pub fn load(dir: &Path, bus: &BusHandle) -> Result<Entities, LoadError> {
    let fans_path = dir.join(Fan::CONF_FILE);
    let fans = read_array(&fans_path)?.ok_or(LoadError::Missing(fans_path.clone()))?;
    let fans = build(&fans_path, &fans, |json| Fan::new(bus.clone(), json))?;

    let groups_path = dir.join(Group::CONF_FILE);
    let groups = match read_array(&groups_path)? {
        Some(items) => build(&groups_path, &items, Group::new)?,
        None => Vec::new(),
    };

    let events_path = dir.join(Event::CONF_FILE);
    let events = match read_array(&events_path)? {
        Some(items) => build(&events_path, &items, Event::new)?,
        None => Vec::new(),
    };

    let entities = Entities {
        fans,
        groups,
        events,
    };
    check_unique(&fans_path, &entities.fans)?;
    check_unique(&groups_path, &entities.groups)?;
    check_unique(&events_path, &entities.events)?;
    check_group_references(&entities)?;

    tracing::info!(
        dir = %dir.display(),
        fans = entities.fans.len(),
        groups = entities.groups.len(),
        events = entities.events.len(),
        "loaded configuration entities"
    );
    Ok(entities)
}

fn read_array(path: &Path) -> Result<Option<Vec<Value>>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "entity file not present");
            return Ok(None);
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let json: Value = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match json {
        Value::Array(items) => Ok(Some(items)),
        _ => Err(LoadError::NotAnArray(path.to_path_buf())),
    }
}

fn build<T>(
    path: &Path,
    items: &[Value],
    parse: impl Fn(&Value) -> Result<T, EntityError>,
) -> Result<Vec<T>, LoadError> {
    items
        .iter()
        .enumerate()
        .map(|(index, json)| {
            parse(json).map_err(|source| LoadError::Entity {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

fn check_unique<T: ConfigEntity>(path: &Path, entities: &[T]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.name()) {
            return Err(LoadError::DuplicateName {
                path: path.to_path_buf(),
                name: entity.name().to_string(),
            });
        }
    }
    Ok(())
}

fn check_group_references(entities: &Entities) -> Result<(), LoadError> {
    for event in &entities.events {
        if let Some(group) = event
            .groups()
            .iter()
            .find(|g| entities.group(g).is_none())
        {
            return Err(LoadError::UnknownGroup {
                event: event.name().to_string(),
                group: group.clone(),
            });
        }
    }
    Ok(())
}

/// Entity loading errors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A required entity file does not exist.
    #[error("required configuration file {} not found", .0.display())]
    Missing(PathBuf),

    /// An entity file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entity file is not valid JSON.
    #[error("failed to parse {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An entity file is valid JSON but not an array.
    #[error("{} must contain a JSON array", .0.display())]
    NotAnArray(PathBuf),

    /// An entry could not be turned into an entity.
    #[error("invalid entry {index} in {}: {source}", .path.display())]
    Entity {
        path: PathBuf,
        index: usize,
        #[source]
        source: EntityError,
    },

    /// Two entries of the same file share a name.
    #[error("duplicate name `{name}` in {}", .path.display())]
    DuplicateName { path: PathBuf, name: String },

    /// An event refers to a group that is not configured.
    #[error("event `{event}` refers to unknown group `{group}`")]
    UnknownGroup { event: String, group: String },
}
