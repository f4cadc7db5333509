//! # fanctld — fan control daemon
//!
//! Composition root that builds the action registry, loads the fan control
//! configuration and validates it before the control loop runs.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise logging
//! - Register every built-in action and freeze the registry
//! - Load fans, groups and events from the entity directory
//! - Resolve the actions of every active event, failing on unknown names
//! - Wait for SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on both the domain and the
//! application crates. It is the wiring layer, no control logic lives here.

mod config;
mod loader;

use std::collections::BTreeMap;

use anyhow::Context;
use fanctl_app::actions;
use fanctl_app::events::ResolvedEvent;
use fanctl_domain::bus::BusHandle;
use fanctl_domain::config_base::ConfigEntity;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading daemon configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting fanctld v{}", env!("CARGO_PKG_VERSION"));

    // Registry
    let factory = actions::init().context("registering built-in actions")?;

    // Entities
    let bus = BusHandle::new(&config.bus.address);
    let entities = loader::load(config.entities_dir(), &bus)
        .with_context(|| format!("loading entities from {}", config.entities_dir().display()))?;
    let active = config.active_profiles();

    // Zones
    let mut zones: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for fan in entities.active_fans(&active) {
        zones.entry(fan.zone()).or_default().push(fan.name());
    }
    for (zone, fans) in &zones {
        tracing::info!(zone = *zone, fans = %fans.join(", "), "zone configured");
    }
    if zones.is_empty() {
        tracing::warn!(profiles = ?config.profiles.active, "no fan is active");
    }

    // Events
    let resolved = entities
        .active_events(&active)
        .map(|event| ResolvedEvent::resolve(factory, event))
        .collect::<Result<Vec<_>, _>>()
        .context("resolving event actions")?;
    for event in &resolved {
        tracing::info!(
            event = event.event().name(),
            actions = event.actions().len(),
            "event ready"
        );
    }

    tracing::info!(
        bus = bus.address(),
        zones = zones.len(),
        events = resolved.len(),
        "fanctld ready"
    );

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    tracing::info!("shutting down");

    Ok(())
}
