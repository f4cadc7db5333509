//! # fanctl-app
//!
//! Application layer — the action framework and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the [`Action`](actions::Action) contract: a named behaviour that
//!   hands out an invocable effect
//! - Provide the [`ActionFactory`](actions::ActionFactory): a name → constructor
//!   table that resolves configured action names into owned behaviours
//! - Register every built-in behaviour exactly once, before configuration is
//!   resolved ([`actions::init`])
//! - Define **port traits** the zone engine implements:
//!   - `ZoneControl` — increase requests for the zone being evaluated
//!   - `PropertySource` — cached property values read from the bus
//! - Resolve an [`Event`](fanctl_domain::event::Event)'s configured actions
//!
//! ## Dependency rule
//! Depends on `fanctl-domain` only. Never performs IO; the zone engine that
//! owns resolved actions and invokes them each cycle lives outside this crate.

pub mod actions;
pub mod events;
pub mod ports;

#[cfg(test)]
mod fakes;
