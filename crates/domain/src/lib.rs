//! # fanctl-domain
//!
//! Configuration entity model for the fanctl fan control daemon.
//!
//! ## Responsibilities
//! - Foundational types: entity errors, the opaque system bus handle,
//!   typed property values read from the bus
//! - Define the **config entity base** (`name` + optional `profiles`) and
//!   the profile matching rule shared by every entity
//! - Define **Fans** (zone membership, target sensors, target interface)
//! - Define **Groups** (object paths sharing one interface/property)
//! - Define **Events** (groups bound to configured action fragments)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never performs IO: entities are validated, typed views over JSON
//! fragments handed in by whoever loads the configuration.

pub mod bus;
pub mod config_base;
pub mod error;
pub mod property;

pub mod event;
pub mod fan;
pub mod group;
