//! Port definitions — traits the zone engine implements.
//!
//! Actions only ever see the zone and the bus through these traits, so the
//! control loop can be swapped or faked without touching any behaviour.

pub mod property_source;
pub mod zone;

pub use property_source::PropertySource;
pub use zone::ZoneControl;
