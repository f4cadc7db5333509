//! Property source port — cached property values of bus objects.

use std::collections::HashMap;
use std::hash::BuildHasher;

use fanctl_domain::property::PropertyValue;

/// Read access to the latest known value of a property on the bus.
pub trait PropertySource {
    /// Value of `property` on `interface` at object `path`, if known.
    fn property(&self, path: &str, interface: &str, property: &str) -> Option<PropertyValue>;
}

/// `(path, interface, property)` → value, as kept by an in-memory cache.
impl<S: BuildHasher> PropertySource for HashMap<(String, String, String), PropertyValue, S> {
    fn property(&self, path: &str, interface: &str, property: &str) -> Option<PropertyValue> {
        self.get(&(path.to_string(), interface.to_string(), property.to_string()))
            .cloned()
    }
}
