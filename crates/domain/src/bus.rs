//! System bus handle.

use std::fmt;
use std::sync::Arc;

/// Opaque handle to the inter-process system bus.
///
/// Entities only retain it so the zone engine can reach the bus later;
/// nothing in this crate talks to the bus. Clones share the same connection.
#[derive(Clone)]
pub struct BusHandle(Arc<str>);

impl BusHandle {
    /// Well-known address of the system bus socket.
    pub const SYSTEM: &'static str = "unix:path=/var/run/dbus/system_bus_socket";

    /// Wrap a bus address.
    #[must_use]
    pub fn new(address: impl AsRef<str>) -> Self {
        Self(Arc::from(address.as_ref()))
    }

    /// Handle to the default system bus.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Self::SYSTEM)
    }

    /// Address this handle was opened against.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.0
    }

    /// Whether two handles share the same underlying connection.
    #[must_use]
    pub fn same_connection(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for BusHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for BusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BusHandle").field(&self.address()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_system_bus() {
        assert_eq!(BusHandle::default().address(), BusHandle::SYSTEM);
    }

    #[test]
    fn should_share_connection_between_clones() {
        let bus = BusHandle::new("unix:path=/tmp/test_bus");
        let clone = bus.clone();
        assert!(bus.same_connection(&clone));
        assert!(!bus.same_connection(&BusHandle::new("unix:path=/tmp/test_bus")));
    }
}
