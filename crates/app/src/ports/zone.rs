//! Zone port — the part of a cooling zone an action may drive.

/// Target requests an action may make against the zone it runs in.
pub trait ZoneControl {
    /// Name of the zone.
    fn name(&self) -> &str;

    /// Net increase delta already requested during the current cycle.
    fn inc_delta(&self) -> u64;

    /// Request the zone target be raised by `delta`.
    ///
    /// The zone keeps the largest request it receives per cycle.
    fn request_increase(&mut self, delta: u64);
}
