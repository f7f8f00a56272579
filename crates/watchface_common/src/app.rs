use crate::host::Host;

/// Lifecycle interface of a watch face.
///
/// The host scheduler owns the calling sequence: `activate` (or `preview`)
/// first, then `tick` at the requested cadence while foregrounded, with
/// `prepare_sleep`/`wake` bracketing low-power periods. All entry points are
/// synchronous and must not block.
pub trait WatchApp<H: Host> {
    /// Display name shown in launchers and window titles.
    fn name(&self) -> &'static str;

    /// Enter the foreground. Full redraw; may request periodic callbacks.
    fn activate(&mut self, host: &mut H);

    /// About to enter low power mode. Returns true to tell the host not to
    /// switch to the default app before sleeping.
    fn prepare_sleep(&mut self, host: &mut H) -> bool;

    /// Return from low power mode. Display RAM is preserved across sleep,
    /// so only a partial update is expected.
    fn wake(&mut self, host: &mut H);

    /// Periodic callback; `ticks` is the number of periods elapsed since
    /// the previous delivery.
    fn tick(&mut self, host: &mut H, ticks: u32);

    /// Draw a preview for the face selector. Like `activate` but without
    /// requesting periodic callbacks.
    fn preview(&mut self, host: &mut H);
}
