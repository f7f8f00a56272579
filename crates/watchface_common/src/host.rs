//! The capability surface a watch host exposes to faces.
//!
//! Faces never reach host state through globals; every lifecycle call
//! receives `&mut H` where `H: Host`, so a face can be driven by the real
//! host, a desktop simulator, or a recording fake in tests.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::theme::ThemeSlot;

/// Drawing primitives of the shared display surface.
///
/// The surface keeps a current foreground color for `string`; `fill` and
/// `blit` take their colors explicitly.
pub trait Drawable {
    /// Fill the entire surface with one color.
    fn fill(&mut self, color: Color);

    /// Set the foreground color used by subsequent `string` calls.
    fn set_color(&mut self, fg: Color);

    /// Blit a 1-bpp bitmap with its top-left corner at (`x`, `y`). Set bits
    /// are drawn in `fg`, clear bits in the background color.
    fn blit(&mut self, image: &Bitmap, x: i32, y: i32, fg: Color);

    /// Render `text` into the horizontal field starting at (`x`, `y`) and
    /// spanning `width` pixels. The whole field is blanked before the text
    /// is drawn, so a shorter string fully replaces a longer one.
    fn string(&mut self, text: &str, x: i32, y: i32, width: u32);
}

/// Host services reachable from a face lifecycle call.
pub trait Host {
    type Draw: Drawable;

    /// The shared display surface.
    fn drawable(&mut self) -> &mut Self::Draw;

    /// Resolve a color from the active theme.
    fn theme(&self, slot: ThemeSlot) -> Color;

    /// Ask the host to deliver periodic `tick` callbacks at `period_ms`
    /// intervals while the app stays foregrounded. The host owns the
    /// re-scheduling; it stops delivering on its own when the app leaves
    /// the foreground.
    fn request_tick(&mut self, period_ms: u32);

    /// Current real-time-clock value as fractional epoch seconds.
    fn rtc_time(&self) -> f64;

    /// Enable or disable the status bar's built-in clock.
    fn bar_set_clock(&mut self, enabled: bool);

    /// Unconditional full redraw of the status bar.
    fn bar_draw(&mut self);

    /// Partial refresh of the status bar. Returns whether any visible
    /// element changed.
    fn bar_update(&mut self) -> bool;
}
