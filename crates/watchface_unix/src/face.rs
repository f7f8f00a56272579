use watchface_common::{Color, Drawable, Host, ThemeSlot, WatchApp, DISPLAY_WIDTH};

use crate::logo;

/// Tick cadence requested while foregrounded.
const TICK_PERIOD_MS: u32 = 1000;

/// Logo position, centering the scaled bitmap horizontally.
const LOGO_X: i32 = ((DISPLAY_WIDTH - logo::PROMPT.scaled_width()) / 2) as i32;
const LOGO_Y: i32 = 40;

/// Title and time fields both span the full line so that redrawing them
/// never leaves stale pixels behind.
const TITLE_Y: i32 = 168;
const TIME_Y: i32 = 200;
const FIELD_WIDTH: u32 = DISPLAY_WIDTH;

/// Operational state of the face, driven entirely by the host scheduler.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FaceState {
    /// Created but never activated or previewed.
    Inactive,
    Foreground,
    Sleeping,
}

/// The Unix epoch time clock face.
///
/// The face caches the epoch second it last put on the display. On `tick`
/// and `wake` it redraws only when the status bar reports a change or the
/// floored RTC value differs from that cache; otherwise it touches nothing,
/// which is the power-saving path the face exists for.
pub struct UnixClockFace {
    state: FaceState,
    /// Epoch second currently on the display, `None` before the first draw.
    epoch: Option<i64>,
}

impl Default for UnixClockFace {
    fn default() -> Self {
        UnixClockFace {
            state: FaceState::Inactive,
            epoch: None,
        }
    }
}

impl UnixClockFace {
    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Draw or lazily update the display.
    ///
    /// With `redraw` set the whole face is rebuilt: surface fill, logo,
    /// title, status bar, then the time field. Without it the time field is
    /// redrawn only when something visible actually changed.
    fn draw<H: Host>(&mut self, host: &mut H, redraw: bool) {
        let now = host.rtc_time().floor() as i64;

        if redraw {
            let bright = host.theme(ThemeSlot::Bright);
            let mid = host.theme(ThemeSlot::Mid);

            let draw = host.drawable();
            draw.fill(Color::BLACK);
            draw.blit(&logo::PROMPT, LOGO_X, LOGO_Y, mid.lighten(1));
            draw.set_color(bright);
            draw.string("UNIX TIME", 0, TITLE_Y, FIELD_WIDTH);

            host.bar_draw();
        } else if !host.bar_update() && self.epoch == Some(now) {
            // Nothing visible changed, skip the update.
            return;
        }

        self.epoch = Some(now);

        let draw = host.drawable();
        draw.set_color(Color::CYBER_GREEN);
        draw.string(&now.to_string(), 0, TIME_Y, FIELD_WIDTH);
    }
}

impl<H: Host> WatchApp<H> for UnixClockFace {
    fn name(&self) -> &'static str {
        "Unix Clock"
    }

    fn activate(&mut self, host: &mut H) {
        log::info!("unix clock: activate");
        host.bar_set_clock(false);
        self.draw(host, true);
        self.state = FaceState::Foreground;
        host.request_tick(TICK_PERIOD_MS);
    }

    fn prepare_sleep(&mut self, _host: &mut H) -> bool {
        log::info!("unix clock: sleep");
        self.state = FaceState::Sleeping;
        // Keep this face as the active app while asleep.
        true
    }

    fn wake(&mut self, host: &mut H) {
        log::info!("unix clock: wake");
        self.state = FaceState::Foreground;
        // Display RAM survives the sleep, so a lazy update is enough.
        self.draw(host, false);
    }

    fn tick(&mut self, host: &mut H, _ticks: u32) {
        self.draw(host, false);
    }

    fn preview(&mut self, host: &mut H) {
        host.bar_set_clock(false);
        self.draw(host, true);
        self.state = FaceState::Foreground;
    }
}

#[cfg(test)]
mod tests;
