use std::time::{Instant, SystemTime, UNIX_EPOCH};

use watchface_common::{Color, Host, Theme, ThemeSlot};

use crate::bar::StatusBarWidget;
use crate::draw::Draw565;

/// Battery drain rate of the simulated cell, percent per minute.
const BATTERY_DRAIN_PER_MIN: u64 = 1;
const BATTERY_FLOOR: u64 = 5;

/// Desktop stand-in for the watch host: framebuffer, status bar, theme,
/// wall-clock RTC and a slowly draining simulated battery.
pub struct SimHost {
    draw: Draw565,
    bar: StatusBarWidget,
    theme: Theme,
    tick_period: Option<u32>,
    started: Instant,
}

impl SimHost {
    pub fn new() -> Self {
        SimHost {
            draw: Draw565::new(),
            bar: StatusBarWidget::default(),
            theme: Theme::default(),
            tick_period: None,
            started: Instant::now(),
        }
    }

    /// Tick period the foreground app asked for, if any.
    pub fn tick_period(&self) -> Option<u32> {
        self.tick_period
    }

    /// Read access to the framebuffer for presentation.
    pub fn framebuffer(&self) -> &Draw565 {
        &self.draw
    }

    fn battery_percent(&self) -> u8 {
        let drained = self.started.elapsed().as_secs() / 60 * BATTERY_DRAIN_PER_MIN;
        (100u64.saturating_sub(drained)).max(BATTERY_FLOOR) as u8
    }
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SimHost {
    type Draw = Draw565;

    fn drawable(&mut self) -> &mut Draw565 {
        &mut self.draw
    }

    fn theme(&self, slot: ThemeSlot) -> Color {
        self.theme.resolve(slot)
    }

    fn request_tick(&mut self, period_ms: u32) {
        log::debug!("tick requested every {period_ms} ms");
        self.tick_period = Some(period_ms);
    }

    fn rtc_time(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }

    fn bar_set_clock(&mut self, enabled: bool) {
        self.bar.clock = enabled;
    }

    fn bar_draw(&mut self) {
        let now = self.rtc_time();
        let battery = self.battery_percent();
        self.bar.draw(&mut self.draw, &self.theme, now, battery);
    }

    fn bar_update(&mut self) -> bool {
        let now = self.rtc_time();
        let battery = self.battery_percent();
        self.bar.update(&mut self.draw, &self.theme, now, battery)
    }
}
