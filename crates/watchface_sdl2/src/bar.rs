//! Simulated status bar: battery meter plus an optional clock, drawn in the
//! top strip of the display. Faces that render their own time switch the
//! clock off through `Host::bar_set_clock`.

use bitflags::bitflags;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_10_POINT;

use watchface_common::{Color, Theme, ThemeSlot, DISPLAY_WIDTH};

use crate::draw::{eg, Draw565};

/// Height of the strip the bar may draw into.
pub const BAR_HEIGHT: u32 = 24;

const BATTERY_X: i32 = 212;
const BATTERY_Y: i32 = 6;
const BATTERY_W: u32 = 22;
const BATTERY_H: u32 = 12;
/// Battery percentage at or below which the meter turns red.
const BATTERY_LOW: u8 = 20;

const CLOCK_X: i32 = 6;
const CLOCK_Y: i32 = 5;
const CLOCK_FIELD_W: u32 = 48;

bitflags! {
    /// Bar elements that need repainting on a partial update.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct BarDirty: u8 {
        const CLOCK = 1;
        const BATTERY = 1 << 1;
    }
}

pub struct StatusBarWidget {
    /// Whether the bar renders its own HH:MM clock.
    pub clock: bool,
    shown_minute: Option<i64>,
    shown_battery: Option<u8>,
}

impl Default for StatusBarWidget {
    fn default() -> Self {
        StatusBarWidget {
            clock: true,
            shown_minute: None,
            shown_battery: None,
        }
    }
}

impl StatusBarWidget {
    /// Unconditional full redraw of the strip.
    pub fn draw(&mut self, draw: &mut Draw565, theme: &Theme, now: f64, battery: u8) {
        let _ = Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(eg(Color::BLACK)))
            .draw(draw);

        self.draw_battery(draw, theme, battery);
        if self.clock {
            self.draw_clock(draw, theme, now);
        }
        self.shown_battery = Some(battery);
        self.shown_minute = Some(minute_index(now));
    }

    /// Partial refresh: repaint only the elements whose displayed value
    /// changed. Returns whether anything was repainted.
    pub fn update(&mut self, draw: &mut Draw565, theme: &Theme, now: f64, battery: u8) -> bool {
        let mut dirty = BarDirty::empty();
        if self.shown_battery != Some(battery) {
            dirty |= BarDirty::BATTERY;
        }
        if self.clock && self.shown_minute != Some(minute_index(now)) {
            dirty |= BarDirty::CLOCK;
        }

        if dirty.contains(BarDirty::BATTERY) {
            self.draw_battery(draw, theme, battery);
            self.shown_battery = Some(battery);
        }
        if dirty.contains(BarDirty::CLOCK) {
            self.draw_clock(draw, theme, now);
            self.shown_minute = Some(minute_index(now));
        }

        !dirty.is_empty()
    }

    fn draw_battery(&self, draw: &mut Draw565, theme: &Theme, battery: u8) {
        let mid = eg(theme.resolve(ThemeSlot::Mid));

        let _ = Rectangle::new(
            Point::new(BATTERY_X, BATTERY_Y),
            Size::new(BATTERY_W, BATTERY_H),
        )
        .into_styled(PrimitiveStyle::with_stroke(mid, 1))
        .draw(draw);

        // Terminal nub on the right edge.
        let _ = Rectangle::new(
            Point::new(BATTERY_X + BATTERY_W as i32, BATTERY_Y + 3),
            Size::new(2, BATTERY_H - 6),
        )
        .into_styled(PrimitiveStyle::with_fill(mid))
        .draw(draw);

        // Clear the interior, then fill it proportionally to the charge.
        let inner_w = BATTERY_W - 4;
        let _ = Rectangle::new(
            Point::new(BATTERY_X + 2, BATTERY_Y + 2),
            Size::new(inner_w, BATTERY_H - 4),
        )
        .into_styled(PrimitiveStyle::with_fill(eg(Color::BLACK)))
        .draw(draw);

        let level = battery.min(100) as u32 * inner_w / 100;
        let fill = if battery <= BATTERY_LOW {
            eg(Color::RED)
        } else {
            eg(Color::GREEN)
        };
        let _ = Rectangle::new(
            Point::new(BATTERY_X + 2, BATTERY_Y + 2),
            Size::new(level, BATTERY_H - 4),
        )
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(draw);
    }

    fn draw_clock(&self, draw: &mut Draw565, theme: &Theme, now: f64) {
        let field = Rectangle::new(
            Point::new(CLOCK_X, CLOCK_Y),
            Size::new(CLOCK_FIELD_W, PROFONT_10_POINT.character_size.height),
        );
        let _ = field
            .into_styled(PrimitiveStyle::with_fill(eg(Color::BLACK)))
            .draw(draw);

        let style = MonoTextStyle::new(&PROFONT_10_POINT, eg(theme.resolve(ThemeSlot::Bright)));
        let _ = Text::with_baseline(
            &clock_text(now),
            Point::new(CLOCK_X, CLOCK_Y),
            style,
            Baseline::Top,
        )
        .draw(draw);
    }
}

fn minute_index(now: f64) -> i64 {
    (now.floor() as i64).div_euclid(60)
}

fn clock_text(now: f64) -> String {
    let secs = now.floor() as i64;
    let hours = secs.div_euclid(3600).rem_euclid(24);
    let minutes = secs.div_euclid(60).rem_euclid(60);
    format!("{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_text_wraps_at_midnight() {
        assert_eq!(clock_text(0.0), "00:00");
        assert_eq!(clock_text(86_399.9), "23:59");
        assert_eq!(clock_text(86_400.0), "00:00");
        assert_eq!(clock_text(45_296.5), "12:34");
    }

    #[test]
    fn update_is_quiet_when_nothing_changed() {
        let mut draw = Draw565::new();
        let theme = Theme::default();
        let mut bar = StatusBarWidget::default();

        bar.draw(&mut draw, &theme, 1_000.0, 80);
        assert!(!bar.update(&mut draw, &theme, 1_000.9, 80));
    }

    #[test]
    fn update_reports_battery_change() {
        let mut draw = Draw565::new();
        let theme = Theme::default();
        let mut bar = StatusBarWidget::default();

        bar.draw(&mut draw, &theme, 1_000.0, 80);
        assert!(bar.update(&mut draw, &theme, 1_000.9, 79));
        // Second call with the same value is quiet again.
        assert!(!bar.update(&mut draw, &theme, 1_000.9, 79));
    }

    #[test]
    fn minute_rollover_repaints_only_with_clock_enabled() {
        let mut draw = Draw565::new();
        let theme = Theme::default();

        let mut bar = StatusBarWidget::default();
        bar.clock = false;
        bar.draw(&mut draw, &theme, 59.0, 80);
        assert!(!bar.update(&mut draw, &theme, 61.0, 80));

        let mut bar = StatusBarWidget::default();
        bar.draw(&mut draw, &theme, 59.0, 80);
        assert!(bar.update(&mut draw, &theme, 61.0, 80));
    }
}
