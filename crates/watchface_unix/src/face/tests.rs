use super::*;
use watchface_common::Bitmap;

#[derive(Clone, Debug, PartialEq)]
enum DrawOp {
    Fill(Color),
    SetColor(Color),
    Blit { x: i32, y: i32, fg: Color },
    String { text: String, x: i32, y: i32, width: u32 },
}

#[derive(Default)]
struct FakeDraw {
    ops: Vec<DrawOp>,
}

impl Drawable for FakeDraw {
    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn set_color(&mut self, fg: Color) {
        self.ops.push(DrawOp::SetColor(fg));
    }

    fn blit(&mut self, _image: &Bitmap, x: i32, y: i32, fg: Color) {
        self.ops.push(DrawOp::Blit { x, y, fg });
    }

    fn string(&mut self, text: &str, x: i32, y: i32, width: u32) {
        self.ops.push(DrawOp::String {
            text: text.to_string(),
            x,
            y,
            width,
        });
    }
}

/// Scripted host double: the RTC value and the bar's change report are set
/// by each test, and every surface mutation is recorded.
struct FakeHost {
    draw: FakeDraw,
    now: f64,
    bar_changed: bool,
    bar_clock: bool,
    bar_draws: u32,
    bar_updates: u32,
    tick_requests: Vec<u32>,
}

impl FakeHost {
    fn new(now: f64) -> Self {
        FakeHost {
            draw: FakeDraw::default(),
            now,
            bar_changed: false,
            bar_clock: true,
            bar_draws: 0,
            bar_updates: 0,
            tick_requests: Vec::new(),
        }
    }

    fn ops(&self) -> &[DrawOp] {
        &self.draw.ops
    }

    fn clear_ops(&mut self) {
        self.draw.ops.clear();
    }
}

impl Host for FakeHost {
    type Draw = FakeDraw;

    fn drawable(&mut self) -> &mut FakeDraw {
        &mut self.draw
    }

    fn theme(&self, slot: ThemeSlot) -> Color {
        match slot {
            ThemeSlot::Bright => Color::WHITE,
            ThemeSlot::Mid => Color::GRAY,
        }
    }

    fn request_tick(&mut self, period_ms: u32) {
        self.tick_requests.push(period_ms);
    }

    fn rtc_time(&self) -> f64 {
        self.now
    }

    fn bar_set_clock(&mut self, enabled: bool) {
        self.bar_clock = enabled;
    }

    fn bar_draw(&mut self) {
        self.bar_draws += 1;
    }

    fn bar_update(&mut self) -> bool {
        self.bar_updates += 1;
        self.bar_changed
    }
}

fn time_field(ops: &[DrawOp]) -> Option<&DrawOp> {
    ops.iter()
        .rev()
        .find(|op| matches!(op, DrawOp::String { y, .. } if *y == TIME_Y))
}

#[test]
fn activate_performs_full_redraw() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();

    face.activate(&mut host);

    assert_eq!(face.state(), FaceState::Foreground);
    assert!(!host.bar_clock, "built-in bar clock must be suppressed");
    assert_eq!(host.bar_draws, 1);
    assert_eq!(host.tick_requests, vec![1000]);

    let ops = host.ops();
    assert_eq!(ops[0], DrawOp::Fill(Color::BLACK));
    assert!(ops
        .iter()
        .any(|op| matches!(op, DrawOp::Blit { x, y, .. } if *x == LOGO_X && *y == LOGO_Y)));
    assert!(ops
        .iter()
        .any(|op| matches!(op, DrawOp::String { text, .. } if text == "UNIX TIME")));
    assert_eq!(
        time_field(ops),
        Some(&DrawOp::String {
            text: "1700000000".to_string(),
            x: 0,
            y: TIME_Y,
            width: FIELD_WIDTH,
        })
    );
    assert_eq!(face.epoch, Some(1_700_000_000));
}

#[test]
fn tick_skips_when_nothing_changed() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();
    face.activate(&mut host);
    host.clear_ops();

    // Same whole second, bar quiet: must be a complete no-op on the surface.
    host.now = 1_700_000_000.9;
    host.bar_changed = false;
    face.tick(&mut host, 1);

    assert!(host.ops().is_empty());
    assert_eq!(host.bar_updates, 1);
    assert_eq!(face.epoch, Some(1_700_000_000));
}

#[test]
fn tick_redraws_when_second_advances() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();
    face.activate(&mut host);
    host.clear_ops();

    host.now = 1_700_000_001.1;
    face.tick(&mut host, 1);

    assert_eq!(
        host.ops(),
        &[
            DrawOp::SetColor(Color::CYBER_GREEN),
            DrawOp::String {
                text: "1700000001".to_string(),
                x: 0,
                y: TIME_Y,
                width: FIELD_WIDTH,
            },
        ]
    );
    assert_eq!(face.epoch, Some(1_700_000_001));
}

#[test]
fn bar_change_forces_time_redraw() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();
    face.activate(&mut host);
    host.clear_ops();

    // Epoch unchanged but the bar repainted something, so the time field is
    // refreshed as well.
    host.bar_changed = true;
    face.tick(&mut host, 1);

    assert!(time_field(host.ops()).is_some());
}

#[test]
fn wake_is_a_partial_update() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();
    face.activate(&mut host);

    assert!(face.prepare_sleep(&mut host));
    assert_eq!(face.state(), FaceState::Sleeping);
    host.clear_ops();

    host.now = 1_700_000_050.0;
    face.wake(&mut host);

    assert_eq!(face.state(), FaceState::Foreground);
    let ops = host.ops();
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::Fill(_))));
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::Blit { .. })));
    assert_eq!(
        time_field(ops),
        Some(&DrawOp::String {
            text: "1700000050".to_string(),
            x: 0,
            y: TIME_Y,
            width: FIELD_WIDTH,
        })
    );
}

#[test]
fn preview_requests_no_tick() {
    let mut host = FakeHost::new(1_700_000_000.4);
    let mut face = UnixClockFace::default();

    face.preview(&mut host);

    assert!(host.tick_requests.is_empty());
    assert!(!host.bar_clock);
    assert_eq!(host.bar_draws, 1);
    assert!(matches!(host.ops()[0], DrawOp::Fill(_)));
    assert!(time_field(host.ops()).is_some());
}

#[test]
fn digit_growth_reuses_the_same_field() {
    let mut host = FakeHost::new(999_999_999.9);
    let mut face = UnixClockFace::default();
    face.activate(&mut host);

    assert_eq!(
        time_field(host.ops()),
        Some(&DrawOp::String {
            text: "999999999".to_string(),
            x: 0,
            y: TIME_Y,
            width: FIELD_WIDTH,
        })
    );
    host.clear_ops();

    // One second later the string gains a tenth digit; same field, same
    // width, no special-casing.
    host.now = 1_000_000_000.1;
    face.tick(&mut host, 1);

    assert_eq!(
        time_field(host.ops()),
        Some(&DrawOp::String {
            text: "1000000000".to_string(),
            x: 0,
            y: TIME_Y,
            width: FIELD_WIDTH,
        })
    );
}

#[test]
fn pre_epoch_rtc_floors_downward() {
    let mut host = FakeHost::new(-0.5);
    let mut face = UnixClockFace::default();

    face.activate(&mut host);

    assert_eq!(
        time_field(host.ops()),
        Some(&DrawOp::String {
            text: "-1".to_string(),
            x: 0,
            y: TIME_Y,
            width: FIELD_WIDTH,
        })
    );
    assert_eq!(face.epoch, Some(-1));
}
