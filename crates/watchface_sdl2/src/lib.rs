//! SDL2 simulated watch host.
//!
//! Presents the in-memory framebuffer in a window and plays the host
//! scheduler role: it activates the face, delivers periodic ticks at the
//! requested cadence while awake, and maps keys onto the remaining
//! lifecycle events (`S` sleeps, any key wakes, `P` previews).

use std::time::{Duration, Instant};

use anyhow::Result;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use watchface_common::{WatchApp, DISPLAY_HEIGHT, DISPLAY_WIDTH};

mod bar;
mod draw;
mod host;

pub use bar::{StatusBarWidget, BAR_HEIGHT};
pub use draw::Draw565;
pub use host::SimHost;

/// Frame cadence of the presentation loop. Tick delivery is gated on the
/// app-requested period separately; this only bounds event latency.
const FRAME_TIME: Duration = Duration::from_millis(16);

#[derive(TypedBuilder)]
pub struct WatchInitInfo {
    pub title: String,
    #[builder(default = DISPLAY_WIDTH)]
    pub width: u32,
    #[builder(default = DISPLAY_HEIGHT)]
    pub height: u32,
    #[builder(default = 2)]
    pub scale: u32,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(
        init_info: WatchInitInfo,
        mut watch_host: SimHost,
        mut app: impl WatchApp<SimHost>,
    ) -> Result<()> {
        let WatchInitInfo {
            title,
            width,
            height,
            scale,
        } = init_info;

        let sdl_context = sdl2::init().unwrap();
        let video_subsystem = sdl_context.video().unwrap();
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas.set_scale(scale as f32, scale as f32).unwrap();
        let creator = canvas.texture_creator();
        let mut texture = creator
            .create_texture_target(PixelFormatEnum::RGB24, width, height)
            .unwrap();

        let mut screen_state = vec![0u8; (width * height * 3) as usize];

        app.activate(&mut watch_host);
        let mut awake = true;
        let mut last_tick = Instant::now();
        let mut event_pump = sdl_context.event_pump().unwrap();

        'running: loop {
            while let Some(event) = event_pump.poll_event() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'running,
                    Event::KeyDown {
                        keycode: Some(Keycode::S),
                        ..
                    } if awake => {
                        if app.prepare_sleep(&mut watch_host) {
                            log::info!("{}: sleeping, app stays active", app.name());
                        } else {
                            log::info!("{}: sleeping, would switch to default app", app.name());
                        }
                        awake = false;
                    }
                    Event::KeyDown {
                        keycode: Some(Keycode::P),
                        ..
                    } if awake => {
                        app.preview(&mut watch_host);
                    }
                    Event::KeyDown { .. } if !awake => {
                        app.wake(&mut watch_host);
                        awake = true;
                        last_tick = Instant::now();
                    }
                    _ => {}
                }
            }

            if awake {
                if let Some(period) = watch_host.tick_period() {
                    let period = u64::from(period.max(1));
                    let elapsed = last_tick.elapsed().as_millis() as u64;
                    if elapsed >= period {
                        let ticks = elapsed / period;
                        app.tick(&mut watch_host, ticks as u32);
                        last_tick += Duration::from_millis(ticks * period);
                    }
                }
                watch_host.framebuffer().copy_rgb24(&mut screen_state);
            } else {
                // Display is off while sleeping.
                screen_state.fill(0);
            }

            texture
                .update(None, &screen_state, (width * 3) as usize)
                .unwrap();
            canvas.copy(&texture, None, None).unwrap();
            canvas.present();
            std::thread::sleep(FRAME_TIME);
        }

        Ok(())
    }
}
