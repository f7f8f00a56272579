use core::convert::Infallible;

use embedded_graphics::draw_target::{DrawTarget, DrawTargetExt};
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
// The embedded-graphics `Drawable` is aliased so it cannot be confused with
// the watch surface trait of the same name.
use embedded_graphics::{Drawable as EgDrawable, Pixel};
use profont::PROFONT_24_POINT;

use watchface_common::{Bitmap, Color, Drawable, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Font used for face strings.
const FONT: &MonoFont = &PROFONT_24_POINT;

/// Convert a packed RGB565 color into the embedded-graphics equivalent.
pub(crate) fn eg(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.0))
}

/// The simulated display: a 240x240 RGB565 framebuffer.
///
/// Implements the `Drawable` surface the faces draw through, and
/// `embedded_graphics::DrawTarget` so text and primitives can be rendered
/// with the usual ecosystem tools instead of a hand-rolled rasterizer.
pub struct Draw565 {
    pixels: Vec<u16>,
    fg: Color,
}

impl Draw565 {
    pub fn new() -> Self {
        Draw565 {
            pixels: vec![0; (DISPLAY_WIDTH * DISPLAY_HEIGHT) as usize],
            fg: Color::WHITE,
        }
    }

    #[inline]
    fn set_px(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= DISPLAY_WIDTH as i32 || y >= DISPLAY_HEIGHT as i32 {
            return;
        }
        self.pixels[(y as u32 * DISPLAY_WIDTH + x as u32) as usize] = color.0;
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color(self.pixels[(y * DISPLAY_WIDTH + x) as usize])
    }

    /// Copy the framebuffer into an RGB24 buffer laid out for an SDL
    /// texture upload (3 bytes per pixel, row major).
    pub fn copy_rgb24(&self, out: &mut [u8]) {
        for (i, px) in self.pixels.iter().enumerate() {
            let (r, g, b) = Color(*px).rgb888();
            out[i * 3] = r;
            out[i * 3 + 1] = g;
            out[i * 3 + 2] = b;
        }
    }
}

impl Default for Draw565 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Draw565 {
    fn fill(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    fn set_color(&mut self, fg: Color) {
        self.fg = fg;
    }

    fn blit(&mut self, image: &Bitmap, x: i32, y: i32, fg: Color) {
        let scale = image.scale.max(1) as i32;
        for row in 0..image.height {
            for col in 0..image.width {
                let color = if image.bit(col, row) { fg } else { Color::BLACK };
                let px = x + col as i32 * scale;
                let py = y + row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        self.set_px(px + dx, py + dy, color);
                    }
                }
            }
        }
    }

    fn string(&mut self, text: &str, x: i32, y: i32, width: u32) {
        let line_height = FONT.character_size.height;
        let field = Rectangle::new(Point::new(x, y), Size::new(width, line_height));

        // Blank the whole field first. A shorter string must fully replace
        // a longer one, whatever the draw below ends up covering.
        let _ = field
            .into_styled(PrimitiveStyle::with_fill(eg(Color::BLACK)))
            .draw(self);

        let advance = FONT.character_size.width + FONT.character_spacing;
        let text_width = text.chars().count() as u32 * advance;
        let offset = width.saturating_sub(text_width) / 2;

        let style = MonoTextStyle::new(FONT, eg(self.fg));
        let mut clipped = self.clipped(&field);
        let _ = Text::with_baseline(
            text,
            Point::new(x + offset as i32, y),
            style,
            Baseline::Top,
        )
        .draw(&mut clipped);
    }
}

impl OriginDimensions for Draw565 {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for Draw565 {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_px(point.x, point.y, Color(color.into_storage()));
        }
        Ok(())
    }
}
