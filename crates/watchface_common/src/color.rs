/// A color in RGB565 format, as stored in the display framebuffer.
///
/// The watch display works in 16-bit color: 5 bits red, 6 bits green,
/// 5 bits blue. Keeping the packed representation here means assets and
/// theme tables can be written as plain `u16` literals.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xffff);
    pub const RED: Color = Color(0xf800);
    pub const GREEN: Color = Color(0x07e0);
    pub const BLUE: Color = Color(0x001f);
    pub const GRAY: Color = Color(0x7bef);

    /// The phosphor green used for the epoch digits.
    pub const CYBER_GREEN: Color = Color(0x3640);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | (b as u16 >> 3))
    }

    /// Red channel (0..=31).
    #[inline]
    pub const fn r(&self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0..=63).
    #[inline]
    pub const fn g(&self) -> u8 {
        ((self.0 >> 5) & 0x3f) as u8
    }

    /// Blue channel (0..=31).
    #[inline]
    pub const fn b(&self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    /// Expand to 8-bit-per-channel RGB, replicating the high bits into the
    /// low bits so full-scale channels map to 0xff.
    pub const fn rgb888(&self) -> (u8, u8, u8) {
        let r = self.r() << 3;
        let g = self.g() << 2;
        let b = self.b() << 3;
        (r | (r >> 5), g | (g >> 6), b | (b >> 5))
    }

    /// Raise every channel by `step`, saturating at full scale. Green gets
    /// twice the step since it carries 6 bits instead of 5.
    pub fn lighten(self, step: u8) -> Color {
        let r = (self.r() as u16 + step as u16).min(31);
        let g = (self.g() as u16 + step as u16 * 2).min(63);
        let b = (self.b() as u16 + step as u16).min(31);
        Color((r << 11) | (g << 5) | b)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn rgb888_expands_full_scale() {
        assert_eq!(Color::WHITE.rgb888(), (0xff, 0xff, 0xff));
        assert_eq!(Color::BLACK.rgb888(), (0, 0, 0));
        assert_eq!(Color::RED.rgb888(), (0xff, 0, 0));
    }

    #[test]
    fn new_rgb_round_trips_channels() {
        let c = Color::new_rgb(0xf8, 0xfc, 0xf8);
        assert_eq!(c, Color::WHITE);
        assert_eq!(Color::new_rgb(0, 0, 0), Color::BLACK);
    }

    #[test]
    fn lighten_saturates() {
        assert_eq!(Color::WHITE.lighten(5), Color::WHITE);
        let c = Color::BLACK.lighten(1);
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 1));
    }
}
