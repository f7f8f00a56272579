/// A 1-bit-per-pixel bitmap asset.
///
/// Rows are packed MSB-first and padded to whole bytes. `scale` is an
/// integer upscale applied when the bitmap is blitted: each set bit becomes
/// a `scale x scale` block. Small glyph-style assets can therefore be kept
/// as short const tables and still cover a useful chunk of the display.
#[derive(Copy, Clone, Debug)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub data: &'static [u8],
}

impl Bitmap {
    /// Whether the pixel at unscaled coordinates (`x`, `y`) is set.
    #[inline]
    pub fn bit(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height);
        let row_bytes = (self.width + 7) / 8;
        let byte = self.data[(y * row_bytes + x / 8) as usize];
        (byte >> (7 - x % 8)) & 1 == 1
    }

    /// Width in display pixels once the scale is applied.
    #[inline]
    pub const fn scaled_width(&self) -> u32 {
        self.width * self.scale
    }

    /// Height in display pixels once the scale is applied.
    #[inline]
    pub const fn scaled_height(&self) -> u32 {
        self.height * self.scale
    }
}
