use watchface_common::Bitmap;

// Shell-prompt glyph (">_"), drawn as a chevron with an underscore. Kept as
// a 32x24 1-bpp table and blitted at 3x, so the asset stays 96 bytes.
const PROMPT_ROWS: [u32; 24] = [
    0xf000_0000,
    0x7800_0000,
    0x3c00_0000,
    0x1e00_0000,
    0x0f00_0000,
    0x0780_0000,
    0x03c0_0000,
    0x01e0_0000,
    0x00f0_0000,
    0x0078_0000,
    0x003c_0000,
    0x001e_0000,
    0x001e_0000,
    0x003c_0000,
    0x0078_0000,
    0x00f0_0000,
    0x01e0_0000,
    0x03c0_0000,
    0x0780_0000,
    0x0f00_0000,
    0x1e00_fffe,
    0x3c00_fffe,
    0x7800_fffe,
    0xf000_0000,
];

const fn pack_rows(rows: [u32; 24]) -> [u8; 96] {
    let mut out = [0u8; 96];
    let mut i = 0;
    while i < rows.len() {
        let bytes = rows[i].to_be_bytes();
        out[i * 4] = bytes[0];
        out[i * 4 + 1] = bytes[1];
        out[i * 4 + 2] = bytes[2];
        out[i * 4 + 3] = bytes[3];
        i += 1;
    }
    out
}

const PROMPT_DATA: [u8; 96] = pack_rows(PROMPT_ROWS);

/// The face logo, 96x72 display pixels once scaled.
pub const PROMPT: Bitmap = Bitmap {
    width: 32,
    height: 24,
    scale: 3,
    data: &PROMPT_DATA,
};
