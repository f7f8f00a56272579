use crate::color::Color;

/// Named slots in the host theme.
///
/// Faces resolve colors by slot instead of hard-coding palette values, so a
/// host can restyle every face at once. Only the slots the shipped faces
/// actually use are defined.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ThemeSlot {
    /// Primary foreground, e.g. headings.
    Bright,
    /// Secondary foreground, e.g. chrome and decorations.
    Mid,
}

/// A host color theme: a slot-to-color lookup table.
#[derive(Copy, Clone, Debug)]
pub struct Theme {
    pub bright: Color,
    pub mid: Color,
}

impl Theme {
    pub const fn resolve(&self, slot: ThemeSlot) -> Color {
        match slot {
            ThemeSlot::Bright => self.bright,
            ThemeSlot::Mid => self.mid,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bright: Color::WHITE,
            mid: Color(0x7bcf),
        }
    }
}
