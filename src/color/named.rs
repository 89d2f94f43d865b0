//! Named color constants in both packed forms.
//!
//! Both tables decode to the same visible colors through
//! [`unpack`](super::unpack); the RGB565 values lose the low channel bits.

/// Named colors packed as RGB565.
pub mod rgb565 {
    pub const RED: u16 = 0xF800;
    pub const TAN: u16 = 0xD5B1;
    pub const GRAY: u16 = 0x8410;
    pub const GOLD: u16 = 0xFEA0;
    pub const BLUE: u16 = 0x001F;
    pub const CYAN: u16 = 0x07FF;
    pub const PINK: u16 = 0xFC18;
    pub const TEAL: u16 = 0x0410;
    pub const LIME: u16 = 0x07E0;
    pub const AQUA: u16 = 0x07FF;
    pub const NAVY: u16 = 0x000F;
    pub const OLIVE: u16 = 0x8400;
    pub const BLACK: u16 = 0x0000;
    pub const WHITE: u16 = 0xFFFF;
    pub const GREEN: u16 = 0x07E0;
    pub const BROWN: u16 = 0xA145;
    pub const CORAL: u16 = 0xFBEA;
    pub const INDIGO: u16 = 0x4810;
    pub const TOMATO: u16 = 0xFB08;
    pub const SILVER: u16 = 0xC618;
    pub const VIOLET: u16 = 0x8A16;
    pub const MAROON: u16 = 0x7800;
    pub const YELLOW: u16 = 0xFFE0;
    pub const ORANGE: u16 = 0xFD20;
    pub const PURPLE: u16 = 0x780F;
    pub const DIMGRAY: u16 = 0x6B4D;
    pub const CRIMSON: u16 = 0xD8A7;
    pub const MAGENTA: u16 = 0xF81F;
    pub const SKYBLUE: u16 = 0x867D;
    pub const LAVENDER: u16 = 0xE73F;
    pub const SEAGREEN: u16 = 0x2E5B;
    pub const CHOCOLATE: u16 = 0xD343;
    pub const FIREBRICK: u16 = 0xB104;
    pub const SLATEGRAY: u16 = 0x7412;
    pub const DARKORANGE: u16 = 0xFC60;
    pub const FORESTGREEN: u16 = 0x2444;
    pub const DARKSLATEGRAY: u16 = 0x2A69;
}

/// Named colors packed as RGB888.
pub mod rgb888 {
    pub const RED: u32 = 0xFF0000;
    pub const TAN: u32 = 0xD2B48C;
    pub const GRAY: u32 = 0x808080;
    pub const GOLD: u32 = 0xFFD700;
    pub const BLUE: u32 = 0x0000FF;
    pub const CYAN: u32 = 0x00FFFF;
    pub const PINK: u32 = 0xFFC0CB;
    pub const TEAL: u32 = 0x008080;
    pub const LIME: u32 = 0x00FF00;
    pub const AQUA: u32 = 0x00FFFF;
    pub const NAVY: u32 = 0x000080;
    pub const OLIVE: u32 = 0x808000;
    pub const BLACK: u32 = 0x000000;
    pub const WHITE: u32 = 0xFFFFFF;
    pub const GREEN: u32 = 0x00FF00;
    pub const BROWN: u32 = 0xA52A2A;
    pub const CORAL: u32 = 0xFF7F50;
    pub const INDIGO: u32 = 0x4B0082;
    pub const TOMATO: u32 = 0xFF6347;
    pub const SILVER: u32 = 0xC0C0C0;
    pub const VIOLET: u32 = 0x8A2BE2;
    pub const MAROON: u32 = 0x800000;
    pub const YELLOW: u32 = 0xFFFF00;
    pub const ORANGE: u32 = 0xFFA500;
    pub const PURPLE: u32 = 0x800080;
    pub const DIMGRAY: u32 = 0x696969;
    pub const CRIMSON: u32 = 0xDC143C;
    pub const MAGENTA: u32 = 0xFF00FF;
    pub const SKYBLUE: u32 = 0x87CEEB;
    pub const LAVENDER: u32 = 0xE6E6FA;
    pub const SEAGREEN: u32 = 0x2E8B57;
    pub const CHOCOLATE: u32 = 0xD2691E;
    pub const FIREBRICK: u32 = 0xB22222;
    pub const SLATEGRAY: u32 = 0x708090;
    pub const DARKORANGE: u32 = 0xFF8C00;
    pub const FORESTGREEN: u32 = 0x228B22;
    pub const DARKSLATEGRAY: u32 = 0x2F4F4F;
}
