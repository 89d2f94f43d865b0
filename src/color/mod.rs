//! Packed color decoding, channel ordering and format conversions.

pub mod named;

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Wire-level channel sequence expected by the LED chain.
///
/// WS2812B strips usually want [`ColorOrder::Grb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
    Grb,
}

impl ColorOrder {
    /// Permute a channel triple into wire order.
    pub const fn apply(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Rgb => [color.r, color.g, color.b],
            Self::Bgr => [color.b, color.g, color.r],
            Self::Grb => [color.g, color.r, color.b],
        }
    }
}

/// Unpack a packed color value, auto-detecting its format by magnitude.
///
/// Values up to `0xFFFF` are treated as RGB565, larger values as RGB888.
/// Bits above the low 24 are ignored. Every input decodes to some triple.
///
/// The detection is purely magnitude based: an RGB888 value whose top byte
/// is zero (e.g. `0x0000FF`) is indistinguishable from an RGB565 value and
/// decodes as RGB565. Use [`unpack_565`]/[`unpack_888`] when the format is
/// known.
pub const fn unpack(color: u32) -> Rgb {
    let color = color & 0x00FF_FFFF;
    if color <= 0xFFFF {
        unpack_565(color as u16)
    } else {
        unpack_888(color)
    }
}

/// Unpack an RGB565 value into 8-bit channels.
///
/// Each field is shifted into the top of its byte; the low bits stay zero,
/// so full-scale red is `(248, 0, 0)`.
pub const fn unpack_565(color: u16) -> Rgb {
    Rgb {
        r: ((color >> 8) & 0xF8) as u8,
        g: ((color >> 3) & 0xFC) as u8,
        b: ((color << 3) & 0xF8) as u8,
    }
}

/// Unpack an RGB888 value into 8-bit channels.
pub const fn unpack_888(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack 8-bit channels into RGB565.
pub const fn rgb_to_565(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3)
}

/// Pack 8-bit channels into RGB888.
pub const fn rgb_to_888(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Expand a packed RGB565 value to RGB888.
///
/// Uses bit replication so that full-scale fields map to `0xFF`.
pub const fn rgb565_to_888(color: u16) -> u32 {
    let color = color as u32;
    let r = ((color & 0xF800) >> 8) | ((color & 0xE000) >> 13);
    let g = ((color & 0x07E0) >> 3) | ((color & 0x0600) >> 9);
    let b = ((color & 0x001F) << 3) | ((color & 0x001C) >> 2);
    (r << 16) | (g << 8) | b
}

/// Reduce a packed RGB888 value to RGB565.
pub const fn rgb888_to_565(color: u32) -> u16 {
    (((color & 0x00F8_0000) >> 8) | ((color & 0x0000_FC00) >> 5) | ((color & 0x0000_00F8) >> 3))
        as u16
}
