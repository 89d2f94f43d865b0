//! Pulse-item encoding for pulse-train peripherals (e.g. ESP32 RMT).

use super::{BITS_PER_PIXEL, Encoder, TimingError, bit_ticks};

/// One protocol bit as a high segment followed by a low segment, both in
/// peripheral clock ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseItem {
    pub high_ticks: u16,
    pub low_ticks: u16,
}

/// Encoder producing one [`PulseItem`] per protocol bit.
///
/// Emits no reset tail: the peripheral must guarantee an idle-low line for
/// at least [`RESET_LATCH`](super::RESET_LATCH) after the sequence. If it
/// cannot, use [`DutyCycleEncoder`](super::DutyCycleEncoder) instead, which
/// embeds the latch tail in the sequence.
#[derive(Debug, Clone, Copy)]
pub struct PulseTrainEncoder {
    zero: PulseItem,
    one: PulseItem,
}

impl PulseTrainEncoder {
    /// Derive bit timings from the peripheral tick rate.
    ///
    /// At the 40 MHz tick rate common for RMT this yields 16/34 ticks for a
    /// 0 bit and 32/18 ticks for a 1 bit.
    pub const fn new(tick_rate_hz: u32) -> Result<Self, TimingError> {
        let (period, t0h, t1h) = match bit_ticks(tick_rate_hz) {
            Ok(t) => t,
            Err(e) => return Err(e),
        };
        Ok(Self {
            zero: PulseItem {
                high_ticks: t0h,
                low_ticks: period - t0h,
            },
            one: PulseItem {
                high_ticks: t1h,
                low_ticks: period - t1h,
            },
        })
    }

    /// Pulse pair encoding a 0 bit.
    pub const fn zero(&self) -> PulseItem {
        self.zero
    }

    /// Pulse pair encoding a 1 bit.
    pub const fn one(&self) -> PulseItem {
        self.one
    }
}

impl Encoder for PulseTrainEncoder {
    type Unit = PulseItem;

    fn encoded_len(pixel_count: usize) -> usize {
        pixel_count * BITS_PER_PIXEL
    }

    fn encode(&self, pixels: &[[u8; 3]], out: &mut [PulseItem]) -> usize {
        assert!(out.len() >= Self::encoded_len(pixels.len()));

        let mut index = 0;
        for pixel in pixels {
            for &byte in pixel {
                for bit in (0..8).rev() {
                    out[index] = if (byte >> bit) & 1 != 0 {
                        self.one
                    } else {
                        self.zero
                    };
                    index += 1;
                }
            }
        }
        index
    }
}
