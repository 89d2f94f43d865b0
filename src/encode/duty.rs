//! Duty-cycle encoding for timer-PWM peripherals driven by a transfer
//! engine (e.g. STM32 timer + DMA).

use super::{BITS_PER_PIXEL, Encoder, TimingError, bit_ticks};

/// Zero samples appended after the pixel data.
///
/// 50 bit periods of 1.25 µs keep the line low for 62.5 µs, beyond the
/// protocol's minimum latch time.
pub const RESET_SLOTS: usize = 50;

/// Encoder producing one PWM compare value per protocol bit.
///
/// The timer must run with its auto-reload register set to
/// [`auto_reload`](Self::auto_reload) and a prescaler of zero, so each
/// counter period spans exactly one protocol bit.
#[derive(Debug, Clone, Copy)]
pub struct DutyCycleEncoder {
    low_duty: u16,
    high_duty: u16,
    auto_reload: u16,
}

impl DutyCycleEncoder {
    /// Derive compare levels from the timer bus rate.
    ///
    /// At 72 MHz this yields a low duty of 28, a high duty of 57 and an
    /// auto-reload value of 89.
    pub const fn new(bus_rate_hz: u32) -> Result<Self, TimingError> {
        let (period, t0h, t1h) = match bit_ticks(bus_rate_hz) {
            Ok(t) => t,
            Err(e) => return Err(e),
        };
        Ok(Self {
            low_duty: t0h,
            high_duty: t1h,
            auto_reload: period - 1,
        })
    }

    /// Compare value encoding a 0 bit.
    pub const fn low_duty(&self) -> u16 {
        self.low_duty
    }

    /// Compare value encoding a 1 bit.
    pub const fn high_duty(&self) -> u16 {
        self.high_duty
    }

    /// Counter auto-reload value spanning one bit period.
    pub const fn auto_reload(&self) -> u16 {
        self.auto_reload
    }
}

impl Encoder for DutyCycleEncoder {
    type Unit = u16;

    fn encoded_len(pixel_count: usize) -> usize {
        pixel_count * BITS_PER_PIXEL + RESET_SLOTS
    }

    fn encode(&self, pixels: &[[u8; 3]], out: &mut [u16]) -> usize {
        assert!(out.len() >= Self::encoded_len(pixels.len()));

        let mut index = 0;
        for pixel in pixels {
            for &byte in pixel {
                for bit in (0..8).rev() {
                    out[index] = if (byte >> bit) & 1 != 0 {
                        self.high_duty
                    } else {
                        self.low_duty
                    };
                    index += 1;
                }
            }
        }
        // Latch tail: hold the line low long enough to reset the strip.
        for slot in &mut out[index..index + RESET_SLOTS] {
            *slot = 0;
        }
        index + RESET_SLOTS
    }
}
