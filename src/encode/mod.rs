//! WS281x protocol encoding.
//!
//! Transforms the 3-bytes-per-pixel framebuffer into a timed sequence a
//! transmit peripheral can play back. Two interchangeable strategies exist:
//! [`PulseTrainEncoder`] for peripherals that consume (level, duration)
//! pulse items, and [`DutyCycleEncoder`] for timer-PWM peripherals fed one
//! compare value per bit period.
//!
//! Both strategies iterate pixels first, then the three stored bytes of a
//! pixel in storage order, then the bits of a byte most-significant first.
//! That nesting is the protocol contract; changing it corrupts the colors
//! on the wire.

mod duty;
mod pulse;

use embassy_time::Duration;

pub use duty::{DutyCycleEncoder, RESET_SLOTS};
pub use pulse::{PulseItem, PulseTrainEncoder};

/// Total duration of one protocol bit.
pub const BIT_PERIOD_NS: u32 = 1_250;

/// High time encoding a 0 bit.
pub const BIT_0_HIGH_NS: u32 = 400;

/// High time encoding a 1 bit.
pub const BIT_1_HIGH_NS: u32 = 800;

/// Minimum sustained low time that latches a frame into the strip.
///
/// Pulse-train peripherals must keep the line low at least this long after
/// a sequence; the duty-cycle strategy embeds an equivalent tail instead.
pub const RESET_LATCH: Duration = Duration::from_micros(50);

/// Protocol bits per pixel (three 8-bit channels).
pub const BITS_PER_PIXEL: usize = 24;

/// Timing-encoding strategy over a framebuffer.
pub trait Encoder {
    /// Element type of the produced sequence.
    type Unit: Copy + Default;

    /// Exact sequence length for a strip of `pixel_count` pixels.
    fn encoded_len(pixel_count: usize) -> usize;

    /// Encode `pixels` into `out`, returning the number of units written.
    ///
    /// `out` must hold at least [`Self::encoded_len`] units for
    /// `pixels.len()`.
    fn encode(&self, pixels: &[[u8; 3]], out: &mut [Self::Unit]) -> usize;
}

/// Sequence length of the pulse-item strategy for `pixel_count` pixels.
pub const fn pulse_sequence_len(pixel_count: usize) -> usize {
    pixel_count * BITS_PER_PIXEL
}

/// Sequence length of the duty-cycle strategy for `pixel_count` pixels.
pub const fn duty_sequence_len(pixel_count: usize) -> usize {
    pixel_count * BITS_PER_PIXEL + RESET_SLOTS
}

/// Error deriving bit timings: the peripheral clock is too slow to resolve
/// the protocol's short high pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingError;

/// Clock ticks covering `ns` nanoseconds at `rate_hz`, truncated.
const fn ticks(rate_hz: u32, ns: u32) -> u16 {
    // Fits u16 for any u32 rate: 2^32 Hz over one bit period is 5369 ticks.
    ((rate_hz as u64 * ns as u64) / 1_000_000_000) as u16
}

/// Derive the (period, bit-0 high, bit-1 high) tick counts for a clock.
pub(crate) const fn bit_ticks(rate_hz: u32) -> Result<(u16, u16, u16), TimingError> {
    let period = ticks(rate_hz, BIT_PERIOD_NS);
    let t0h = ticks(rate_hz, BIT_0_HIGH_NS);
    let t1h = ticks(rate_hz, BIT_1_HIGH_NS);
    if t0h == 0 {
        return Err(TimingError);
    }
    Ok((period, t0h, t1h))
}
