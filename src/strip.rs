//! Fixed-capacity pixel framebuffer and the strip driver surface.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{self, ColorOrder, Rgb};
use crate::encode::Encoder;
use crate::gamma;
use crate::transfer::{TransferFlag, TransferState};
use crate::{Completion, Transmitter};

/// Strip driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Pixel write past the end of the framebuffer; nothing was modified.
    IndexOutOfRange,
    /// `show` was called before `begin` supplied the bit timings.
    NotInitialized,
    /// A previous transfer is still reading the sequence buffer.
    Busy,
    /// The transmit peripheral could not start or complete the transfer.
    Transfer(E),
}

/// Addressable LED strip driver.
///
/// Owns a framebuffer of `N` pixels (3 bytes each, stored in wire order)
/// and a sequence buffer of `BUF` encoding units. Size `BUF` with
/// [`pulse_sequence_len`](crate::pulse_sequence_len) or
/// [`duty_sequence_len`](crate::duty_sequence_len) for `N`:
///
/// ```ignore
/// let mut strip: Strip<RmtTransmitter, PulseTrainEncoder, 8, { pulse_sequence_len(8) }> =
///     Strip::new(transmitter);
/// strip.begin(PulseTrainEncoder::new(40_000_000)?);
/// strip.set_pixel_color(0, color::named::rgb888::RED)?;
/// strip.show()?;
/// ```
pub struct Strip<T, E, const N: usize, const BUF: usize>
where
    T: Transmitter<Unit = E::Unit>,
    E: Encoder,
{
    pixels: [[u8; 3]; N],
    order: ColorOrder,
    encoder: Option<E>,
    sequence: [E::Unit; BUF],
    transmitter: T,
    flag: TransferFlag,
}

impl<T, E, const N: usize, const BUF: usize> Strip<T, E, N, BUF>
where
    T: Transmitter<Unit = E::Unit>,
    E: Encoder,
{
    /// Create a strip with the default RGB color order.
    ///
    /// # Panics
    ///
    /// Panics if `BUF` is smaller than the encoded sequence for `N` pixels.
    pub fn new(transmitter: T) -> Self {
        Self::with_order(transmitter, ColorOrder::default())
    }

    /// Create a strip with an explicit default color order.
    pub fn with_order(transmitter: T, order: ColorOrder) -> Self {
        assert!(
            BUF >= E::encoded_len(N),
            "sequence buffer too small for pixel count"
        );
        Self {
            pixels: [[0; 3]; N],
            order,
            encoder: None,
            sequence: [<E::Unit>::default(); BUF],
            transmitter,
            flag: TransferFlag::new(),
        }
    }

    /// Supply the derived bit timings. Must precede the first [`show`](Self::show).
    ///
    /// Build the encoder from the peripheral clock first
    /// (e.g. [`PulseTrainEncoder::new`](crate::PulseTrainEncoder::new)),
    /// which is where invalid peripheral configurations surface.
    pub fn begin(&mut self, encoder: E) {
        self.encoder = Some(encoder);
        #[cfg(feature = "esp32-log")]
        println!("[Strip.begin] bit timings configured");
    }

    /// Set a pixel from a packed color value using the default color order.
    ///
    /// The value is format-detected by magnitude (see
    /// [`color::unpack`](crate::color::unpack)), gamma corrected and stored
    /// in wire order.
    pub fn set_pixel_color(&mut self, index: usize, color: u32) -> Result<(), Error<T::Error>> {
        self.set_pixel_color_ordered(index, color, self.order)
    }

    /// Set a pixel from a packed color value with an explicit color order.
    ///
    /// The override applies to this write only; the stored bytes keep the
    /// order they were written with.
    pub fn set_pixel_color_ordered(
        &mut self,
        index: usize,
        color: u32,
        order: ColorOrder,
    ) -> Result<(), Error<T::Error>> {
        self.set_pixel_rgb_ordered(index, color::unpack(color), order)
    }

    /// Set a pixel from an explicit channel triple, bypassing packed-format
    /// detection.
    pub fn set_pixel_rgb(&mut self, index: usize, color: Rgb) -> Result<(), Error<T::Error>> {
        self.set_pixel_rgb_ordered(index, color, self.order)
    }

    fn set_pixel_rgb_ordered(
        &mut self,
        index: usize,
        color: Rgb,
        order: ColorOrder,
    ) -> Result<(), Error<T::Error>> {
        if index >= N {
            return Err(Error::IndexOutOfRange);
        }
        self.pixels[index] = order.apply(gamma::correct(color));
        Ok(())
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [[0; 3]; N];
    }

    /// Change the order used by writes that do not pass one explicitly.
    ///
    /// Already-written pixels keep their baked-in order.
    pub fn set_color_order(&mut self, order: ColorOrder) {
        self.order = order;
        #[cfg(feature = "esp32-log")]
        println!("[Strip.set_color_order] default order changed");
    }

    /// The current default color order.
    pub const fn color_order(&self) -> ColorOrder {
        self.order
    }

    /// Encode the framebuffer and hand the sequence to the transmitter.
    ///
    /// Fails with [`Error::NotInitialized`] before [`begin`](Self::begin)
    /// and with [`Error::Busy`] while a previous transfer is still in
    /// flight. A transfer reported as [`Completion::InFlight`] stays active
    /// until [`complete_transfer`](Self::complete_transfer) is called.
    pub fn show(&mut self) -> Result<(), Error<T::Error>> {
        let Some(encoder) = &self.encoder else {
            return Err(Error::NotInitialized);
        };
        if self.flag.is_active() {
            return Err(Error::Busy);
        }

        let len = encoder.encode(&self.pixels, &mut self.sequence);
        match self.transmitter.transmit(&self.sequence[..len]) {
            Ok(Completion::Complete) => Ok(()),
            Ok(Completion::InFlight) => {
                self.flag.activate();
                Ok(())
            }
            Err(e) => Err(Error::Transfer(e)),
        }
    }

    /// Mark the in-flight transfer as finished.
    pub fn complete_transfer(&self) {
        self.flag.finish();
    }

    /// State of the transfer backed by the sequence buffer.
    pub fn transfer_state(&self) -> TransferState {
        self.flag.state()
    }

    /// Shared flag handle, for clearing from a completion interrupt.
    pub const fn transfer_flag(&self) -> &TransferFlag {
        &self.flag
    }

    /// Number of pixels on the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the strip has zero pixels.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Stored wire-order bytes of one pixel.
    pub fn pixel(&self, index: usize) -> Option<[u8; 3]> {
        self.pixels.get(index).copied()
    }

    /// The whole framebuffer in wire order.
    pub const fn pixels(&self) -> &[[u8; 3]; N] {
        &self.pixels
    }

    /// The transmit peripheral.
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Mutable access to the transmit peripheral.
    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }
}
