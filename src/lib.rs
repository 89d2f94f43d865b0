#![no_std]

pub mod color;
pub mod encode;
pub mod gamma;
pub mod strip;
pub mod transfer;

pub use color::{ColorOrder, Rgb};
pub use encode::{
    BIT_0_HIGH_NS, BIT_1_HIGH_NS, BIT_PERIOD_NS, DutyCycleEncoder, Encoder, PulseItem,
    PulseTrainEncoder, RESET_LATCH, RESET_SLOTS, TimingError, duty_sequence_len,
    pulse_sequence_len,
};
pub use strip::{Error, Strip};
pub use transfer::{TransferFlag, TransferState};

/// Abstract transmit peripheral trait
///
/// Implement this trait to support different hardware transmit engines
/// (RMT-style pulse trains, timer-PWM fed by a transfer engine, SPI
/// shift-out). The strip driver is generic over this trait and only ever
/// hands it a fully encoded sequence; peripheral handles and channel setup
/// stay inside the implementation.
pub trait Transmitter {
    /// Element type of the encoded sequence this peripheral consumes.
    type Unit: Copy;
    /// Peripheral-specific transmit error.
    type Error;

    /// Send an encoded sequence to the strip.
    ///
    /// Returning [`Completion::InFlight`] means the hardware keeps reading
    /// the sequence memory after this call returns; the caller must not
    /// touch that memory until the transfer is marked finished.
    fn transmit(&mut self, sequence: &[Self::Unit]) -> Result<Completion, Self::Error>;
}

/// Outcome of a successfully started transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The whole sequence was shifted out before `transmit` returned.
    Complete,
    /// The transfer continues in hardware (e.g. DMA). Call
    /// [`Strip::complete_transfer`] once the peripheral signals completion.
    InFlight,
}
