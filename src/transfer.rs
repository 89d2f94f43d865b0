//! In-flight transfer tracking for asynchronous transmit peripherals.
//!
//! A transfer engine may keep reading the encoded sequence out of memory
//! after `transmit` returns. Re-encoding (or mutating the framebuffer and
//! showing again) while that read is in progress corrupts the emitted
//! colors, so the strip refuses to encode while a transfer is active.
//! Synchronization uses critical sections, making the flag safe to clear
//! from a completion interrupt.

use core::cell::Cell;

use critical_section::Mutex;

/// State of the hardware transfer backed by the sequence buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// No transfer in progress; the buffers may be encoded and mutated.
    Idle,
    /// A transfer is reading the sequence buffer.
    Active,
}

/// Interrupt-safe flag marking an in-flight transfer.
pub struct TransferFlag {
    inner: Mutex<Cell<TransferState>>,
}

impl TransferFlag {
    /// Create a new flag in the [`TransferState::Idle`] state.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(TransferState::Idle)),
        }
    }

    /// Current transfer state.
    pub fn state(&self) -> TransferState {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Whether a transfer is currently in flight.
    pub fn is_active(&self) -> bool {
        self.state() == TransferState::Active
    }

    /// Mark the in-flight transfer as finished.
    ///
    /// Call this from the peripheral's completion interrupt or after
    /// polling the hardware. Idempotent.
    pub fn finish(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(TransferState::Idle));
    }

    pub(crate) fn activate(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(TransferState::Active));
    }
}

impl Default for TransferFlag {
    fn default() -> Self {
        Self::new()
    }
}
