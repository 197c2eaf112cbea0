//! Unified error type for arenactl.
//!
//! We avoid `alloc` - all variants carry only fixed-size data.
//! `defmt::Format` is derived behind the `defmt` feature so the same
//! enum serves host tests and on-target logging.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Configuration
    /// The configured reference string contains a non-digit byte.
    InvalidDigit(u8),

    /// The configured reference string is empty.
    EmptySequence,

    // Match loop
    /// A channel identity outside 0..NUM_BUTTONS was presented.
    InvalidChannel(u8),

    // UI / Display
    /// The I²C display did not respond at startup; running headless.
    DisplayUnavailable,
}
