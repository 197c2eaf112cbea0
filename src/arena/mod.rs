//! Match core - the debounced input-to-sequence-matching state machine.
//!
//! Everything in here is pure logic over `u64` microsecond timestamps:
//! no HAL types, no allocation, testable on the host. The firmware binary
//! feeds it GPIO levels and `Instant::as_micros()`; the tests feed it
//! hand-written tick sequences.
//!
//! ## Components
//!
//! - **Debouncer**: per-station raw-read filter emitting stable edges
//! - **SequenceTracker**: cursor over the reference digits, classifies presses
//! - **MatchClock**: idempotent start, one-shot expiry
//! - **Score**: press counters and the perfect-run flag
//! - **MatchController**: ties the above together once per poll tick

pub mod clock;
pub mod controller;
pub mod debounce;
pub mod score;
pub mod sequence;

pub use clock::{ClockStatus, MatchClock};
pub use controller::{MatchController, NullSink, OutputSink, Phase, Timings};
pub use debounce::{Debouncer, Edge};
pub use score::Score;
pub use sequence::{PressOutcome, ReferenceSequence, SequenceTracker};
