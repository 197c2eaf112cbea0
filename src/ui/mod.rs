//! User interface subsystem - OLED scoreboard + external control buttons.
//!
//! The scoreboard is optional: if the SSD1306 does not answer at boot the
//! arena runs headless and score lines go to the defmt log instead.

pub mod control;
pub mod display;

use defmt::Format;

/// External control signals (after debouncing).
///
/// `Start` opens the match window without waiting for a station press;
/// `Stop` ends the match immediately regardless of elapsed time.
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub enum ControlEvent {
    Start,
    Stop,
}
