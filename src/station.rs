//! One arena station: a button input paired with its indicator LED.
//!
//! Logical channel identity (0-9) is the array index in `main.rs`; this
//! type owns the physical pins so nothing else needs to know the wiring.

use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pull};

pub struct Station {
    button: Input<'static>,
    led: Output<'static>,
}

impl Station {
    /// Claim the station's pins. Button is active-low with internal
    /// pull-up; LED starts dark.
    pub fn new(button_pin: AnyPin, led_pin: AnyPin) -> Self {
        Self {
            button: Input::new(button_pin, Pull::Up),
            led: Output::new(led_pin, Level::Low, OutputDrive::Standard),
        }
    }

    /// Current electrical level, true while the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.button.is_low()
    }

    pub fn illuminate(&mut self) {
        self.led.set_high();
    }

    pub fn extinguish(&mut self) {
        self.led.set_low();
    }
}
