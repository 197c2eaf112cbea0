//! GPIO control-button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - START - open the match window without a station press
//!   - STOP  - end the match immediately
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends a `ControlEvent` to the match loop's channel.

use crate::ui::ControlEvent;
use arenactl::config::CONTROL_DEBOUNCE_MS;
use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Run a single control-button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
pub async fn control_task(
    pin: AnyPin,
    event: ControlEvent,
    tx: Sender<'static, CriticalSectionRawMutex, ControlEvent, 4>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(CONTROL_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Control: {}", event);
            tx.send(event).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(CONTROL_DEBOUNCE_MS)).await;
        }
    }
}
