//! GPIO button input with async debouncing.
//!
//! Six buttons (active-low with internal pull-up):
//!   - UP / DOWN / LEFT / RIGHT - move in menus, keyboard and text
//!   - OK   - choose / type the highlighted key
//!   - BACK - leave the current screen
//!
//! Each button is handled by its own task that waits for a GPIO edge,
//! debounces it, and sends a `ButtonEvent` to the app channel.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Timer};
use id_card::config::{BUTTON_DEBOUNCE_MS, BUTTON_QUEUE_DEPTH};
use id_card::ButtonEvent;

/// Debounced presses waiting for the app loop.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release before repeating.
#[embassy_executor::task(pool_size = 6)]
pub async fn button_task(
    pin: AnyPin,
    event: ButtonEvent,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Button: {}", event);
            tx.send(event).await;

            // Wait for release to avoid repeat triggers.
            btn.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
