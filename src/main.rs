//! id-card firmware for nRF52840 + SSD1306.
//!
//! Six buttons drive the app; every press is handled to completion (scene
//! change, storage access, redraw) before the next one is taken from the
//! channel. A one-second tick switches the display off when idle.
//!
//! Build: `cargo build --release --no-default-features --features embedded --target thumbv7em-none-eabihf`

#![no_std]
#![no_main]

mod power;
mod storage;
mod ui {
    pub mod buttons;
    pub mod display;
}

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Pin;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::{Duration, Timer};
use id_card::{App, ButtonEvent};
use panic_probe as _;
use static_cell::StaticCell;

use crate::power::PowerManager;
use crate::storage::FlashStorage;
use crate::ui::buttons::{button_task, BUTTON_EVENTS};
use crate::ui::display;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type Flash = BlockingAsync<Nvmc<'static>>;

static APP: StaticCell<App<FlashStorage<Flash>>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("id-card {=str} starting", env!("CARGO_PKG_VERSION"));

    // Pin map in config.rs.
    let buttons = [
        (p.P0_11.degrade(), ButtonEvent::Up),
        (p.P0_12.degrade(), ButtonEvent::Down),
        (p.P0_24.degrade(), ButtonEvent::Left),
        (p.P0_25.degrade(), ButtonEvent::Right),
        (p.P0_02.degrade(), ButtonEvent::Select),
        (p.P0_03.degrade(), ButtonEvent::Back),
    ];
    for (pin, event) in buttons {
        unwrap!(spawner.spawn(button_task(pin, event, BUTTON_EVENTS.sender())));
    }

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = display::init(i2c);

    let flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let app = APP.init(App::new(FlashStorage::new(flash)));
    app.start();
    display::draw_views(&mut display, app.views());

    let rx = BUTTON_EVENTS.receiver();
    let mut power = PowerManager::new();

    let status = loop {
        match select(rx.receive(), Timer::after(Duration::from_secs(1))).await {
            Either::First(button) => {
                // A press that wakes the display is not passed on.
                if power.activity() {
                    let _ = display.set_display_on(true);
                    continue;
                }
                if !app.handle_button(button) {
                    break app.stop();
                }
                display::draw_views(&mut display, app.views());
            }
            Either::Second(()) => {
                let was_on = power.display_on();
                let on = power.tick();
                if on != was_on {
                    let _ = display.set_display_on(on);
                }
            }
        }
    };

    info!("App exited with status {}", status);
    display::draw_exit(&mut display);
    rx.receive().await;
    cortex_m::peripheral::SCB::sys_reset();
}
