//! Display power management.
//!
//! The OLED is the largest consumer on the board. After
//! `SCREEN_AUTO_OFF_TIMEOUT_SECS` without a button press it is switched
//! off; the next press only wakes it and is not passed to the app.

use defmt::info;
use embassy_time::Instant;
use id_card::{config, power_logic};

pub struct PowerManager {
    last_activity: Instant,
    display_on: bool,
}

impl PowerManager {
    pub fn new() -> Self {
        Self {
            last_activity: Instant::now(),
            display_on: true,
        }
    }

    /// Record a button press. Returns `true` if the press woke the display.
    pub fn activity(&mut self) -> bool {
        self.last_activity = Instant::now();
        if self.display_on {
            return false;
        }
        info!("Power: display wake");
        self.display_on = true;
        true
    }

    /// Periodic tick - call about once a second. Returns the display state.
    pub fn tick(&mut self) -> bool {
        let idle_secs = self.last_activity.elapsed().as_secs();
        let on = power_logic::screen_should_be_on(
            config::SCREEN_AUTO_OFF_ENABLED,
            idle_secs,
            config::SCREEN_AUTO_OFF_TIMEOUT_SECS,
        );
        if on != self.display_on {
            info!("Power: display_on={} after {}s idle", on, idle_secs);
            self.display_on = on;
        }
        self.display_on
    }

    pub fn display_on(&self) -> bool {
        self.display_on
    }
}
