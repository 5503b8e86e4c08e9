use blinky_core::{Level, PinId, PinMode, Platform};
use embedded_hal::blocking::delay::DelayMs;

use crate::gpio::Lines;

/// The blinker's view of the board: flat-numbered GPIO lines plus a
/// millisecond delay, normally [`crate::delay::Delay`] on SysTick.
pub struct Board<'a, D> {
    lines: &'a Lines,
    delay: D,
}

impl<'a, D: DelayMs<u32>> Board<'a, D> {
    pub fn new(lines: &'a Lines, delay: D) -> Self {
        Board { lines, delay }
    }
}

impl<'a, D: DelayMs<u32>> Platform for Board<'a, D> {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        let pin = self.lines.line(pin);
        match mode {
            // Start low so the LED doesn't flash on while switching direction.
            PinMode::Output => pin
                .set_low()
                .set_otype_pushpull()
                .set_ospeed_low()
                .set_mode_output(),
            PinMode::Input => pin.set_mode_input(),
        };
    }

    fn digital_write(&mut self, pin: PinId, level: Level) {
        self.lines.line(pin).set_level(level);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
