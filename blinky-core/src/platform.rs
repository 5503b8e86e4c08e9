//! The three primitives the blinker needs from the hardware.
//!
//! All of them are infallible: a bad pin number or a disconnected LED is
//! something the platform deals with (or doesn't), not the caller.

use crate::gpio::{Level, PinId, PinMode};

pub trait Platform {
    /// Set the direction of `pin`.
    fn pin_mode(&mut self, pin: PinId, mode: PinMode);

    /// Drive `level` onto `pin`. Only meaningful once the pin is an output.
    fn digital_write(&mut self, pin: PinId, level: Level);

    /// Block the caller for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

impl<P: Platform + ?Sized> Platform for &mut P {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        (**self).pin_mode(pin, mode)
    }

    fn digital_write(&mut self, pin: PinId, level: Level) {
        (**self).digital_write(pin, level)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
