#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod gpio;
pub mod platform;

#[cfg(test)]
pub mod sim;

pub use blink::{BlinkConfig, Blinker, HALF_PERIOD_MS, LED_PIN};
pub use gpio::{Level, PinId, PinMode};
pub use platform::Platform;
