#![no_std]

pub use blinky_core;
pub use cortex_m;
pub use stm32ral;

pub mod board;
pub mod delay;
pub mod gpio;
pub mod rcc;
