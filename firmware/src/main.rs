#![no_std]
#![no_main]

mod app;
#[cfg(feature = "trace")]
mod trace;

use panic_rtt_target as _;
use cortex_m_rt::entry;
use git_version::git_version;
use rtt_target::{rtt_init_print, rprintln};
use blinky_bsp as bsp;
use blinky_core::BlinkConfig;

const GIT_VERSION: &str = git_version!(args = ["--always", "--dirty=-modified"], fallback = "unknown");

#[entry]
fn main() -> ! {
    rtt_init_print!();

    rprintln!("blinky {} starting...", GIT_VERSION);

    let rcc = bsp::rcc::RCC::new(stm32ral::rcc::RCC::take().expect("RCC taken twice"));
    let lines = bsp::gpio::Lines::new(
        stm32ral::gpio::GPIOA::take().expect("GPIOA taken twice"),
        stm32ral::gpio::GPIOB::take().expect("GPIOB taken twice"),
        stm32ral::gpio::GPIOC::take().expect("GPIOC taken twice"),
    );
    let delay = bsp::delay::Delay::new(stm32ral::syst::SYST::take().expect("SYST taken twice"));

    let app = app::App::new(&rcc, &lines, delay);
    app.setup().run(BlinkConfig::default())
}
