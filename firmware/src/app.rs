use blinky_bsp as bsp;
use blinky_core::{BlinkConfig, Blinker};
use rtt_target::rprintln;

pub struct App<'a> {
    rcc: &'a bsp::rcc::RCC,
    lines: &'a bsp::gpio::Lines,
    delay: bsp::delay::Delay,
}

/// Hardware bring-up is done; the LED pin has not been touched yet.
pub struct Ready<'a> {
    lines: &'a bsp::gpio::Lines,
    delay: bsp::delay::Delay,
}

impl<'a> App<'a> {
    pub fn new(
        rcc: &'a bsp::rcc::RCC,
        lines: &'a bsp::gpio::Lines,
        delay: bsp::delay::Delay,
    ) -> Self {
        App { rcc, lines, delay }
    }

    /// Clock the GPIO ports and calibrate the delay against the core clock.
    pub fn setup(self) -> Ready<'a> {
        let clocks = self.rcc.setup();
        self.delay.set_sysclk(&clocks);
        rprintln!("sysclk {} Hz, hclk {} Hz", clocks.sysclk(), clocks.hclk());

        Ready {
            lines: self.lines,
            delay: self.delay,
        }
    }
}

impl<'a> Ready<'a> {
    pub fn run(self, config: BlinkConfig) -> ! {
        rprintln!(
            "blinking line {} with a {} ms half period",
            config.pin,
            config.half_period_ms
        );

        let board = bsp::board::Board::new(self.lines, self.delay);
        #[cfg(feature = "trace")]
        let board = crate::trace::Traced::new(board);

        let mut blinker = Blinker::setup(board, config);
        blinker.run()
    }
}
