use crate::gpio::{Level, PinId, PinMode};
use crate::platform::Platform;

/// GPIO line the LED is wired to
pub const LED_PIN: PinId = PinId(17);

/// Time spent at each level, in milliseconds
pub const HALF_PERIOD_MS: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkConfig {
    pub pin: PinId,
    pub half_period_ms: u32,
}

impl BlinkConfig {
    pub const fn new(pin: PinId, half_period_ms: u32) -> Self {
        BlinkConfig {
            pin,
            half_period_ms,
        }
    }

    /// Full period of the square wave
    pub fn period_ms(&self) -> u64 {
        2 * self.half_period_ms as u64
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfig::new(LED_PIN, HALF_PERIOD_MS)
    }
}

/// Drives a square wave with 50% duty cycle onto one output pin.
///
/// The only way to get a `Blinker` is [`Blinker::setup`], so the pin has
/// always been switched to output before the first write.
pub struct Blinker<P: Platform> {
    platform: P,
    config: BlinkConfig,
    next: Level,
}

impl<P: Platform> Blinker<P> {
    /// Configure the pin as an output. Called once, before any write.
    pub fn setup(mut platform: P, config: BlinkConfig) -> Self {
        platform.pin_mode(config.pin, PinMode::Output);
        Blinker {
            platform,
            config,
            next: Level::High,
        }
    }

    /// Wait one half period, then drive the next level.
    ///
    /// Returns the level that was written.
    pub fn step(&mut self) -> Level {
        let level = self.next;
        self.platform.delay_ms(self.config.half_period_ms);
        self.platform.digital_write(self.config.pin, level);
        self.next = level.toggled();
        level
    }

    /// One full period: a HIGH phase followed by a LOW phase.
    pub fn cycle(&mut self) {
        self.step();
        self.step();
    }

    /// Blink forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Level the next [`step`](Self::step) will write
    pub fn next_level(&self) -> Level {
        self.next
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }
}
