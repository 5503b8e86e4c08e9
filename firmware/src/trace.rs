use blinky_core::{Level, PinId, PinMode, Platform};
use rtt_target::rprintln;

/// Logs each primitive call over RTT before passing it on
pub struct Traced<P> {
    inner: P,
    writes: u32,
}

impl<P: Platform> Traced<P> {
    pub fn new(inner: P) -> Self {
        Traced { inner, writes: 0 }
    }
}

impl<P: Platform> Platform for Traced<P> {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        rprintln!("pin_mode({}, {:?})", pin, mode);
        self.inner.pin_mode(pin, mode);
    }

    fn digital_write(&mut self, pin: PinId, level: Level) {
        self.writes = self.writes.wrapping_add(1);
        rprintln!("#{} digital_write({}, {})", self.writes, pin, level);
        self.inner.digital_write(pin, level);
    }

    fn delay_ms(&mut self, ms: u32) {
        rprintln!("delay_ms({})", ms);
        self.inner.delay_ms(ms);
    }
}
