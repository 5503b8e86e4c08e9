use crate::rcc::Clocks;
use core::sync::atomic::{AtomicU32, Ordering};
use embedded_hal::blocking::delay::DelayMs;
use stm32ral::syst;
use stm32ral::{modify_reg, read_reg, write_reg};

const SYST_CSR_ENABLE: u32 = 1 << 0;
const SYST_CSR_CLKSOURCE: u32 = 1 << 2;

/// SysTick counts down through 24 bits
const SYST_MAX: u32 = 0xff_ffff;

/// Busy-wait delays on SysTick, which is left free-running
pub struct Delay {
    systick: syst::Instance,
    base_clock: AtomicU32,
}

impl Delay {
    pub fn new(systick: syst::Instance) -> Self {
        // Set clock source to processor clock
        modify_reg!(syst, systick, CSR, |r| (r | SYST_CSR_CLKSOURCE));

        // Set reload and current values
        write_reg!(syst, systick, RVR, SYST_MAX);
        write_reg!(syst, systick, CVR, 0);

        // Enable the counter
        modify_reg!(syst, systick, CSR, |r| (r | SYST_CSR_ENABLE));

        Delay {
            systick,
            base_clock: AtomicU32::new(0),
        }
    }

    pub fn set_sysclk(&self, clocks: &Clocks) {
        self.base_clock.store(clocks.hclk(), Ordering::SeqCst);
    }

    fn base_clock(&self) -> u32 {
        let base_clock = self.base_clock.load(Ordering::SeqCst);
        assert!(base_clock > 0);
        base_clock
    }

    /// The whole delay is counted as one tick budget, so the few ticks a
    /// poll overshoots by are taken off what is left rather than lost.
    pub fn delay_ms(&self, ms: u32) {
        let ticks_per_ms = self.base_clock() / 1_000;
        let mut countdown = Countdown::new(ms as u64 * ticks_per_ms as u64, self.get_current());
        while !countdown.poll(self.get_current()) {}
    }

    #[inline(always)]
    pub fn get_current(&self) -> u32 {
        read_reg!(syst, self.systick, CVR)
    }
}

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        Delay::delay_ms(self, ms);
    }
}

/// Tick budget tracked against the down-counting SysTick value.
///
/// Must be polled at least once per counter wrap (2^24 ticks).
struct Countdown {
    remaining: u64,
    last: u32,
}

impl Countdown {
    fn new(ticks: u64, start: u32) -> Self {
        Countdown {
            remaining: ticks,
            last: start,
        }
    }

    /// Account for the ticks since the last poll; true once the budget is spent.
    fn poll(&mut self, now: u32) -> bool {
        let delta = self.last.wrapping_sub(now) & SYST_MAX;
        self.last = now;
        self.remaining = self.remaining.saturating_sub(delta as u64);
        self.remaining == 0
    }
}
