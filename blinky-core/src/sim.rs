//! Simulated platform for running the blinker on a host.
//!
//! Every primitive call is recorded with the simulated time at which it
//! happened. Delays only move the simulated clock forward, so a run covering
//! minutes of blinking finishes instantly.
//!
//! A horizon stands in for pulling the power: the first delay that would
//! reach it unwinds out of the drive loop with [`HorizonReached`].

use std::panic::{self, AssertUnwindSafe};

use crate::blink::{BlinkConfig, Blinker};
use crate::gpio::{Level, PinId, PinMode};
use crate::platform::Platform;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    PinMode { at_ms: u64, pin: PinId, mode: PinMode },
    Write { at_ms: u64, pin: PinId, level: Level },
    /// A delay starting at `at_ms`
    Delay { at_ms: u64, ms: u32 },
}

/// Unwind payload used to stop a simulation at its horizon
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HorizonReached {
    pub at_ms: u64,
}

#[derive(Debug, Default)]
pub struct SimPlatform {
    now_ms: u64,
    horizon_ms: Option<u64>,
    events: Vec<Event>,
}

impl SimPlatform {
    /// A platform that never powers off
    pub fn new() -> Self {
        SimPlatform::default()
    }

    /// A platform that powers off at `horizon_ms`
    pub fn with_horizon(horizon_ms: u64) -> Self {
        SimPlatform {
            horizon_ms: Some(horizon_ms),
            ..SimPlatform::default()
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Completed writes as `(time, pin, level)`
    pub fn writes(&self) -> impl Iterator<Item = (u64, PinId, Level)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            Event::Write { at_ms, pin, level } => Some((at_ms, pin, level)),
            _ => None,
        })
    }

    pub fn levels(&self) -> Vec<Level> {
        self.writes().map(|(_, _, level)| level).collect()
    }

    pub fn mode_configurations(&self) -> Vec<(u64, PinId, PinMode)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::PinMode { at_ms, pin, mode } => Some((at_ms, pin, mode)),
                _ => None,
            })
            .collect()
    }
}

impl Platform for SimPlatform {
    fn pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.events.push(Event::PinMode {
            at_ms: self.now_ms,
            pin,
            mode,
        });
    }

    fn digital_write(&mut self, pin: PinId, level: Level) {
        self.events.push(Event::Write {
            at_ms: self.now_ms,
            pin,
            level,
        });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay {
            at_ms: self.now_ms,
            ms,
        });

        let end = self.now_ms + ms as u64;
        if let Some(horizon) = self.horizon_ms {
            if end >= horizon {
                self.now_ms = horizon;
                // resume_unwind skips the panic hook, so nothing is printed.
                panic::resume_unwind(Box::new(HorizonReached { at_ms: horizon }));
            }
        }
        self.now_ms = end;
    }
}

/// Set up a blinker on a fresh simulated platform and run it until
/// `horizon_ms`. Returns the platform with everything that happened.
pub fn run_until(config: BlinkConfig, horizon_ms: u64) -> SimPlatform {
    let mut blinker = Blinker::setup(SimPlatform::with_horizon(horizon_ms), config);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        blinker.run();
    }));
    match outcome {
        Ok(()) => unreachable!("drive loop returned"),
        Err(payload) => {
            if payload.downcast_ref::<HorizonReached>().is_none() {
                panic::resume_unwind(payload);
            }
        }
    }

    blinker.into_platform()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_advances_clock() {
        let mut sim = SimPlatform::new();
        sim.delay_ms(250);
        sim.delay_ms(250);
        assert_eq!(sim.now_ms(), 500);
        assert_eq!(
            sim.events(),
            &[
                Event::Delay { at_ms: 0, ms: 250 },
                Event::Delay { at_ms: 250, ms: 250 },
            ]
        );
    }

    #[test]
    fn records_with_timestamps() {
        let mut sim = SimPlatform::new();
        sim.pin_mode(PinId(4), PinMode::Output);
        sim.delay_ms(10);
        sim.digital_write(PinId(4), Level::High);

        assert_eq!(sim.mode_configurations(), vec![(0, PinId(4), PinMode::Output)]);
        assert_eq!(
            sim.writes().collect::<Vec<_>>(),
            vec![(10, PinId(4), Level::High)]
        );
    }

    #[test]
    fn horizon_unwinds_with_payload() {
        let mut sim = SimPlatform::with_horizon(100);
        sim.delay_ms(99);

        let err = panic::catch_unwind(AssertUnwindSafe(|| sim.delay_ms(1))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<HorizonReached>(),
            Some(&HorizonReached { at_ms: 100 })
        );
        assert_eq!(sim.now_ms(), 100);
    }
}
