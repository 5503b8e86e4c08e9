use blinky_core::{Level, PinId};
use stm32ral::gpio;
use stm32ral::{modify_reg, write_reg};

/// Number of pins on one GPIO port
pub const PINS_PER_PORT: u8 = 16;

pub struct GPIO {
    p: gpio::Instance,
}

impl<'a> GPIO {
    pub fn new(p: gpio::Instance) -> Self {
        GPIO { p }
    }

    pub fn pin(&'a self, n: u8) -> Pin<'a> {
        assert!(n < PINS_PER_PORT);
        Pin { n, port: self }
    }

    pub fn set_high(&'a self, n: u8) -> &Self {
        assert!(n < PINS_PER_PORT);
        write_reg!(gpio, self.p, BSRR, 1 << n);
        self
    }

    pub fn set_low(&'a self, n: u8) -> &Self {
        assert!(n < PINS_PER_PORT);
        write_reg!(gpio, self.p, BSRR, 1 << (n + 16));
        self
    }

    pub fn set_level(&'a self, n: u8, level: Level) -> &Self {
        match level {
            Level::High => self.set_high(n),
            Level::Low => self.set_low(n),
        }
    }

    fn set_mode(&'a self, n: u8, mode: u32) -> &Self {
        assert!(n < PINS_PER_PORT);
        let offset = n * 2;
        let mask = 0b11 << offset;
        let val = (mode << offset) & mask;
        modify_reg!(gpio, self.p, MODER, |r| (r & !mask) | val);
        self
    }

    pub fn set_mode_input(&'a self, n: u8) -> &Self {
        self.set_mode(n, gpio::MODER::MODER0::RW::Input)
    }

    pub fn set_mode_output(&'a self, n: u8) -> &Self {
        self.set_mode(n, gpio::MODER::MODER0::RW::Output)
    }

    pub fn set_otype_pushpull(&'a self, n: u8) -> &Self {
        assert!(n < PINS_PER_PORT);
        let mask = 0b1 << n;
        let val = (gpio::OTYPER::OT0::RW::PushPull << n) & mask;
        modify_reg!(gpio, self.p, OTYPER, |r| (r & !mask) | val);
        self
    }

    pub fn set_ospeed_low(&'a self, n: u8) -> &Self {
        assert!(n < PINS_PER_PORT);
        let offset = n * 2;
        let mask = 0b11 << offset;
        let val = (gpio::OSPEEDR::OSPEEDR0::RW::LowSpeed << offset) & mask;
        modify_reg!(gpio, self.p, OSPEEDR, |r| (r & !mask) | val);
        self
    }
}

pub struct Pin<'a> {
    n: u8,
    port: &'a GPIO,
}

impl<'a> Pin<'a> {
    pub fn set_low(&self) -> &Self {
        self.port.set_low(self.n);
        self
    }

    pub fn set_level(&self, level: Level) -> &Self {
        self.port.set_level(self.n, level);
        self
    }

    pub fn set_mode_input(&self) -> &Self {
        self.port.set_mode_input(self.n);
        self
    }

    pub fn set_mode_output(&self) -> &Self {
        self.port.set_mode_output(self.n);
        self
    }

    pub fn set_otype_pushpull(&self) -> &Self {
        self.port.set_otype_pushpull(self.n);
        self
    }

    pub fn set_ospeed_low(&self) -> &Self {
        self.port.set_ospeed_low(self.n);
        self
    }
}

/// Split a flat line number into `(port index, pin)`; line 17 is port B, pin 1.
pub const fn split_line(line: PinId) -> (u8, u8) {
    (line.0 / PINS_PER_PORT, line.0 % PINS_PER_PORT)
}

/// GPIO ports A to C, addressed by flat line number
pub struct Lines {
    ports: [GPIO; 3],
}

impl<'a> Lines {
    pub fn new(gpioa: gpio::Instance, gpiob: gpio::Instance, gpioc: gpio::Instance) -> Self {
        Lines {
            ports: [GPIO::new(gpioa), GPIO::new(gpiob), GPIO::new(gpioc)],
        }
    }

    pub fn line(&'a self, line: PinId) -> Pin<'a> {
        let (port, n) = split_line(line);
        assert!((port as usize) < self.ports.len());
        self.ports[port as usize].pin(n)
    }
}
