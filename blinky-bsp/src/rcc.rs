use stm32ral::rcc;
use stm32ral::{modify_reg, read_reg};

/// The core runs from the internal 16 MHz oscillator out of reset.
pub const HSI_FREQUENCY: u32 = 16_000_000;

pub struct RCC {
    rcc: rcc::Instance,
}

impl RCC {
    pub fn new(rcc: rcc::Instance) -> Self {
        RCC { rcc }
    }

    /// Clock the GPIO ports the board uses. The system clock is left at HSI.
    pub fn setup(&self) -> Clocks {
        modify_reg!(rcc, self.rcc, AHB1ENR,
            GPIOAEN: Enabled,
            GPIOBEN: Enabled,
            GPIOCEN: Enabled
        );
        // Read back so the clock is running before the first port access
        let _ = read_reg!(rcc, self.rcc, AHB1ENR);

        Clocks {
            sysclk: HSI_FREQUENCY,
        }
    }
}

pub struct Clocks {
    sysclk: u32,
}

impl Clocks {
    pub fn sysclk(&self) -> u32 {
        self.sysclk
    }

    pub fn hclk(&self) -> u32 {
        let rcc = unsafe { &*rcc::RCC };
        let hpre = read_reg!(rcc, rcc, CFGR, HPRE);
        match hpre {
            0b1000 => self.sysclk / 2,
            0b1001 => self.sysclk / 4,
            0b1010 => self.sysclk / 8,
            0b1011 => self.sysclk / 16,
            0b1100 => self.sysclk / 64,
            0b1101 => self.sysclk / 128,
            0b1110 => self.sysclk / 256,
            0b1111 => self.sysclk / 512,
            _ => self.sysclk,
        }
    }
}
