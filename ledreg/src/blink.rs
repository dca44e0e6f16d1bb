//! The toggle loop.

use crate::config::BlinkConfig;
use crate::gpio::Pin;
use crate::map::{BSRR_RESET_SHIFT, GPIO_BSRR};
use crate::reg::RegisterBank;

/// Electrical level of the pin. The LED is wired active low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    pub const fn led_on(self) -> bool {
        matches!(self, Level::Low)
    }
}

/// BSRR value driving `pin` to `level`, every other bit zero.
pub const fn bsrr_word(pin: Pin, level: Level) -> u32 {
    match level {
        Level::High => 1 << pin.index(),
        Level::Low => 1 << (pin.index() as u32 + BSRR_RESET_SHIFT),
    }
}

/// Burns CPU for a number of loop iterations.
pub trait Spin {
    fn spin(&mut self, iterations: u32);
}

impl<S: Spin + ?Sized> Spin for &mut S {
    fn spin(&mut self, iterations: u32) {
        (**self).spin(iterations)
    }
}

/// Drives one pin low, then high, forever, waiting a half period after each.
pub struct Blinker<G, S> {
    gpio: G,
    spin: S,
    pin: Pin,
    half_period: u32,
    next: Level,
}

impl<G, S> Blinker<G, S>
where
    G: RegisterBank,
    S: Spin,
{
    /// `gpio` must already be configured, see [`crate::configure_led`].
    pub fn new(gpio: G, spin: S, config: BlinkConfig) -> Self {
        Self {
            gpio,
            spin,
            pin: config.pin,
            half_period: config.half_period,
            next: Level::Low,
        }
    }

    /// Level the next [`step`](Self::step) will drive.
    pub fn next_level(&self) -> Level {
        self.next
    }

    /// One transition plus its wait. Returns the level driven.
    pub fn step(&mut self) -> Level {
        let level = self.next;
        // BSRR ignores zero bits, no read-modify-write needed
        self.gpio.write(GPIO_BSRR, bsrr_word(self.pin, level));
        trace!("{} {}, led on: {}", self.pin, level, level.led_on());
        self.spin.spin(self.half_period);
        self.next = level.toggled();
        level
    }

    /// LED on, then off.
    pub fn cycle(&mut self) {
        self.step();
        self.step();
    }

    pub fn run(mut self) -> ! {
        info!(
            "blinking {}, {=u32} iterations per half period",
            self.pin,
            self.half_period
        );
        loop {
            self.cycle();
        }
    }

    pub fn release(self) -> (G, S) {
        (self.gpio, self.spin)
    }
}
