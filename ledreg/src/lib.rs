//! Register-level configuration and blinking of the PC13 LED on STM32F4 boards.
//!
//! Every hardware access goes through [`RegisterBank`], so the same code drives
//! the real peripherals ([`Mmio`]) or an in-memory stand-in ([`SimBank`]).
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod blink;
pub mod clock;
pub mod config;
pub mod field;
pub mod gpio;
pub mod map;
pub mod reg;
pub mod sim;

pub use blink::{bsrr_word, Blinker, Level, Spin};
pub use clock::enable_port_clock;
pub use config::BlinkConfig;
pub use field::{Field, FieldValue};
pub use gpio::{configure_led, configure_pin, Mode, OutputType, Pin, Pull};
pub use map::Board;
pub use reg::{Mmio, RegisterBank};
pub use sim::SimBank;
