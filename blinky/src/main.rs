#![no_std]
#![no_main]

use cortex_m::asm::nop;
use cortex_m_rt::entry;
use defmt::{info, println};
use ledreg::{configure_led, BlinkConfig, Blinker, Board, Spin};
use {defmt_rtt as _, panic_probe as _};

// BLINKY_HALF_PERIOD=250000 cargo fw
const CONFIG: BlinkConfig = BlinkConfig::from_env(option_env!("BLINKY_HALF_PERIOD"));

/// Empty counted loop, `nop` keeps it from being optimised away.
struct NopSpin;

impl Spin for NopSpin {
    fn spin(&mut self, iterations: u32) {
        for _ in 0..iterations {
            nop();
        }
    }
}

#[entry]
fn main() -> ! {
    println!("Hello, World!");
    let Board { mut rcc, mut gpioc } = Board::take().expect("Failed to take ownership of GPIOC");

    configure_led(&mut rcc, &mut gpioc, CONFIG.pin);
    info!("init done, entering loop");

    Blinker::new(gpioc, NopSpin, CONFIG).run()
}
