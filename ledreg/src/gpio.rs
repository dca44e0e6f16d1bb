//! GPIO pin encodings and the output configuration sequence.

use crate::clock::enable_port_clock;
use crate::field::{write_field, FieldValue};
use crate::map::{GPIO_MODER, GPIO_OTYPER, GPIO_PUPDR, RCC_AHB1ENR_GPIOCEN};
use crate::reg::RegisterBank;

/// Index of a pin inside its bank, 0..=15.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// PC13, the LED on black pill boards.
    pub const LED: Pin = Pin::new(13);

    pub const fn new(index: u8) -> Self {
        assert!(index < 16, "GPIO banks have 16 pins");
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Mode {
    Input = 0,
    Output = 1,
    Alternate = 2,
    Analog = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum OutputType {
    PushPull = 0,
    OpenDrain = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Pull {
    None = 0,
    Up = 1,
    Down = 2,
}

impl FieldValue for Mode {
    const OFFSET: usize = GPIO_MODER;
    const WIDTH: u32 = 2;

    fn bits(self) -> u32 {
        self as u32
    }
}

impl FieldValue for OutputType {
    const OFFSET: usize = GPIO_OTYPER;
    const WIDTH: u32 = 1;

    fn bits(self) -> u32 {
        self as u32
    }
}

impl FieldValue for Pull {
    const OFFSET: usize = GPIO_PUPDR;
    const WIDTH: u32 = 2;

    fn bits(self) -> u32 {
        self as u32
    }
}

/// Writes mode, output type and pull of one pin, in that order.
pub fn configure_pin<G>(gpio: &mut G, pin: Pin, mode: Mode, otype: OutputType, pull: Pull)
where
    G: RegisterBank + ?Sized,
{
    let moder = write_field(gpio, pin.index(), mode);
    debug!("MODER = {=u32:#x} ({} -> {})", moder, pin, mode);
    let otyper = write_field(gpio, pin.index(), otype);
    debug!("OTYPER = {=u32:#x} ({} -> {})", otyper, pin, otype);
    let pupdr = write_field(gpio, pin.index(), pull);
    debug!("PUPDR = {=u32:#x} ({} -> {})", pupdr, pin, pull);
}

/// Powers GPIOC and makes `pin` a push-pull output without pull resistor.
pub fn configure_led<R, G>(rcc: &mut R, gpio: &mut G, pin: Pin)
where
    R: RegisterBank + ?Sized,
    G: RegisterBank + ?Sized,
{
    enable_port_clock(rcc, RCC_AHB1ENR_GPIOCEN);
    configure_pin(gpio, pin, Mode::Output, OutputType::PushPull, Pull::None);
    info!("{} configured as push-pull output", pin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimBank;

    #[test]
    fn encodings_match_reference_manual() {
        assert_eq!(Mode::Input.bits(), 0);
        assert_eq!(Mode::Output.bits(), 1);
        assert_eq!(Mode::Alternate.bits(), 2);
        assert_eq!(Mode::Analog.bits(), 3);
        assert_eq!(OutputType::PushPull.bits(), 0);
        assert_eq!(OutputType::OpenDrain.bits(), 1);
        assert_eq!(Pull::None.bits(), 0);
        assert_eq!(Pull::Up.bits(), 1);
        assert_eq!(Pull::Down.bits(), 2);
    }

    #[test]
    fn otyper_uses_single_bit_field() {
        let mut gpio = SimBank::filled(0xFFFF_FFFF);
        write_field(&mut gpio, 13, OutputType::PushPull);
        assert_eq!(gpio.read(GPIO_OTYPER), !(1 << 13));

        write_field(&mut gpio, 13, OutputType::OpenDrain);
        assert_eq!(gpio.read(GPIO_OTYPER), 0xFFFF_FFFF);
    }

    #[test]
    fn mode_write_touches_bits_27_26() {
        let mut gpio = SimBank::filled(0xFFFF_FFFF);
        write_field(&mut gpio, 13, Mode::Output);
        let moder = gpio.read(GPIO_MODER);
        assert_eq!((moder >> 26) & 0b11, 0b01);
        assert_eq!(moder & 0x03FF_FFFF, 0x03FF_FFFF);
        assert_eq!(moder >> 28, 0xF);
    }

    #[test]
    fn pull_write_clears_bits_27_26() {
        let mut gpio = SimBank::filled(0xFFFF_FFFF);
        write_field(&mut gpio, 13, Pull::None);
        assert_eq!(gpio.read(GPIO_PUPDR), !(0b11 << 26));
    }

    #[test]
    fn configure_pin_writes_in_order() {
        let mut gpio = SimBank::new();
        configure_pin(&mut gpio, Pin::new(2), Mode::Analog, OutputType::OpenDrain, Pull::Down);

        let offsets: Vec<usize> = gpio.writes().iter().map(|w| w.offset).collect();
        assert_eq!(offsets, [GPIO_MODER, GPIO_OTYPER, GPIO_PUPDR]);
        assert_eq!(gpio.read(GPIO_MODER), 0b11 << 4);
        assert_eq!(gpio.read(GPIO_OTYPER), 1 << 2);
        assert_eq!(gpio.read(GPIO_PUPDR), 0b10 << 4);
    }

    #[test]
    #[should_panic(expected = "16 pins")]
    fn pin_out_of_range() {
        Pin::new(16);
    }
}
