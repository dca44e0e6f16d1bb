//! STM32F4 memory map for the registers this crate touches.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::reg::Mmio;

pub const RCC_BASE: usize = 0x4002_3800;
pub const GPIOC_BASE: usize = 0x4002_0800;

// RCC
pub const RCC_AHB1ENR: usize = 0x30;
pub const RCC_AHB1ENR_GPIOCEN: u32 = 2;

// GPIOx
pub const GPIO_MODER: usize = 0x00;
pub const GPIO_OTYPER: usize = 0x04;
pub const GPIO_PUPDR: usize = 0x0C;
pub const GPIO_ODR: usize = 0x14;
pub const GPIO_BSRR: usize = 0x18;

/// First BSRR bit of the reset (drive low) half.
pub const BSRR_RESET_SHIFT: u32 = 16;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// The two register blocks the LED needs.
pub struct Board {
    pub rcc: Mmio,
    pub gpioc: Mmio,
}

impl Board {
    /// Hands out the register blocks once. Later calls return `None`.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }
        // SAFETY: fixed STM32F4 addresses, and `TAKEN` makes this the only owner.
        Some(unsafe {
            Self {
                rcc: Mmio::new(RCC_BASE),
                gpioc: Mmio::new(GPIOC_BASE),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_taken_once() {
        let board = Board::take().expect("first take");
        assert_eq!(board.rcc.base(), 0x4002_3830 - RCC_AHB1ENR);
        assert_eq!(board.gpioc.base() + GPIO_BSRR, 0x4002_0818);
        assert!(Board::take().is_none());
    }
}
