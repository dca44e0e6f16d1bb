//! In-memory register bank for exercising the configuration code off target.

use heapless::Vec;

use crate::map::{GPIO_BSRR, GPIO_ODR};
use crate::reg::RegisterBank;

/// Bytes of register space covered, enough for RCC_AHB1ENR and the GPIO block.
pub const SPAN: usize = 0x40;
/// Writes kept in the journal, later ones are only counted.
pub const JOURNAL_LEN: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteRecord {
    pub offset: usize,
    pub value: u32,
}

/// Plain memory behind the [`RegisterBank`] interface, with a write journal.
///
/// Built with [`SimBank::gpio`] it also behaves like a GPIO block for BSRR:
/// the register reads as zero and writes update ODR the way hardware does.
#[derive(Debug, Clone)]
pub struct SimBank {
    regs: [u32; SPAN / 4],
    journal: Vec<WriteRecord, JOURNAL_LEN>,
    dropped: usize,
    bsrr: bool,
}

impl SimBank {
    pub fn new() -> Self {
        Self::filled(0)
    }

    /// Every register starts out as `value`.
    pub fn filled(value: u32) -> Self {
        Self {
            regs: [value; SPAN / 4],
            journal: Vec::new(),
            dropped: 0,
            bsrr: false,
        }
    }

    /// GPIO block with reset values of zero and emulated BSRR.
    pub fn gpio() -> Self {
        Self::new().with_bsrr()
    }

    pub fn with_bsrr(mut self) -> Self {
        self.bsrr = true;
        self.regs[GPIO_BSRR / 4] = 0;
        self
    }

    /// Writes in the order they were issued, oldest first.
    pub fn writes(&self) -> &[WriteRecord] {
        &self.journal
    }

    /// Writes that happened after the journal filled up.
    pub fn dropped_writes(&self) -> usize {
        self.dropped
    }

    pub fn clear_writes(&mut self) {
        self.journal.clear();
        self.dropped = 0;
    }

    fn index(offset: usize) -> usize {
        assert!(
            offset % 4 == 0 && offset < SPAN,
            "register offset {offset:#x} outside simulated bank"
        );
        offset / 4
    }
}

impl Default for SimBank {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank for SimBank {
    fn read(&self, offset: usize) -> u32 {
        self.regs[Self::index(offset)]
    }

    fn write(&mut self, offset: usize, value: u32) {
        let idx = Self::index(offset);
        if self.journal.push(WriteRecord { offset, value }).is_err() {
            self.dropped += 1;
        }

        if self.bsrr && offset == GPIO_BSRR {
            // set bits win over reset bits for the same pin
            let odr = &mut self.regs[GPIO_ODR / 4];
            *odr = (*odr & !(value >> 16)) | (value & 0xFFFF);
        } else {
            self.regs[idx] = value;
        }
    }
}
