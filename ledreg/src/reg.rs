use core::ptr::{read_volatile, write_volatile};

/// Exclusive access to a block of 32-bit registers addressed by byte offset.
///
/// Offsets are relative to the block base and must be word aligned.
pub trait RegisterBank {
    fn read(&self, offset: usize) -> u32;

    fn write(&mut self, offset: usize, value: u32);

    /// Read-modify-write of a single register.
    fn modify<F>(&mut self, offset: usize, f: F) -> u32
    where
        F: FnOnce(u32) -> u32,
    {
        let value = f(self.read(offset));
        self.write(offset, value);
        value
    }
}

impl<B: RegisterBank + ?Sized> RegisterBank for &mut B {
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// Memory-mapped register block at a fixed physical address.
#[derive(Debug)]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `base` must be the address of a peripheral register block, and the
    /// caller must be the only owner of that block for the lifetime of the
    /// returned value.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    pub const fn base(&self) -> usize {
        self.base
    }

    fn ptr(&self, offset: usize) -> *mut u32 {
        debug_assert!(offset % 4 == 0);
        (self.base + offset) as *mut u32
    }
}

impl RegisterBank for Mmio {
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `new` requires `base` to be a valid, exclusively owned block.
        unsafe { read_volatile(self.ptr(offset)) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: see `read`.
        unsafe { write_volatile(self.ptr(offset), value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmio_reads_and_writes_backing_memory() {
        let mut words = [0u32; 4];
        let mut bank = unsafe { Mmio::new(words.as_mut_ptr() as usize) };

        bank.write(0x8, 0xDEAD_BEEF);
        assert_eq!(bank.read(0x8), 0xDEAD_BEEF);
        assert_eq!(bank.modify(0x8, |r| r & 0xFFFF), 0xBEEF);
        assert_eq!(words, [0, 0, 0xBEEF, 0]);
    }

    #[test]
    fn modify_through_mut_ref() {
        fn set_bit0<B: RegisterBank>(mut bank: B) {
            bank.modify(0x4, |r| r | 1);
        }

        let mut words = [0x10u32; 2];
        let mut bank = unsafe { Mmio::new(words.as_mut_ptr() as usize) };
        set_bit0(&mut bank);
        assert_eq!(bank.read(0x4), 0x11);
        assert_eq!(bank.read(0x0), 0x10);
    }
}
