//! Per-pin bit fields inside shared GPIO registers.
//!
//! A GPIO register packs one field per pin, `width` bits each, pin 0 in the
//! least significant bits. Writing a field must leave the fields of every
//! other pin untouched.

use crate::reg::RegisterBank;

/// Location of one pin's field inside a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    shift: u32,
    width: u32,
}

impl Field {
    pub const fn new(pin: u8, width: u32) -> Self {
        assert!(matches!(width, 1 | 2));
        assert!((pin as u32 + 1) * width <= u32::BITS);
        Self {
            shift: pin as u32 * width,
            width,
        }
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Ones over the field, zeros elsewhere.
    pub const fn mask(&self) -> u32 {
        ((1 << self.width) - 1) << self.shift
    }

    /// Returns `reg` with this field replaced by `value`.
    pub const fn insert(&self, reg: u32, value: u32) -> u32 {
        (reg & !self.mask()) | ((value << self.shift) & self.mask())
    }

    pub const fn extract(&self, reg: u32) -> u32 {
        (reg & self.mask()) >> self.shift
    }
}

/// An encoding stored in a per-pin field.
///
/// The register and the field width belong to the encoding, so a value can
/// only be written into the register it was defined for.
pub trait FieldValue: Copy {
    /// Byte offset of the register inside the GPIO block.
    const OFFSET: usize;
    /// Bits per pin.
    const WIDTH: u32;

    fn bits(self) -> u32;

    fn field(pin: u8) -> Field {
        Field::new(pin, Self::WIDTH)
    }
}

/// Read-modify-write of `pin`'s field. Returns the value written back.
pub fn write_field<B, V>(bank: &mut B, pin: u8, value: V) -> u32
where
    B: RegisterBank + ?Sized,
    V: FieldValue,
{
    let field = V::field(pin);
    debug_assert!(value.bits() <= field.mask() >> field.shift());
    bank.modify(V::OFFSET, |reg| field.insert(reg, value.bits()))
}
