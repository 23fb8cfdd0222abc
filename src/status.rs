//! # Processor Status
//!
//! The 6502 keeps six condition flags. They live here as independent booleans
//! and are only packed into a byte when pushed to the stack (PHP, BRK, IRQ,
//! NMI) and unpacked when pulled back (PLP, RTI).
//!
//! ## Packed Layout (NV-BDIZC)
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, always pushed as 1
//! - Bit 4: B (Break), exists only in the pushed byte
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use serde::{Deserialize, Serialize};

/// Carry flag bit in the packed status byte.
pub const CARRY: u8 = 0b0000_0001;
/// Zero flag bit in the packed status byte.
pub const ZERO: u8 = 0b0000_0010;
/// Interrupt disable flag bit in the packed status byte.
pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
/// Decimal mode flag bit in the packed status byte.
pub const DECIMAL: u8 = 0b0000_1000;
/// Virtual break bit. Written on push, discarded on pull.
pub const BREAK: u8 = 0b0001_0000;
/// Unused bit, always 1 in a pushed status byte.
pub const UNUSED: u8 = 0b0010_0000;
/// Overflow flag bit in the packed status byte.
pub const OVERFLOW: u8 = 0b0100_0000;
/// Negative flag bit in the packed status byte.
pub const NEGATIVE: u8 = 0b1000_0000;

/// Names one of the six stored status flags.
///
/// Used by the branch and flag instructions to select which flag they test
/// or modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    Overflow,
    Negative,
}

impl Flag {
    /// Returns the bit this flag occupies in the packed status byte.
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Carry => CARRY,
            Flag::Zero => ZERO,
            Flag::InterruptDisable => INTERRUPT_DISABLE,
            Flag::Decimal => DECIMAL,
            Flag::Overflow => OVERFLOW,
            Flag::Negative => NEGATIVE,
        }
    }
}

/// The six processor condition flags.
///
/// There is no stored break flag: B is synthesized by [`Status::to_byte`]
/// from the caller's context and ignored by [`Status::from_byte`].
///
/// # Examples
///
/// ```
/// use cpu6502::Status;
///
/// let mut status = Status::default();
/// status.carry = true;
///
/// // Bit 5 is always set, B comes from the caller
/// assert_eq!(status.to_byte(true), 0b0011_0101);
/// assert_eq!(status.to_byte(false), 0b0010_0101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub carry: bool,
    pub zero: bool,
    pub interrupt_disable: bool,
    pub decimal_mode: bool,
    pub overflow: bool,
    pub negative: bool,
}

impl Status {
    /// Power-on status: interrupts disabled, every other flag clear.
    pub const fn new() -> Self {
        Self {
            carry: false,
            zero: false,
            interrupt_disable: true,
            decimal_mode: false,
            overflow: false,
            negative: false,
        }
    }

    /// Packs the flags into the stack byte layout.
    ///
    /// `break_flag` is 1 for PHP and BRK and 0 for hardware IRQ and NMI.
    /// Bit 5 is always set.
    pub fn to_byte(self, break_flag: bool) -> u8 {
        let mut byte = UNUSED;

        if self.carry {
            byte |= CARRY;
        }
        if self.zero {
            byte |= ZERO;
        }
        if self.interrupt_disable {
            byte |= INTERRUPT_DISABLE;
        }
        if self.decimal_mode {
            byte |= DECIMAL;
        }
        if break_flag {
            byte |= BREAK;
        }
        if self.overflow {
            byte |= OVERFLOW;
        }
        if self.negative {
            byte |= NEGATIVE;
        }

        byte
    }

    /// Unpacks a pulled status byte. Bits 4 and 5 are ignored.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            carry: byte & CARRY != 0,
            zero: byte & ZERO != 0,
            interrupt_disable: byte & INTERRUPT_DISABLE != 0,
            decimal_mode: byte & DECIMAL != 0,
            overflow: byte & OVERFLOW != 0,
            negative: byte & NEGATIVE != 0,
        }
    }

    /// Replaces every flag with the contents of a pulled status byte.
    pub fn load_byte(&mut self, byte: u8) {
        *self = Self::from_byte(byte);
    }

    /// Returns the current value of `flag`.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Carry => self.carry,
            Flag::Zero => self.zero,
            Flag::InterruptDisable => self.interrupt_disable,
            Flag::Decimal => self.decimal_mode,
            Flag::Overflow => self.overflow,
            Flag::Negative => self.negative,
        }
    }

    /// Sets `flag` to `value`.
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Carry => self.carry = value,
            Flag::Zero => self.zero = value,
            Flag::InterruptDisable => self.interrupt_disable = value,
            Flag::Decimal => self.decimal_mode = value,
            Flag::Overflow => self.overflow = value,
            Flag::Negative => self.negative = value,
        }
    }

    /// Recomputes Z and N from the value an instruction just stored.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & NEGATIVE != 0;
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}
