//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: [`load`]
//! - STA, STX, STY: [`store`]

use crate::{Cpu, MemoryBus, Register};

/// Executes LDA, LDX or LDY.
///
/// Stores `value` in `register` unchanged.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if value = 0
/// - Negative (N): Set if bit 7 of value is set
/// - Other flags: Not affected
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, Register};
/// use cpu6502::instructions::load;
///
/// let mut cpu = Cpu::new(FlatMemory::new());
/// load(&mut cpu, Register::X, 0x80);
///
/// assert_eq!(cpu.x(), 0x80);
/// assert!(cpu.status().negative);
/// assert!(!cpu.status().zero);
/// ```
pub fn load<B: MemoryBus>(cpu: &mut Cpu<B>, register: Register, value: u8) {
    cpu.set_register(register, value);
    cpu.status.set_zn(value);
}

/// Executes STA, STX or STY.
///
/// Writes `register` to `address` with a single bus write. No flags affected.
pub fn store<B: MemoryBus>(cpu: &mut Cpu<B>, register: Register, address: u16) {
    let value = cpu.register(register);
    cpu.write(address, value);
}
