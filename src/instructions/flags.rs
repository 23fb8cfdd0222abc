//! # Status Flag Manipulation Instructions
//!
//! - CLC / SEC: Clear / Set Carry
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLV: Clear Overflow
//!
//! All are implied-mode, two cycles, charged by the dispatch loop.

use crate::{Cpu, Flag, MemoryBus};

/// CLC (Clear Carry)
pub fn clc<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::Carry, false);
}

/// SEC (Set Carry)
pub fn sec<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::Carry, true);
}

/// CLI (Clear Interrupt Disable)
///
/// A pending IRQ is only taken once the host next calls
/// [`irq`](super::irq).
pub fn cli<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::InterruptDisable, false);
}

/// SEI (Set Interrupt Disable)
pub fn sei<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::InterruptDisable, true);
}

/// CLD (Clear Decimal Mode)
pub fn cld<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::Decimal, false);
}

/// SED (Set Decimal Mode)
///
/// Only the flag changes; ADC and SBC stay binary.
pub fn sed<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::Decimal, true);
}

/// CLV (Clear Overflow)
pub fn clv<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(Flag::Overflow, false);
}
