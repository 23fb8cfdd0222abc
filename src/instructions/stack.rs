//! # Stack Operations
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. It wraps in both directions: a push at SP = 0x00 leaves SP = 0xFF and
//! a pull at SP = 0xFF leaves SP = 0x00.
//!
//! This module provides the push/pull primitives used by JSR, RTS and the
//! interrupt engine, and the instructions built directly on them:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status

use crate::cpu::STACK_BASE;
use crate::{Cpu, MemoryBus};

impl<B: MemoryBus> Cpu<B> {
    /// Writes `value` at 0x0100 + SP, then decrements SP.
    pub fn push(&mut self, value: u8) {
        self.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte at 0x0100 + SP.
    pub fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }
}

/// Executes PHA (Push Accumulator). Charges 1 cycle, like PHP.
pub fn pha<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 1;
    cpu.push(cpu.a);
}

/// Executes PHP (Push Processor Status).
///
/// The pushed byte always has B = 1 and bit 5 = 1.
pub fn php<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 1;
    let status = cpu.status.to_byte(true);
    cpu.push(status);
}

/// Executes PLA (Pull Accumulator). Updates Z and N.
pub fn pla<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 2;
    cpu.a = cpu.pull();
    cpu.status.set_zn(cpu.a);
}

/// Executes PLP (Pull Processor Status).
///
/// Bits 4 and 5 of the pulled byte are discarded.
pub fn plp<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 2;
    let status = cpu.pull();
    cpu.status.load_byte(status);
}
