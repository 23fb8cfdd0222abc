//! # Control Flow Instructions
//!
//! This module implements jumps and subroutine calls:
//! - JMP absolute and JMP indirect
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//!
//! The dispatch loop hands these routines the first operand byte and leaves
//! `pc` pointing at the opcode. The second operand byte (at `pc + 2`) is
//! fetched here.

use crate::{Cpu, MemoryBus};

/// Executes JMP absolute (0x4C).
///
/// Cycle timing: 3 cycles. Flags affected: None.
pub fn jmp_absolute<B: MemoryBus>(cpu: &mut Cpu<B>, address_low: u8) {
    cpu.cycles = 3;

    let address_high = cpu.read(cpu.pc.wrapping_add(2));
    cpu.pc = u16::from_le_bytes([address_low, address_high]);
}

/// Executes JMP indirect (0x6C).
///
/// Cycle timing: 5 cycles. Flags affected: None.
///
/// Reproduces the NMOS page-wrap bug: the pointer's low byte is incremented
/// without carry, so the target's high byte is read from the start of the
/// same page when the pointer ends in 0xFF. JMP ($10FF) reads from $10FF and
/// $1000, not $1100.
pub fn jmp_indirect<B: MemoryBus>(cpu: &mut Cpu<B>, pointer_low: u8) {
    cpu.cycles = 5;

    let pointer_high = cpu.read(cpu.pc.wrapping_add(2));

    let pointer = u16::from_le_bytes([pointer_low, pointer_high]);
    let pointer_next = u16::from_le_bytes([pointer_low.wrapping_add(1), pointer_high]);

    let target_low = cpu.read(pointer);
    let target_high = cpu.read(pointer_next);

    cpu.pc = u16::from_le_bytes([target_low, target_high]);
}

/// Executes JSR (0x20).
///
/// The pushed return address is the JSR's last byte (PC + 2), one short of
/// the next instruction; RTS adds the missing 1.
///
/// Cycle timing: 6 cycles. Flags affected: None.
pub fn jsr<B: MemoryBus>(cpu: &mut Cpu<B>, address_low: u8) {
    cpu.cycles = 6;

    cpu.pc = cpu.pc.wrapping_add(2);
    let [pc_low, pc_high] = cpu.pc.to_le_bytes();
    cpu.push(pc_high);
    cpu.push(pc_low);

    // pc now sits on the JSR's third byte
    let address_high = cpu.read(cpu.pc);
    cpu.pc = u16::from_le_bytes([address_low, address_high]);
}

/// Executes RTS (0x60).
///
/// Pulls the return address (low byte first) and adds 1.
///
/// Cycle timing: 6 cycles. Flags affected: None.
pub fn rts<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 6;

    let low = cpu.pull();
    let high = cpu.pull();
    cpu.pc = u16::from_le_bytes([low, high]).wrapping_add(1);
}
