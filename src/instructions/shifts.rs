//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! The memory forms (`asl`, `lsr`, `rol`, `ror`) are read-modify-write: they
//! add 2 cycles, read the operand once and write the result once. The
//! accumulator forms (`asl_a` and friends) touch neither the bus nor the cycle
//! counter.

use crate::{Cpu, MemoryBus, RorCarry};

/// Result of one shift: the new byte and the bit moved into carry.
struct Shifted {
    value: u8,
    carry: bool,
}

fn shift_left(value: u8) -> Shifted {
    Shifted {
        value: value << 1,
        carry: value & 0x80 != 0,
    }
}

fn shift_right(value: u8) -> Shifted {
    Shifted {
        value: value >> 1,
        carry: value & 0x01 != 0,
    }
}

fn rotate_left(value: u8, carry_in: bool) -> Shifted {
    Shifted {
        value: (value << 1) | carry_in as u8,
        carry: value & 0x80 != 0,
    }
}

fn rotate_right(value: u8, carry_in: bool, carry_source: RorCarry) -> Shifted {
    let carry_mask = match carry_source {
        RorCarry::Bit0 => 0x01,
        RorCarry::Bit7 => 0x80,
    };

    Shifted {
        value: (value >> 1) | ((carry_in as u8) << 7),
        carry: value & carry_mask != 0,
    }
}

/// Sets C, Z and N from a shift result and returns the byte to store.
fn apply_flags<B: MemoryBus>(cpu: &mut Cpu<B>, shifted: Shifted) -> u8 {
    cpu.status.carry = shifted.carry;
    cpu.status.set_zn(shifted.value);
    shifted.value
}

/// Runs a shift through the bus: 2 cycles, one read, one write.
fn modify_memory<B, F>(cpu: &mut Cpu<B>, address: u16, op: F)
where
    B: MemoryBus,
    F: FnOnce(u8, bool, RorCarry) -> Shifted,
{
    cpu.cycles += 2;

    let value = cpu.read(address);
    let shifted = op(value, cpu.status.carry, cpu.config.ror_carry);
    let result = apply_flags(cpu, shifted);

    cpu.write(address, result);
}

fn modify_accumulator<B, F>(cpu: &mut Cpu<B>, op: F)
where
    B: MemoryBus,
    F: FnOnce(u8, bool, RorCarry) -> Shifted,
{
    let shifted = op(cpu.a, cpu.status.carry, cpu.config.ror_carry);
    cpu.a = apply_flags(cpu, shifted);
}

/// Executes ASL on memory.
///
/// Carry gets old bit 7, bit 0 becomes 0. Updates C, Z and N.
pub fn asl<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    modify_memory(cpu, address, |value, _, _| shift_left(value));
}

/// Executes LSR on memory.
///
/// Carry gets old bit 0, bit 7 becomes 0. N is still computed from the
/// result, so it always ends up clear.
pub fn lsr<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    modify_memory(cpu, address, |value, _, _| shift_right(value));
}

/// Executes ROL on memory.
///
/// Carry gets old bit 7, bit 0 gets the old carry.
pub fn rol<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    modify_memory(cpu, address, |value, carry, _| rotate_left(value, carry));
}

/// Executes ROR on memory.
///
/// Bit 7 gets the old carry. The bit moved into carry is selected by
/// [`CpuConfig::ror_carry`](crate::CpuConfig::ror_carry): bit 0 by default,
/// bit 7 for [`RorCarry::Bit7`].
pub fn ror<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    modify_memory(cpu, address, rotate_right);
}

/// ASL A
pub fn asl_a<B: MemoryBus>(cpu: &mut Cpu<B>) {
    modify_accumulator(cpu, |value, _, _| shift_left(value));
}

/// LSR A
pub fn lsr_a<B: MemoryBus>(cpu: &mut Cpu<B>) {
    modify_accumulator(cpu, |value, _, _| shift_right(value));
}

/// ROL A
pub fn rol_a<B: MemoryBus>(cpu: &mut Cpu<B>) {
    modify_accumulator(cpu, |value, carry, _| rotate_left(value, carry));
}

/// ROR A
pub fn ror_a<B: MemoryBus>(cpu: &mut Cpu<B>) {
    modify_accumulator(cpu, rotate_right);
}
