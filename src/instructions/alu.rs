//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, EOR, ORA: Bitwise operations on the accumulator
//! - CMP, CPX, CPY: [`compare`]
//! - BIT: Bit Test
//!
//! ADC and SBC are binary only. The decimal flag is ignored here, as on the
//! 2A03 and in many early emulators.

use crate::{Cpu, MemoryBus, Register};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + value + C.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 255
/// - Overflow (V): Set if both operands share a sign the result doesn't
/// - Zero (Z), Negative (N): From the new accumulator
pub fn adc<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.status.carry as u16;
    let result = sum as u8;

    cpu.status.carry = sum > 0xFF;

    // V = (A^result) & (M^result) & 0x80
    cpu.status.overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.status.set_zn(result);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - value - (1 - C). Carry acts as an inverted borrow.
///
/// # Flag Behavior
///
/// - Carry (C): Set if no borrow was needed (difference >= 0)
/// - Overflow (V): Set if the operands differ in sign and the result's sign
///   differs from A's
/// - Zero (Z), Negative (N): From the new accumulator
pub fn sbc<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    let a = cpu.a;
    let borrow = !cpu.status.carry as i16;
    let diff = a as i16 - value as i16 - borrow;
    let result = diff as u8;

    cpu.status.carry = diff >= 0;
    cpu.status.overflow = ((a ^ value) & (a ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.status.set_zn(result);
}

/// Executes CMP, CPX or CPY.
///
/// Compares `register` against `value` as an unsigned subtraction without
/// storing the difference.
///
/// # Flag Behavior
///
/// - Zero (Z): register == value
/// - Carry (C): register >= value
/// - Negative (N): bit 7 of `register - value` (wrapping)
pub fn compare<B: MemoryBus>(cpu: &mut Cpu<B>, register: Register, value: u8) {
    let reg = cpu.register(register);

    cpu.status.zero = reg == value;
    cpu.status.carry = reg >= value;
    cpu.status.negative = reg.wrapping_sub(value) & 0x80 != 0;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub fn and<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub fn eor<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub fn ora<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// - Zero (Z): Set if `value & A` is 0
/// - Overflow (V): Bit 6 of value
/// - Negative (N): Bit 7 of value
pub fn bit<B: MemoryBus>(cpu: &mut Cpu<B>, value: u8) {
    cpu.status.zero = (value & cpu.a) == 0;
    cpu.status.overflow = (value & 0x40) != 0;
    cpu.status.negative = (value & 0x80) != 0;
}
