//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INX, INY, DEX, DEY: [`increment_register`]
//! - INC, DEC: [`increment_memory`]
//!
//! The register forms cost nothing here; their two cycles are charged by the
//! dispatch loop. The memory forms perform the read-modify-write themselves
//! and add the two cycles it takes.

use crate::{Cpu, MemoryBus, Register};

/// Adds `delta` to an index register (or A), wrapping modulo 256.
///
/// Updates Z and N from the new register value.
pub fn increment_register<B: MemoryBus>(cpu: &mut Cpu<B>, register: Register, delta: i8) {
    let result = cpu.register(register).wrapping_add_signed(delta);
    cpu.set_register(register, result);
    cpu.status.set_zn(result);
}

/// INX (Increment X)
pub fn inx<B: MemoryBus>(cpu: &mut Cpu<B>) {
    increment_register(cpu, Register::X, 1);
}

/// INY (Increment Y)
pub fn iny<B: MemoryBus>(cpu: &mut Cpu<B>) {
    increment_register(cpu, Register::Y, 1);
}

/// DEX (Decrement X)
pub fn dex<B: MemoryBus>(cpu: &mut Cpu<B>) {
    increment_register(cpu, Register::X, -1);
}

/// DEY (Decrement Y)
pub fn dey<B: MemoryBus>(cpu: &mut Cpu<B>) {
    increment_register(cpu, Register::Y, -1);
}

/// Adds `delta` to the byte at `address`, wrapping modulo 256.
///
/// Adds 2 cycles, reads the byte once, writes the result once, then updates
/// Z and N from the stored result.
pub fn increment_memory<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16, delta: i8) {
    cpu.cycles += 2;

    let value = cpu.read(address);
    let result = value.wrapping_add_signed(delta);
    cpu.write(address, result);

    cpu.status.set_zn(result);
}

/// INC (Increment Memory)
pub fn inc<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    increment_memory(cpu, address, 1);
}

/// DEC (Decrement Memory)
pub fn dec<B: MemoryBus>(cpu: &mut Cpu<B>, address: u16) {
    increment_memory(cpu, address, -1);
}
