//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX, TAY, TXA, TYA: [`transfer`]
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer

use crate::{Cpu, MemoryBus, Register};

/// Executes TAX, TAY, TXA or TYA.
///
/// Copies `from` into `to` and sets Z and N from the copied value.
pub fn transfer<B: MemoryBus>(cpu: &mut Cpu<B>, from: Register, to: Register) {
    let value = cpu.register(from);
    cpu.set_register(to, value);
    cpu.status.set_zn(value);
}

/// Executes TSX (Transfer Stack Pointer to X).
///
/// Updates Z and N flags.
pub fn tsx<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
}

/// Executes TXS (Transfer X to Stack Pointer).
///
/// The only transfer that leaves the flags alone.
pub fn txs<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.sp = cpu.x;
}
