//! # 6502 Instruction Semantics
//!
//! The execution core of a cycle-accurate NMOS 6502 emulator: register and
//! flag state, a trait-based memory bus, and one routine per instruction
//! family that applies the instruction's effect to that state.
//!
//! Fetching, decoding and addressing-mode resolution belong to the host's
//! dispatch loop. Each routine receives an already-resolved operand (a
//! value, an effective address, or the low operand byte for jumps) and
//! charges the instruction's base cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{Cpu, FlatMemory, MemoryBus, Register};
//! use cpu6502::instructions::{adc, load};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! let mut cpu = Cpu::new(memory);
//!
//! // LDA #$7F ; ADC #$01
//! load(&mut cpu, Register::A, 0x7F);
//! adc(&mut cpu, 0x01);
//!
//! assert_eq!(cpu.a(), 0x80);
//! assert!(cpu.status().overflow);
//! assert!(cpu.status().negative);
//! ```
//!
//! ## Known Limitations
//!
//! Decimal mode is tracked but not applied: ADC and SBC always perform binary
//! arithmetic.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, registers, reset
//! - `status` - Status flags and the packed status byte
//! - `memory` - MemoryBus trait and FlatMemory
//! - `instructions` - Instruction routines grouped by family
//! - `config` - Behaviour switches
//! - `trace` - Interrupt trace hook

pub mod config;
pub mod cpu;
pub mod instructions;
pub mod memory;
pub mod status;
pub mod trace;

pub use config::{ConfigError, CpuConfig, RorCarry};
pub use cpu::{Cpu, Register, Registers, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use memory::{FlatMemory, MemoryBus};
pub use status::{Flag, Status};
pub use trace::{InterruptKind, LogTrace, TraceSink};
