//! # CPU State
//!
//! This module contains the [`Cpu`] struct, the single mutable record every
//! instruction routine operates on.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit, wraps modulo 65536
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: see [`Status`]
//! - **Cycle counter**: cycles charged by the instruction in flight
//! - **Memory bus**: the [`MemoryBus`] injected at construction
//!
//! ## Cycle Accounting
//!
//! `cycles` belongs to the instruction currently being executed. The dispatch
//! loop reads it after each routine returns and folds it into its own clock.
//! Control-flow and stack routines overwrite it with their fixed cost;
//! read-modify-write routines add their two internal cycles on top of the
//! addressing cost the dispatch loop has already stored there. Loads,
//! transfers and ALU operations leave it alone.

use crate::trace::{InterruptKind, LogTrace, TraceSink};
use crate::{CpuConfig, Flag, MemoryBus, Status};
use serde::{Deserialize, Serialize};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;
/// NMI handler vector (little-endian word at 0xFFFA/0xFFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector (little-endian word at 0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK handler vector (little-endian word at 0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after power-on.
const POWER_ON_SP: u8 = 0xFD;

/// An 8-bit general-purpose register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    A,
    X,
    Y,
}

/// Plain snapshot of the programmer-visible CPU registers.
///
/// Useful for save states and for comparing CPU state in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

/// 6502 CPU state.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. The
/// instruction routines in [`crate::instructions`] take `&mut Cpu<B>` plus
/// whatever operand the dispatch loop has already resolved.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = Cpu::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.status().interrupt_disable);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct Cpu<B: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) status: Status,

    /// Cycles charged by the instruction in flight
    pub(crate) cycles: u64,

    pub(crate) bus: B,

    pub(crate) config: CpuConfig,

    trace: Option<Box<dyn TraceSink>>,
}

impl<B: MemoryBus> Cpu<B> {
    /// Creates a CPU with the default [`CpuConfig`].
    ///
    /// The CPU starts in the power-on state:
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is 0xFD
    /// - Interrupt Disable is set, every other flag is clear
    /// - A, X, Y and the cycle counter are zero
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration.
    ///
    /// If `config.trace_interrupts` is set, a [`LogTrace`] sink is installed.
    pub fn with_config(mut bus: B, config: CpuConfig) -> Self {
        let pc = read_word(&mut bus, RESET_VECTOR);

        let trace: Option<Box<dyn TraceSink>> = if config.trace_interrupts {
            Some(Box::new(LogTrace))
        } else {
            None
        };

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: POWER_ON_SP,
            status: Status::new(),
            cycles: 0,
            bus,
            config,
            trace,
        }
    }

    /// Performs a RESET sequence.
    ///
    /// PC is reloaded from the reset vector, SP drops by 3 (the three
    /// suppressed stack writes), and interrupts are disabled. Registers and
    /// the remaining flags keep their values.
    pub fn reset(&mut self) {
        self.pc = read_word(&mut self.bus, RESET_VECTOR);
        self.sp = self.sp.wrapping_sub(3);
        self.status.interrupt_disable = true;
        self.cycles = 0;

        log::debug!("CPU reset, PC loaded from reset vector: {:#06X}", self.pc);
    }

    // ========== Bus Helpers ==========

    #[inline]
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    #[inline]
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Reads a little-endian vector: low byte at `addr`, high byte at `addr + 1`.
    pub(crate) fn read_vector(&mut self, addr: u16) -> u16 {
        read_word(&mut self.bus, addr)
    }

    pub(crate) fn notify(&mut self, kind: InterruptKind) {
        if let Some(trace) = self.trace.as_mut() {
            trace.interrupt(kind);
        }
    }

    // ========== Register Access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the cycles charged by the most recent instruction routine.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the status flags.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the current value of a single flag.
    pub fn flag(&self, flag: Flag) -> bool {
        self.status.get(flag)
    }

    /// Returns the value of a general-purpose register.
    pub fn register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the cycle counter. The dispatch loop uses this to store the
    /// addressing-mode cost before calling a read-modify-write routine.
    pub fn set_cycles(&mut self, cycles: u64) {
        self.cycles = cycles;
    }

    /// Replaces every status flag.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Mutable access to the status flags.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Sets a single flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.status.set(flag, value);
    }

    /// Sets a general-purpose register.
    pub fn set_register(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
        }
    }

    /// Captures the programmer-visible registers.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status,
        }
    }

    /// Restores registers captured by [`Cpu::registers`].
    pub fn set_registers(&mut self, registers: Registers) {
        self.a = registers.a;
        self.x = registers.x;
        self.y = registers.y;
        self.sp = registers.sp;
        self.pc = registers.pc;
        self.status = registers.status;
    }

    // ========== Bus, Config and Trace ==========

    /// Returns a reference to the memory bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns a mutable reference to the memory bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Installs a sink that is notified on every BRK, IRQ and NMI entry.
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.trace = Some(Box::new(sink));
    }

    /// Removes the trace sink, if any.
    pub fn clear_trace_sink(&mut self) {
        self.trace = None;
    }
}

fn read_word<B: MemoryBus>(bus: &mut B, addr: u16) -> u16 {
    let low = bus.read(addr);
    let high = bus.read(addr.wrapping_add(1));
    u16::from_le_bytes([low, high])
}
