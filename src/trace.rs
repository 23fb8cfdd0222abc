//! # Interrupt Tracing
//!
//! An optional diagnostic hook invoked on BRK, IRQ and NMI entry. The hook
//! only observes; it cannot change CPU state.

use std::fmt;

/// The interrupt sequence being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptKind {
    /// BRK opcode (software IRQ).
    Brk,
    /// Hardware IRQ line.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
}

impl InterruptKind {
    /// Vector the interrupt loads its handler address from.
    pub const fn vector(self) -> u16 {
        match self {
            InterruptKind::Brk | InterruptKind::Irq => crate::cpu::IRQ_VECTOR,
            InterruptKind::Nmi => crate::cpu::NMI_VECTOR,
        }
    }

    /// Whether the pushed status byte carries B = 1.
    pub const fn break_flag(self) -> bool {
        matches!(self, InterruptKind::Brk)
    }

    /// Human-readable notice for this interrupt.
    pub const fn notice(self) -> &'static str {
        match self {
            InterruptKind::Brk => "Software IRQ triggered (BRK)",
            InterruptKind::Irq => "Hardware IRQ triggered",
            InterruptKind::Nmi => "NMI Triggered",
        }
    }
}

impl fmt::Display for InterruptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notice())
    }
}

/// Receives a notice each time the CPU enters an interrupt sequence.
///
/// Closures taking an [`InterruptKind`] implement this trait, which is the
/// easiest way to hook tracing in tests and debuggers:
///
/// ```
/// use cpu6502::{Cpu, FlatMemory, InterruptKind, instructions::nmi};
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let mut cpu = Cpu::new(FlatMemory::new());
/// cpu.set_trace_sink(move |kind: InterruptKind| tx.send(kind).unwrap());
///
/// nmi(&mut cpu);
/// assert_eq!(rx.try_recv(), Ok(InterruptKind::Nmi));
/// ```
pub trait TraceSink {
    fn interrupt(&mut self, kind: InterruptKind);
}

impl<F: FnMut(InterruptKind)> TraceSink for F {
    fn interrupt(&mut self, kind: InterruptKind) {
        self(kind);
    }
}

/// Forwards interrupt notices to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn interrupt(&mut self, kind: InterruptKind) {
        log::debug!("{kind}");
    }
}
