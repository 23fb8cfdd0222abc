//! # Interrupts
//!
//! BRK, hardware IRQ and NMI share one entry sequence:
//! 1. Push PC high byte, then PC low byte
//! 2. Push the packed status (B = 1 for BRK only, bit 5 always 1)
//! 3. Clear D (configurable) and set I
//! 4. Load PC from the little-endian vector (0xFFFE for BRK/IRQ, 0xFFFA for NMI)
//!
//! RTI undoes it in reverse: status first, then PC. Unlike RTS there is no
//! +1 correction, since the pushed PC is the exact return address.
//!
//! `irq` and `nmi` are called by the host between instructions; `brk` by the
//! dispatch loop for opcode 0x00.

use crate::trace::InterruptKind;
use crate::{Cpu, MemoryBus};

fn enter<B: MemoryBus>(cpu: &mut Cpu<B>, kind: InterruptKind) {
    cpu.notify(kind);

    let [pc_low, pc_high] = cpu.pc.to_le_bytes();
    cpu.push(pc_high);
    cpu.push(pc_low);

    let status = cpu.status.to_byte(kind.break_flag());
    cpu.push(status);

    if cpu.config.clear_decimal_on_interrupt {
        cpu.status.decimal_mode = false;
    }
    if kind != InterruptKind::Nmi || cpu.config.nmi_sets_interrupt_disable {
        cpu.status.interrupt_disable = true;
    }

    cpu.pc = cpu.read_vector(kind.vector());
}

/// Executes BRK (software IRQ).
///
/// Pushes the current PC as-is; any return-address adjustment is up to the
/// dispatch loop.
pub fn brk<B: MemoryBus>(cpu: &mut Cpu<B>) {
    enter(cpu, InterruptKind::Brk);
}

/// Services the hardware IRQ line.
///
/// Does nothing at all while the interrupt disable flag is set.
pub fn irq<B: MemoryBus>(cpu: &mut Cpu<B>) {
    if cpu.status.interrupt_disable {
        return;
    }
    enter(cpu, InterruptKind::Irq);
}

/// Services a non-maskable interrupt. Ignores the interrupt disable flag.
pub fn nmi<B: MemoryBus>(cpu: &mut Cpu<B>) {
    enter(cpu, InterruptKind::Nmi);
}

/// Executes RTI (Return from Interrupt).
///
/// Cycle timing: 6 cycles.
pub fn rti<B: MemoryBus>(cpu: &mut Cpu<B>) {
    cpu.cycles = 6;

    let status = cpu.pull();
    cpu.status.load_byte(status);

    let low = cpu.pull();
    let high = cpu.pull();
    cpu.pc = u16::from_le_bytes([low, high]);
}
