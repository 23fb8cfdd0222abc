//! # Branch Instructions
//!
//! All eight conditional branches share [`branch`]; the opcode only decides
//! which flag is tested and against which value:
//!
//! | Opcode | Flag     | Condition |
//! |--------|----------|-----------|
//! | BPL    | Negative | false     |
//! | BMI    | Negative | true      |
//! | BVC    | Overflow | false     |
//! | BVS    | Overflow | true      |
//! | BCC    | Carry    | false     |
//! | BCS    | Carry    | true      |
//! | BNE    | Zero     | false     |
//! | BEQ    | Zero     | true      |
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::{Cpu, Flag, MemoryBus};

/// Executes a conditional branch.
///
/// `pc` must point at the branch opcode. The offset is relative to the
/// instruction that follows the 2-byte branch, and the page-crossing penalty
/// compares that address with the target.
///
/// # Examples
///
/// ```
/// use cpu6502::{Cpu, Flag, FlatMemory};
/// use cpu6502::instructions::branch;
///
/// let mut cpu = Cpu::new(FlatMemory::new());
/// cpu.set_pc(0x1000);
/// cpu.set_flag(Flag::Zero, true);
///
/// // BEQ -4
/// branch(&mut cpu, Flag::Zero, true, 0xFC);
///
/// assert_eq!(cpu.pc(), 0x0FFE);
/// assert_eq!(cpu.cycles(), 4); // taken, and crossed from page $10 to $0F
/// ```
pub fn branch<B: MemoryBus>(cpu: &mut Cpu<B>, flag: Flag, condition: bool, offset: u8) {
    cpu.cycles = 2;

    // Address of the next instruction
    cpu.pc = cpu.pc.wrapping_add(2);

    if cpu.status.get(flag) == condition {
        cpu.cycles += 1;

        let page = cpu.pc >> 8;
        cpu.pc = cpu.pc.wrapping_add_signed(offset as i8 as i16);

        if cpu.pc >> 8 != page {
            cpu.cycles += 1;
        }
    }
}
