//! # 6502 Instruction Implementations
//!
//! One routine per instruction family. Each takes a mutable reference to the
//! CPU plus the operand the dispatch loop resolved for it:
//!
//! - a `value` for instructions that consume a byte (loads, ALU, compare)
//! - an `address` for instructions that write memory (stores, read-modify-write)
//! - the low operand byte for JMP/JSR, whose high byte is fetched here
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **interrupts**: BRK, RTI, hardware IRQ and NMI entry
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod interrupts;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

pub use alu::{adc, and, bit, compare, eor, ora, sbc};
pub use branches::branch;
pub use control::{jmp_absolute, jmp_indirect, jsr, rts};
pub use flags::{clc, cld, cli, clv, sec, sed, sei};
pub use inc_dec::{dec, dex, dey, inc, increment_memory, increment_register, inx, iny};
pub use interrupts::{brk, irq, nmi, rti};
pub use load_store::{load, store};
pub use shifts::{asl, asl_a, lsr, lsr_a, rol, rol_a, ror, ror_a};
pub use stack::{pha, php, pla, plp};
pub use transfer::{transfer, tsx, txs};
