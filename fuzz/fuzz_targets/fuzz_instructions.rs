//! Fuzz target for instruction sequences.
//!
//! Builds an arbitrary CPU state and memory image, then applies an arbitrary
//! sequence of instruction routines, checking the invariants that must hold
//! after every one of them.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::instructions::*;
use cpu6502::{Cpu, CpuConfig, Flag, FlatMemory, MemoryBus, Register, RorCarry, Status};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzRegister {
    A,
    X,
    Y,
}

impl From<FuzzRegister> for Register {
    fn from(register: FuzzRegister) -> Self {
        match register {
            FuzzRegister::A => Register::A,
            FuzzRegister::X => Register::X,
            FuzzRegister::Y => Register::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum BranchFlag {
    Negative,
    Overflow,
    Carry,
    Zero,
}

impl From<BranchFlag> for Flag {
    fn from(flag: BranchFlag) -> Self {
        match flag {
            BranchFlag::Negative => Flag::Negative,
            BranchFlag::Overflow => Flag::Overflow,
            BranchFlag::Carry => Flag::Carry,
            BranchFlag::Zero => Flag::Zero,
        }
    }
}

/// One instruction routine with its already-resolved operand.
#[derive(Debug, Arbitrary)]
enum Op {
    Load(FuzzRegister, u8),
    Store(FuzzRegister, u16),
    Transfer(FuzzRegister, FuzzRegister),
    Tsx,
    Txs,
    IncrementRegister(FuzzRegister, bool),
    IncrementMemory(u16, bool),
    Adc(u8),
    Sbc(u8),
    Compare(FuzzRegister, u8),
    And(u8),
    Eor(u8),
    Ora(u8),
    Bit(u8),
    Asl(Option<u16>),
    Lsr(Option<u16>),
    Rol(Option<u16>),
    Ror(Option<u16>),
    Branch(BranchFlag, bool, u8),
    JmpAbsolute(u8),
    JmpIndirect(u8),
    Jsr(u8),
    Rts,
    Pha,
    Php,
    Pla,
    Plp,
    Brk,
    Irq,
    Nmi,
    Rti,
    SetFlag(u8),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
    legacy_ror: bool,
    clear_decimal_on_interrupt: bool,
    nmi_sets_interrupt_disable: bool,
    /// Written starting at 0x0000
    low_memory: Vec<u8>,
    /// Written ending at 0xFFFF (vectors live here)
    high_memory: Vec<u8>,
    ops: Vec<Op>,
}

fn apply(cpu: &mut Cpu<FlatMemory>, op: &Op) {
    match *op {
        Op::Load(register, value) => load(cpu, register.into(), value),
        Op::Store(register, address) => store(cpu, register.into(), address),
        Op::Transfer(from, to) => transfer(cpu, from.into(), to.into()),
        Op::Tsx => tsx(cpu),
        Op::Txs => txs(cpu),
        Op::IncrementRegister(register, up) => {
            increment_register(cpu, register.into(), if up { 1 } else { -1 })
        }
        Op::IncrementMemory(address, up) => {
            increment_memory(cpu, address, if up { 1 } else { -1 })
        }
        Op::Adc(value) => adc(cpu, value),
        Op::Sbc(value) => sbc(cpu, value),
        Op::Compare(register, value) => compare(cpu, register.into(), value),
        Op::And(value) => and(cpu, value),
        Op::Eor(value) => eor(cpu, value),
        Op::Ora(value) => ora(cpu, value),
        Op::Bit(value) => bit(cpu, value),
        Op::Asl(Some(address)) => asl(cpu, address),
        Op::Asl(None) => asl_a(cpu),
        Op::Lsr(Some(address)) => lsr(cpu, address),
        Op::Lsr(None) => lsr_a(cpu),
        Op::Rol(Some(address)) => rol(cpu, address),
        Op::Rol(None) => rol_a(cpu),
        Op::Ror(Some(address)) => ror(cpu, address),
        Op::Ror(None) => ror_a(cpu),
        Op::Branch(flag, condition, offset) => branch(cpu, flag.into(), condition, offset),
        Op::JmpAbsolute(low) => jmp_absolute(cpu, low),
        Op::JmpIndirect(low) => jmp_indirect(cpu, low),
        Op::Jsr(low) => jsr(cpu, low),
        Op::Rts => rts(cpu),
        Op::Pha => pha(cpu),
        Op::Php => php(cpu),
        Op::Pla => pla(cpu),
        Op::Plp => plp(cpu),
        Op::Brk => brk(cpu),
        Op::Irq => irq(cpu),
        Op::Nmi => nmi(cpu),
        Op::Rti => rti(cpu),
        Op::SetFlag(byte) => cpu.set_status(Status::from_byte(byte)),
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.low_memory);
    let high_start = 0u16.wrapping_sub(input.high_memory.len().min(0x8000) as u16);
    memory.load(high_start, &input.high_memory[..input.high_memory.len().min(0x8000)]);

    let config = CpuConfig {
        ror_carry: if input.legacy_ror {
            RorCarry::Bit7
        } else {
            RorCarry::Bit0
        },
        clear_decimal_on_interrupt: input.clear_decimal_on_interrupt,
        nmi_sets_interrupt_disable: input.nmi_sets_interrupt_disable,
        trace_interrupts: false,
    };
    let mut cpu = Cpu::with_config(memory, config);

    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_sp(input.sp);
    cpu.set_pc(input.pc);
    cpu.set_status(Status::from_byte(input.status));

    for op in &input.ops {
        let before = cpu.registers();
        cpu.set_cycles(0);

        apply(&mut cpu, op);

        // No routine charges more than a taken, page-crossing branch or JSR
        assert!(cpu.cycles() <= 6, "{:?} charged {} cycles", op, cpu.cycles());

        match op {
            Op::Irq if before.status.interrupt_disable => {
                assert_eq!(cpu.registers(), before);
                assert_eq!(cpu.cycles(), 0);
            }
            Op::Brk | Op::Irq | Op::Nmi => {
                assert_eq!(cpu.sp(), before.sp.wrapping_sub(3));
            }
            Op::Jsr(_) => assert_eq!(cpu.sp(), before.sp.wrapping_sub(2)),
            Op::Rts | Op::Rti => {
                let popped = if matches!(op, Op::Rts) { 2 } else { 3 };
                assert_eq!(cpu.sp(), before.sp.wrapping_add(popped));
            }
            Op::Php => {
                let pushed = cpu.bus_mut().read(0x0100 | before.sp as u16);
                assert_eq!(pushed, before.status.to_byte(true));
            }
            _ => {}
        }

        // Bits 4 and 5 never live in the register
        let packed = cpu.status().to_byte(false);
        assert_eq!(Status::from_byte(packed), cpu.status());
    }
});
