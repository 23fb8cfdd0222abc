//! Tests for the data-movement instructions.
//!
//! Tests cover:
//! - LDA/LDX/LDY storing the value unchanged and setting Z/N
//! - STA/STX/STY performing exactly one bus write
//! - TAX/TAY/TXA/TYA/TSX/TXS copying and flag behaviour
//! - INX/INY/DEX/DEY wrapping at the 8-bit boundary
//! - None of these charge cycles

mod common;

use common::{setup_cpu, setup_recording_cpu, Access};
use cpu6502::instructions::{
    dex, dey, increment_register, inx, iny, load, store, transfer, tsx, txs,
};
use cpu6502::{Flag, MemoryBus, Register};

// ========== Load Tests ==========

#[test]
fn test_load_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x55);

    load(&mut cpu, Register::A, 0x00);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().zero);
    assert!(!cpu.status().negative);
}

#[test]
fn test_load_negative_value() {
    let mut cpu = setup_cpu();

    load(&mut cpu, Register::X, 0x80);

    assert_eq!(cpu.x(), 0x80);
    assert!(!cpu.status().zero);
    assert!(cpu.status().negative);
}

#[test]
fn test_load_positive_value() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Zero, true);
    cpu.set_flag(Flag::Negative, true);

    load(&mut cpu, Register::Y, 0x42);

    assert_eq!(cpu.y(), 0x42);
    assert!(!cpu.status().zero);
    assert!(!cpu.status().negative);
}

#[test]
fn test_load_leaves_other_flags_and_registers() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Carry, true);
    cpu.set_flag(Flag::Overflow, true);
    cpu.set_x(0x11);
    cpu.set_y(0x22);

    load(&mut cpu, Register::A, 0xFF);

    assert!(cpu.status().carry);
    assert!(cpu.status().overflow);
    assert_eq!(cpu.x(), 0x11);
    assert_eq!(cpu.y(), 0x22);
    assert_eq!(cpu.cycles(), 0);
}

// ========== Store Tests ==========

#[test]
fn test_store_writes_once() {
    let mut cpu = setup_recording_cpu();
    cpu.set_y(0x99);
    let status = cpu.status();

    store(&mut cpu, Register::Y, 0x0200);

    assert_eq!(cpu.bus().log, vec![Access::Write(0x0200, 0x99)]);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_store_each_register() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);

    store(&mut cpu, Register::A, 0x0300);
    store(&mut cpu, Register::X, 0x0301);
    store(&mut cpu, Register::Y, 0x0302);

    assert_eq!(cpu.bus_mut().read(0x0300), 0x01);
    assert_eq!(cpu.bus_mut().read(0x0301), 0x02);
    assert_eq!(cpu.bus_mut().read(0x0302), 0x03);
}

// ========== Transfer Tests ==========

#[test]
fn test_tax_copies_and_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    transfer(&mut cpu, Register::A, Register::X);

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.status().negative);
    assert!(!cpu.status().zero);
}

#[test]
fn test_txa_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x42);
    cpu.set_x(0x00);

    transfer(&mut cpu, Register::X, Register::A);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().zero);
    assert!(!cpu.status().negative);
}

#[test]
fn test_tay_and_tya() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x37);

    transfer(&mut cpu, Register::A, Register::Y);
    assert_eq!(cpu.y(), 0x37);

    cpu.set_y(0xC0);
    transfer(&mut cpu, Register::Y, Register::A);
    assert_eq!(cpu.a(), 0xC0);
    assert!(cpu.status().negative);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);

    tsx(&mut cpu);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().zero);
}

#[test]
fn test_txs_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x80);
    cpu.set_flag(Flag::Negative, false);
    cpu.set_flag(Flag::Zero, true);

    txs(&mut cpu);

    assert_eq!(cpu.sp(), 0x80);
    assert!(!cpu.status().negative);
    assert!(cpu.status().zero);
}

// ========== Register Increment/Decrement Tests ==========

#[test]
fn test_inx_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_x(0xFF);

    inx(&mut cpu);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.status().zero);
    assert!(!cpu.status().negative);
}

#[test]
fn test_dex_wraps_to_ff() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);

    dex(&mut cpu);

    assert_eq!(cpu.x(), 0xFF);
    assert!(!cpu.status().zero);
    assert!(cpu.status().negative);
}

#[test]
fn test_iny_into_negative() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x7F);

    iny(&mut cpu);

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.status().negative);
}

#[test]
fn test_dey_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);

    dey(&mut cpu);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.status().zero);
}

#[test]
fn test_increment_register_leaves_carry_and_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag(Flag::Carry, false);

    increment_register(&mut cpu, Register::A, 1);

    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.status().carry);
    assert_eq!(cpu.cycles(), 0);
}
