//! Tests for the stack engine.
//!
//! Tests cover:
//! - push/pull addressing (0x0100 + SP) and ordering
//! - SP wraparound in both directions
//! - PHA, PLA, PHP, PLP behaviour and cycle counts
//! - PHP always pushing B = 1 and bit 5 = 1
//! - PLP discarding bits 4 and 5

mod common;

use common::{setup_cpu, setup_recording_cpu, Access};
use cpu6502::instructions::{pha, php, pla, plp};
use cpu6502::{status, Flag, MemoryBus, Status};

// ========== Primitive Tests ==========

#[test]
fn test_push_writes_then_decrements() {
    let mut cpu = setup_recording_cpu();
    cpu.set_sp(0xFD);

    cpu.push(0x42);

    assert_eq!(cpu.bus().log, vec![Access::Write(0x01FD, 0x42)]);
    assert_eq!(cpu.sp(), 0xFC);
}

#[test]
fn test_pull_increments_then_reads() {
    let mut cpu = setup_recording_cpu();
    cpu.set_sp(0xFC);
    cpu.bus_mut().poke(0x01FD, 0x99);

    let value = cpu.pull();

    assert_eq!(value, 0x99);
    assert_eq!(cpu.bus().log, vec![Access::Read(0x01FD, 0x99)]);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_push_wraps_sp_from_00_to_ff() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0x00);

    cpu.push(0xAB);

    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.bus_mut().read(0x0100), 0xAB);
}

#[test]
fn test_pull_wraps_sp_from_ff_to_00() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFF);
    cpu.bus_mut().write(0x0100, 0xCD);

    assert_eq!(cpu.pull(), 0xCD);
    assert_eq!(cpu.sp(), 0x00);
}

#[test]
fn test_push_pull_is_lifo() {
    let mut cpu = setup_cpu();

    cpu.push(1);
    cpu.push(2);
    cpu.push(3);

    assert_eq!(cpu.pull(), 3);
    assert_eq!(cpu.pull(), 2);
    assert_eq!(cpu.pull(), 1);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== PHA / PLA Tests ==========

#[test]
fn test_pha_pla_roundtrip() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    pha(&mut cpu);
    assert_eq!(cpu.cycles(), 1);
    assert_eq!(cpu.bus_mut().read(0x01FD), 0x80);

    cpu.set_a(0x00);
    pla(&mut cpu);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.status().negative);
    assert!(!cpu.status().zero);
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_pla_zero() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.bus_mut().write(0x01FD, 0x00);
    cpu.set_a(0x55);

    pla(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().zero);
}

// ========== PHP / PLP Tests ==========

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();
    cpu.set_status(Status::from_byte(0x00));

    php(&mut cpu);

    assert_eq!(cpu.bus_mut().read(0x01FD), status::BREAK | status::UNUSED);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.cycles(), 1);
}

#[test]
fn test_php_packs_all_flags() {
    let mut cpu = setup_cpu();
    cpu.set_status(Status::from_byte(0xFF));

    php(&mut cpu);

    assert_eq!(cpu.bus_mut().read(0x01FD), 0xFF);
}

#[test]
fn test_php_does_not_change_flags() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Carry, true);
    let before = cpu.status();

    php(&mut cpu);

    assert_eq!(cpu.status(), before);
}

#[test]
fn test_plp_restores_flags() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.bus_mut()
        .write(0x01FD, status::NEGATIVE | status::OVERFLOW | status::CARRY);

    plp(&mut cpu);

    let flags = cpu.status();
    assert!(flags.negative);
    assert!(flags.overflow);
    assert!(flags.carry);
    assert!(!flags.zero);
    assert!(!flags.interrupt_disable);
    assert!(!flags.decimal_mode);
    assert_eq!(cpu.cycles(), 2);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_plp_ignores_break_and_unused_bits() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFC);
    cpu.bus_mut().write(0x01FD, status::BREAK | status::UNUSED);

    plp(&mut cpu);

    assert_eq!(cpu.status(), Status::from_byte(0x00));
}

#[test]
fn test_php_plp_roundtrip() {
    let mut cpu = setup_cpu();
    cpu.set_status(Status::from_byte(0b1100_1011));
    let before = cpu.status();

    php(&mut cpu);
    cpu.set_status(Status::from_byte(0x00));
    plp(&mut cpu);

    assert_eq!(cpu.status(), before);
}
