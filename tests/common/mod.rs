//! Shared helpers for the integration tests.

#![allow(dead_code)]

use cpu6502::{Cpu, CpuConfig, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
pub fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

/// Like [`setup_cpu`], with an explicit configuration.
pub fn setup_cpu_with(config: CpuConfig) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::with_config(memory, config)
}

/// One bus access, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u16, u8),
    Write(u16, u8),
}

/// Flat memory that records every read and write.
pub struct RecordingBus {
    pub memory: FlatMemory,
    pub log: Vec<Access>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            memory: FlatMemory::new(),
            log: Vec::new(),
        }
    }

    /// Writes directly into memory without recording.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn peek(&mut self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn reads(&self) -> Vec<u16> {
        self.log
            .iter()
            .filter_map(|access| match access {
                Access::Read(addr, _) => Some(*addr),
                Access::Write(..) => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.log
            .iter()
            .filter_map(|access| match access {
                Access::Write(addr, value) => Some((*addr, *value)),
                Access::Read(..) => None,
            })
            .collect()
    }
}

impl MemoryBus for RecordingBus {
    fn read(&mut self, addr: u16) -> u8 {
        let value = self.memory.read(addr);
        self.log.push(Access::Read(addr, value));
        value
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.log.push(Access::Write(addr, value));
        self.memory.write(addr, value);
    }
}

/// CPU on a recording bus with reset vector 0x8000 and an empty access log.
pub fn setup_recording_cpu() -> Cpu<RecordingBus> {
    let mut bus = RecordingBus::new();
    bus.poke(0xFFFC, 0x00);
    bus.poke(0xFFFD, 0x80);
    let mut cpu = Cpu::new(bus);
    cpu.bus_mut().log.clear();
    cpu
}
