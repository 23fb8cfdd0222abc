//! # CPU Configuration
//!
//! Behaviour switches for the points where 6502 references disagree, plus the
//! interrupt trace toggle. Every field has a default, so an empty TOML
//! document yields [`CpuConfig::default`].
//!
//! ```toml
//! ror_carry = "bit7"
//! clear_decimal_on_interrupt = false
//! trace_interrupts = true
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which bit of the operand ROR moves into the carry flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RorCarry {
    /// Bit 0, the bit shifted out of the bottom. Matches NMOS hardware.
    #[default]
    Bit0,
    /// Bit 7. Reproduces emulators that copied ROL's carry logic into ROR.
    Bit7,
}

/// Errors produced while loading a [`CpuConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CPU configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable CPU behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Carry source for ROR.
    pub ror_carry: RorCarry,

    /// Clear the decimal flag on BRK, IRQ and NMI entry.
    ///
    /// CMOS parts do this; NMOS parts leave D alone. Most NES-era emulators
    /// clear it, so it defaults to true.
    pub clear_decimal_on_interrupt: bool,

    /// Set the interrupt disable flag on NMI entry.
    pub nmi_sets_interrupt_disable: bool,

    /// Install a [`LogTrace`](crate::LogTrace) sink so interrupt entries are
    /// reported through the `log` facade.
    pub trace_interrupts: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            ror_carry: RorCarry::Bit0,
            clear_decimal_on_interrupt: true,
            nmi_sets_interrupt_disable: true,
            trace_interrupts: false,
        }
    }
}

impl CpuConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
