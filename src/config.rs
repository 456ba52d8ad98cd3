//! # CPU Configuration
//!
//! The NMOS 6502 has a handful of behaviors that emulators disagree on or that
//! only some derived chips share. Each one is an explicit option here rather
//! than a hardcoded choice in the instruction code.

/// How ADC and SBC treat the D (decimal) flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecimalMode {
    /// Packed BCD arithmetic when D is set, with NMOS flag behavior.
    #[default]
    Bcd,

    /// D can be set and cleared but ADC/SBC always operate in binary
    /// (Ricoh 2A03 behavior).
    Ignore,
}

/// Engine behavior switches.
///
/// # Examples
///
/// ```
/// use core6502::{CpuConfig, DecimalMode};
///
/// let config = CpuConfig::nmos()
///     .with_indirect_jmp_page_wrap(false)
///     .with_decimal_mode(DecimalMode::Ignore);
///
/// assert!(!config.indirect_jmp_page_wrap);
/// assert!(config.page_cross_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Reproduce the `JMP ($xxFF)` defect: the high byte of the target is
    /// fetched from `$xx00` instead of the start of the next page.
    pub indirect_jmp_page_wrap: bool,

    /// Charge one extra cycle when an indexed read or a taken branch crosses
    /// a page boundary.
    pub page_cross_penalty: bool,

    /// Decimal flag handling for ADC/SBC.
    pub decimal_mode: DecimalMode,
}

impl CpuConfig {
    /// Behavior of an original NMOS 6502: every quirk on, BCD arithmetic.
    pub const fn nmos() -> Self {
        Self {
            indirect_jmp_page_wrap: true,
            page_cross_penalty: true,
            decimal_mode: DecimalMode::Bcd,
        }
    }

    /// NMOS core as found in the Ricoh 2A03: decimal flag has no effect.
    pub const fn ricoh_2a03() -> Self {
        Self {
            decimal_mode: DecimalMode::Ignore,
            ..Self::nmos()
        }
    }

    /// Sets [`indirect_jmp_page_wrap`](Self::indirect_jmp_page_wrap).
    pub const fn with_indirect_jmp_page_wrap(mut self, enabled: bool) -> Self {
        self.indirect_jmp_page_wrap = enabled;
        self
    }

    /// Sets [`page_cross_penalty`](Self::page_cross_penalty).
    pub const fn with_page_cross_penalty(mut self, enabled: bool) -> Self {
        self.page_cross_penalty = enabled;
        self
    }

    /// Sets [`decimal_mode`](Self::decimal_mode).
    pub const fn with_decimal_mode(mut self, mode: DecimalMode) -> Self {
        self.decimal_mode = mode;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::nmos()
    }
}
