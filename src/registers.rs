//! # Register File
//!
//! The 6502 programmer-visible state: the 16-bit program counter, the 8-bit
//! stack pointer, accumulator and index registers, and the seven status flags.
//!
//! ## Status Register Layout
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  N V 1 B D I Z C
//! ```
//!
//! Bit 5 is not a flag and always reads as 1.

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Negative flag bit in the packed status byte.
pub const FLAG_N: u8 = 0b1000_0000;
/// Overflow flag bit.
pub const FLAG_V: u8 = 0b0100_0000;
/// Unused bit, always set when the status is packed.
pub const FLAG_UNUSED: u8 = 0b0010_0000;
/// Break flag bit.
pub const FLAG_B: u8 = 0b0001_0000;
/// Decimal mode flag bit.
pub const FLAG_D: u8 = 0b0000_1000;
/// Interrupt disable flag bit.
pub const FLAG_I: u8 = 0b0000_0100;
/// Zero flag bit.
pub const FLAG_Z: u8 = 0b0000_0010;
/// Carry flag bit.
pub const FLAG_C: u8 = 0b0000_0001;

/// The seven processor status flags.
///
/// Each field is independent; assigning one never touches another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    /// Negative flag (set if bit 7 of result is 1)
    pub n: bool,

    /// Overflow flag (set on signed overflow)
    pub v: bool,

    /// Break flag
    pub b: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub d: bool,

    /// Interrupt disable flag
    pub i: bool,

    /// Zero flag (set if result is zero)
    pub z: bool,

    /// Carry flag (set on unsigned overflow, clear on borrow)
    pub c: bool,
}

impl StatusFlags {
    /// Packs the flags into a status byte (NV1BDIZC).
    ///
    /// ```
    /// use core6502::StatusFlags;
    ///
    /// let flags = StatusFlags { n: true, c: true, ..StatusFlags::default() };
    /// assert_eq!(flags.to_byte(), 0b1010_0001);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut status = FLAG_UNUSED;

        if self.n {
            status |= FLAG_N;
        }
        if self.v {
            status |= FLAG_V;
        }
        if self.b {
            status |= FLAG_B;
        }
        if self.d {
            status |= FLAG_D;
        }
        if self.i {
            status |= FLAG_I;
        }
        if self.z {
            status |= FLAG_Z;
        }
        if self.c {
            status |= FLAG_C;
        }

        status
    }

    /// Unpacks a status byte. Bit 5 is ignored.
    pub fn from_byte(status: u8) -> Self {
        Self {
            n: status & FLAG_N != 0,
            v: status & FLAG_V != 0,
            b: status & FLAG_B != 0,
            d: status & FLAG_D != 0,
            i: status & FLAG_I != 0,
            z: status & FLAG_Z != 0,
            c: status & FLAG_C != 0,
        }
    }

    /// Sets Z and N from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & 0x80 != 0;
    }
}

/// CPU register set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Processor status flags
    pub flags: StatusFlags,
}

impl Registers {
    /// Creates registers in the power-on reset state with the given PC.
    ///
    /// SP is 0xFD, A/X/Y are zero and only the I flag is set.
    pub fn power_on(pc: u16) -> Self {
        Self {
            pc,
            sp: 0xFD,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            flags: StatusFlags {
                i: true,
                ..StatusFlags::default()
            },
        }
    }

    /// Returns the packed status byte (NV1BDIZC).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the full address SP points at.
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}
