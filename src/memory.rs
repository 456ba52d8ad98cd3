//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! storage behind its 64KB address space, and `FlatMemory`, the plain 65536-byte
//! RAM the engine normally owns.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are `u16`, so every address is in range by construction
//! - Words are little-endian (low byte first)
//!
//! ## Word Reads and the Zero Page
//!
//! General 16-bit reads wrap at the top of the address space: the high byte of
//! `read_word(0xFFFF)` comes from 0x0000. The zero-page indirect addressing
//! modes use `read_word_zero_page` instead, whose high byte wraps within page
//! zero: the pointer at 0xFF takes its high byte from 0x00, not 0x100.

use std::io::{Read, Write};

use crate::LoadError;

/// Size of the 6502 address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// Only `read` and `write` are required; the word helpers are derived from
/// them.
///
/// # Examples
///
/// ```
/// use core6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_word(0x1234, 0xBEEF);
/// assert_eq!(mem.read(0x1234), 0xEF);
/// assert_eq!(mem.read(0x1235), 0xBE);
/// assert_eq!(mem.read_word(0x1234), 0xBEEF);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use core6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps modulo 65536.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian pointer stored in the zero page.
    ///
    /// The high byte is fetched from `(zp + 1) & 0xFF`, reproducing the
    /// page-zero wraparound of the `($zp,X)` and `($zp),Y` addressing modes.
    ///
    /// ```
    /// use core6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x00FF, 0x34);
    /// mem.write(0x0000, 0x12);
    /// mem.write(0x0100, 0x99);
    ///
    /// assert_eq!(mem.read_word_zero_page(0xFF), 0x1234);
    /// assert_eq!(mem.read_word(0x00FF), 0x9934);
    /// ```
    fn read_word_zero_page(&self, zp: u8) -> u16 {
        let lo = self.read(zp as u16) as u16;
        let hi = self.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word to `addr` and `addr + 1`.
    ///
    /// Symmetric to [`read_word`](MemoryBus::read_word).
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set up reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
///
/// // Load a simple program at 0x8000
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Creates memory holding `image` at address 0x0000, the rest zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ImageTooLarge`] if `image` is longer than 65536 bytes.
    ///
    /// ```
    /// use core6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::from_image(&[0xA9, 0x42]).unwrap();
    /// assert_eq!(mem.read(0x0000), 0xA9);
    /// assert_eq!(mem.read(0x0001), 0x42);
    /// assert_eq!(mem.read(0x0002), 0x00);
    /// ```
    pub fn from_image(image: &[u8]) -> Result<Self, LoadError> {
        let mut memory = Self::new();
        memory.load_image(image)?;
        Ok(memory)
    }

    /// Copies a raw image verbatim into memory starting at address 0x0000.
    ///
    /// No header, no relocation. Bytes past the end of the image are left
    /// untouched. An oversized image is rejected before anything is written.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > ADDRESS_SPACE_SIZE {
            return Err(LoadError::ImageTooLarge { len: image.len() });
        }
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Reads a raw image from `reader` and loads it at address 0x0000.
    ///
    /// At most 65536 bytes are accepted; a longer stream fails with
    /// [`LoadError::ImageTooLarge`] and memory is left unchanged.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let mut image = Vec::with_capacity(ADDRESS_SPACE_SIZE);
        // One byte of headroom is enough to detect an oversized stream.
        reader
            .take(ADDRESS_SPACE_SIZE as u64 + 1)
            .read_to_end(&mut image)?;
        self.load_image(&image)
    }

    /// Returns the whole address space in address order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// Writes all 65536 bytes to `writer` in address order.
    pub fn dump_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.as_bytes())?;
        writer.flush()
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
