//! # Error Types
//!
//! Errors surfaced by the execution engine and by the memory image helpers.
//!
//! The engine has exactly one instruction-level failure: fetching an opcode
//! that has no entry in the opcode table. Every address the engine computes is
//! a `u16` (or a `u8` for zero page) that wraps explicitly, so out-of-range
//! memory access is not an error that can happen at runtime.

use std::fmt;

use thiserror::Error;

/// Why the engine stopped executing instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The byte at `address` is not a documented opcode.
    IllegalOpcode {
        /// The opcode byte that was fetched
        opcode: u8,
        /// The address it was fetched from
        address: u16,
    },

    /// The host asked the engine to stop via [`CPU::request_halt`](crate::CPU::request_halt).
    Requested,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::IllegalOpcode { opcode, address } => {
                write!(f, "illegal opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
            HaltReason::Requested => write!(f, "halt requested"),
        }
    }
}

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched opcode has no implementation in the opcode table.
    ///
    /// The engine is halted and no register, memory cell or cycle count was
    /// modified by the failed step.
    #[error("illegal opcode 0x{opcode:02X} at address 0x{address:04X}")]
    IllegalOpcode {
        /// The opcode byte that was fetched
        opcode: u8,
        /// The address it was fetched from
        address: u16,
    },

    /// `step()` was called on an engine that has already halted.
    #[error("CPU is halted: {0}")]
    Halted(HaltReason),
}

/// Errors from loading a raw binary image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image does not fit into the 64KB address space.
    #[error("image of {len} bytes exceeds the 65536-byte address space")]
    ImageTooLarge {
        /// Length of the rejected image
        len: usize,
    },

    /// Reading the image from its source failed.
    #[error("failed to read memory image")]
    Io(#[from] std::io::Error),
}
