//! # 6502 Instruction-Execution Engine
//!
//! A table-driven NMOS 6502 core: the fetch-decode-execute loop, addressing
//! mode resolution and status flag algebra, with bit-exact, reproducible
//! semantics for all 151 documented opcodes.
//!
//! ## Quick Start
//!
//! ```rust
//! use core6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x05);
//! memory.write(0x8002, 0x69);
//! memory.write(0x8003, 0x03);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//!
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cpu.pc(), 0x8004);
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Ownership**: each `CPU` owns its registers and its memory; independent
//!   machines never share state
//! - **Table-Driven Design**: all opcode metadata lives in `OPCODE_TABLE`;
//!   dispatch is a `match` on the operation tag
//! - **One PC rule**: the engine consumes the opcode byte, the addressing mode
//!   resolver consumes exactly the operand bytes
//! - **Explicit quirks**: hardware defects and decimal mode are `CpuConfig`
//!   options
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `registers` - Register file and status flag packing
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode metadata table
//! - `config` - Behavior switches
//!
//! ## Logging
//!
//! The engine logs through the `log` facade: one `trace` line per executed
//! instruction, `debug` on reset and requested halts, `warn` when an illegal
//! opcode halts the CPU. No logger is installed by this crate.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use config::{CpuConfig, DecimalMode};
pub use cpu::{RunState, CPU, IRQ_VECTOR, RESET_VECTOR};
pub use error::{ExecutionError, HaltReason, LoadError};
pub use memory::{FlatMemory, MemoryBus, ADDRESS_SPACE_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, StatusFlags};
