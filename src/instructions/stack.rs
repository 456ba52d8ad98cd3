//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::registers::FLAG_B;
use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// // Stack should contain the accumulator value
/// assert_eq!(cpu.memory().read(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.regs.a;
    cpu.push_byte(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.status() | FLAG_B;
    cpu.push_byte(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull_byte();
    cpu.regs.a = value;
    cpu.regs.flags.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All seven flags are replaced from the pulled byte. Bit 5 is ignored.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull_byte();
    cpu.regs.flags = StatusFlags::from_byte(status);
}
