//! # Increment and Decrement Instructions
//!
//! This module implements:
//! - INC, DEC: Increment / decrement a memory location
//! - INX, DEX: Increment / decrement the X register
//! - INY, DEY: Increment / decrement the Y register
//!
//! All of them wrap modulo 256, update Z and N, and leave C and V alone.

use crate::{MemoryBus, Operand, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Read-modify-write: the incremented value is written back to the
/// resolved address.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.regs.flags.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.regs.flags.set_zn(result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.flags.set_zn(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.flags.set_zn(cpu.regs.y);
}

/// Executes the DEX (Decrement X) instruction. Y is not touched.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.flags.set_zn(cpu.regs.x);
}

/// Executes the DEY (Decrement Y) instruction. X is not touched.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.flags.set_zn(cpu.regs.y);
}
