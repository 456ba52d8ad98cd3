//! # Shift and Rotate Instructions
//!
//! This module implements:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works either on the accumulator or, read-modify-write, on memory.
//! C receives the bit shifted out; Z and N come from the result.

use crate::{MemoryBus, Operand, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value << 1;

    cpu.regs.flags.c = value & 0x80 != 0;
    finish(cpu, operand, result);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value >> 1;

    cpu.regs.flags.c = value & 0x01 != 0;
    finish(cpu, operand, result);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters at bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = (value << 1) | cpu.regs.flags.c as u8;

    cpu.regs.flags.c = value & 0x80 != 0;
    finish(cpu, operand, result);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters at bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = (value >> 1) | ((cpu.regs.flags.c as u8) << 7);

    cpu.regs.flags.c = value & 0x01 != 0;
    finish(cpu, operand, result);
}

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, result: u8) {
    cpu.write_operand(operand, result);
    cpu.regs.flags.set_zn(result);
}
