//! # Load and Store Instructions
//!
//! This module implements:
//! - LDA, LDX, LDY: Load a register from memory (updates Z and N)
//! - STA, STX, STY: Store a register to memory (no flags affected)

use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set to bit 7 of the loaded value
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.flags.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.x = value;
    cpu.regs.flags.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.y = value;
    cpu.regs.flags.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.a;
    store(cpu, operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.x;
    store(cpu, operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.y;
    store(cpu, operand, value);
}

fn store<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8) {
    if let Operand::Address(addr) = operand {
        cpu.memory.write(addr, value);
    }
}
