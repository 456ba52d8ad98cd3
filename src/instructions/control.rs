//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK: Force Interrupt
//! - RTI: Return from Interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes the address of the opcode plus 2 (high byte first, then low byte)
//! 2. Pushes processor status to stack with B and bit 5 set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::registers::FLAG_B;
use crate::{MemoryBus, Operand, StatusFlags, CPU, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
///
/// The addressing mode resolver has already produced the final target, so
/// absolute and indirect JMP are the same operation here. The indirect page
/// wrap quirk is handled during resolution.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction, then jumps.
/// RTS adds one to the pulled address to reach the next instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        let return_address = cpu.regs.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.regs.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is a single byte but leaves a padding byte after the opcode, so the
/// pushed return address skips it.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set in the pushed status byte only, the live flag is untouched
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.regs.status() | FLAG_B;
    cpu.push_byte(status);

    cpu.regs.flags.i = true;
    cpu.regs.pc = cpu.memory.read_word(IRQ_VECTOR);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then PC. Unlike RTS, the pulled PC is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull_byte();
    cpu.regs.flags = StatusFlags::from_byte(status);
    cpu.regs.pc = cpu.pull_word();
}
