//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Transfers between A, X and Y update Z and N from the copied value.
//! TSX and TXS move the stack pointer and leave the flags alone.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.flags.set_zn(cpu.regs.x);
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.flags.set_zn(cpu.regs.y);
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.flags.set_zn(cpu.regs.a);
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.flags.set_zn(cpu.regs.a);
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.sp;
}

pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.sp = cpu.regs.x;
}
