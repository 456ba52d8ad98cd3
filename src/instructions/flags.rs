//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV. Each touches exactly one flag.
//! There is no instruction that sets V directly.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.c = false;
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.c = true;
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.i = false;
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.i = true;
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.d = false;
}

/// Sets decimal mode. Whether ADC/SBC honor it depends on
/// [`DecimalMode`](crate::DecimalMode).
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.d = true;
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.flags.v = false;
}
