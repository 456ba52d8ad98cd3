//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Branch on Carry Clear / Set
//! - BNE, BEQ: Branch on Zero Clear / Set
//! - BPL, BMI: Branch on Negative Clear / Set
//! - BVC, BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! measured from the address of the following instruction. The resolver has
//! already computed the target and whether it lies on another page.

use crate::{MemoryBus, Operand, Resolved, CPU};

/// Finishes a branch instruction.
///
/// `taken` is the branch condition, evaluated by the dispatcher against the
/// flag each branch tests.
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to same page
/// - 4 cycles if branch taken to different page (when page-cross timing is enabled)
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, resolved: Resolved, taken: bool) {
    if !taken {
        return;
    }

    if let Operand::Address(target) = resolved.operand {
        cpu.regs.pc = target;
        cpu.cycles += 1;

        if resolved.page_crossed && cpu.config.page_cross_penalty {
            cpu.cycles += 1;
        }
    }
}
