//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! SBC is ADC of the one's complement of the operand, with carry acting as
//! "not borrow", so both share one binary adder and one overflow rule.

use crate::{DecimalMode, MemoryBus, Operand, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates C, Z, V
/// and N. In decimal mode the addition is done in packed BCD.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both inputs have the same sign and the result's sign differs
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if decimal_active(cpu) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). Carry is cleared when a borrow occurs.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    if decimal_active(cpu) {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a & cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a | cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a ^ cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.flags.set_zn(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// ANDs the accumulator with memory without storing the result.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M == 0
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.regs.flags.z = cpu.regs.a & value == 0;
    cpu.regs.flags.n = value & 0x80 != 0;
    cpu.regs.flags.v = value & 0x40 != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.y;
    compare(cpu, register, value);
}

/// Sets C, Z and N as for `register - value`, without storing the difference.
///
/// N is bit 7 of the 8-bit difference, not of the register.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);

    cpu.regs.flags.c = register >= value;
    cpu.regs.flags.z = register == value;
    cpu.regs.flags.n = diff & 0x80 != 0;
}

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.regs.flags.d && cpu.config.decimal_mode == DecimalMode::Bcd
}

/// Binary add with carry, shared by ADC and SBC.
fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let sum = a as u16 + value as u16 + cpu.regs.flags.c as u16;
    let result = sum as u8;

    cpu.regs.flags.c = sum > 0xFF;
    // Both operands had the same sign and the result's sign differs
    cpu.regs.flags.v = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.regs.flags.set_zn(result);
    cpu.regs.a = result;
}

/// NMOS decimal-mode ADC.
///
/// Z comes from the plain binary sum. N and V are taken from the intermediate
/// result after the low nibble is adjusted but before the high nibble is.
fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a as u16;
    let v = value as u16;
    let carry = cpu.regs.flags.c as u16;

    let mut lo = (a & 0x0F) + (v & 0x0F) + carry;
    if lo > 0x09 {
        lo += 0x06;
    }
    let mut hi = (a >> 4) + (v >> 4) + (lo > 0x0F) as u16;

    let intermediate = ((hi << 4) | (lo & 0x0F)) as u8;
    cpu.regs.flags.z = (a + v + carry) as u8 == 0;
    cpu.regs.flags.n = intermediate & 0x80 != 0;
    cpu.regs.flags.v = !(cpu.regs.a ^ value) & (cpu.regs.a ^ intermediate) & 0x80 != 0;

    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.regs.flags.c = hi > 0x0F;
    cpu.regs.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
}

/// NMOS decimal-mode SBC.
///
/// All flags match binary SBC; only the accumulator is decimal-adjusted.
fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a as i16;
    let v = value as i16;
    let borrow = !cpu.regs.flags.c as i16;

    let mut lo = (a & 0x0F) - (v & 0x0F) - borrow;
    if lo < 0 {
        lo = ((lo - 0x06) & 0x0F) - 0x10;
    }
    let mut result = (a & 0xF0) - (v & 0xF0) + lo;
    if result < 0 {
        result -= 0x60;
    }

    add_binary(cpu, !value);
    cpu.regs.a = (result & 0xFF) as u8;
}
