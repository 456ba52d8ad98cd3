//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that the addressing modes compute effective addresses
//! correctly and handle zero-page wraparound and page boundary crossing.

use core6502::{AddressingMode, CpuConfig, FlatMemory, MemoryBus, Operand, Registers, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Zero Page Addressing Tests ==========

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(zp_addr as u16, value);

        // LDA $zp
        cpu.memory_mut().write(0x8000, 0xA5);
        cpu.memory_mut().write(0x8001, zp_addr);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Zero page,X addressing wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(base in 0u8..=255u8, x in 0u8..=255u8) {
        let mut regs = Registers::power_on(0x8000);
        regs.x = x;
        let mut mem = FlatMemory::new();
        mem.write(0x8000, base);

        let resolved = AddressingMode::ZeroPageX.resolve(&mut regs, &mem, &CpuConfig::nmos());

        prop_assert_eq!(resolved.operand, Operand::Address(base.wrapping_add(x) as u16));
        prop_assert_eq!(regs.pc, 0x8001);
    }

    /// Property: (zp,X) reads its pointer from zero page, wrapping both bytes
    #[test]
    fn prop_indirect_x_pointer_stays_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        target in 0u16..=0xFFFF,
    ) {
        let mut regs = Registers::power_on(0x8000);
        regs.x = x;
        let mut mem = FlatMemory::new();
        mem.write(0x8000, base);

        let ptr = base.wrapping_add(x);
        mem.write(ptr as u16, (target & 0xFF) as u8);
        mem.write(ptr.wrapping_add(1) as u16, (target >> 8) as u8);

        let resolved = AddressingMode::IndirectX.resolve(&mut regs, &mem, &CpuConfig::nmos());

        prop_assert_eq!(resolved.operand, Operand::Address(target));
    }
}

// ========== Absolute Indexed Tests ==========

proptest! {
    /// Property: Absolute,X wraps modulo 65536 and reports page crossings
    #[test]
    fn prop_absolute_x_wraps_and_detects_page_cross(base in 0u16..=0xFFFF, x in 0u8..=255u8) {
        let mut regs = Registers::power_on(0x8000);
        regs.x = x;
        let mut mem = FlatMemory::new();
        mem.write_word(0x8000, base);

        let resolved = AddressingMode::AbsoluteX.resolve(&mut regs, &mem, &CpuConfig::nmos());
        let expected = base.wrapping_add(x as u16);

        prop_assert_eq!(resolved.operand, Operand::Address(expected));
        prop_assert_eq!(resolved.page_crossed, (base & 0xFF00) != (expected & 0xFF00));
        prop_assert_eq!(regs.pc, 0x8002);
    }

    /// Property: LDA abs,Y costs 4 cycles, 5 when the index crosses a page
    #[test]
    fn prop_lda_absolute_y_cycles(base in 0x0200u16..=0x7EFF, y in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().write(0x8000, 0xB9);
        cpu.memory_mut().write_word(0x8001, base);

        cpu.step().unwrap();

        let crossed = (base & 0xFF) + y as u16 > 0xFF;
        prop_assert_eq!(cpu.cycles(), if crossed { 5 } else { 4 });
    }

    /// Property: (zp),Y adds Y to the pointer read from zero page
    #[test]
    fn prop_indirect_y_adds_y_after_dereference(
        zp in 0u8..=255u8,
        pointer in 0u16..=0xFFFF,
        y in 0u8..=255u8,
    ) {
        let mut regs = Registers::power_on(0x8000);
        regs.y = y;
        let mut mem = FlatMemory::new();
        mem.write(0x8000, zp);
        mem.write(zp as u16, (pointer & 0xFF) as u8);
        mem.write(zp.wrapping_add(1) as u16, (pointer >> 8) as u8);

        let resolved = AddressingMode::IndirectY.resolve(&mut regs, &mem, &CpuConfig::nmos());

        prop_assert_eq!(resolved.operand, Operand::Address(pointer.wrapping_add(y as u16)));
    }
}

// ========== Relative Addressing Tests ==========

proptest! {
    /// Property: branch targets are measured from the following instruction
    #[test]
    fn prop_relative_target(pc in 0u16..=0xFFFD, offset in any::<i8>()) {
        let mut regs = Registers::power_on(pc);
        let mut mem = FlatMemory::new();
        mem.write(pc, offset as u8);

        let resolved = AddressingMode::Relative.resolve(&mut regs, &mem, &CpuConfig::nmos());
        let next = pc.wrapping_add(1);

        prop_assert_eq!(resolved.operand, Operand::Address(next.wrapping_add_signed(offset as i16)));
        prop_assert_eq!(regs.pc, next);
    }
}
