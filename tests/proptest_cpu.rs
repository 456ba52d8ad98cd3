//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use core6502::{FlatMemory, MemoryBus, Mnemonic, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Documented opcodes that fall through to the next instruction
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_implemented() && !m.mnemonic.is_control_flow())
        .map(|(i, _)| i as u8)
        .collect()
}

/// Immediate-mode opcodes whose result lands in a register
fn immediate_load_or_alu() -> Vec<(u8, Mnemonic)> {
    vec![
        (0xA9, Mnemonic::Lda),
        (0xA2, Mnemonic::Ldx),
        (0xA0, Mnemonic::Ldy),
        (0x29, Mnemonic::And),
        (0x09, Mnemonic::Ora),
        (0x49, Mnemonic::Eor),
        (0x69, Mnemonic::Adc),
        (0xE9, Mnemonic::Sbc),
    ]
}

proptest! {
    /// Property: a fall-through instruction advances PC by exactly its size
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        status in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, operand1);
        cpu.memory_mut().write(0x8002, operand2);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_status(status);

        cpu.step().unwrap();

        let metadata = OPCODE_TABLE[opcode as usize];
        prop_assert_eq!(cpu.pc(), 0x8000 + metadata.size_bytes as u16);
        prop_assert!(cpu.cycles() >= metadata.base_cycles as u64);
        prop_assert!(cpu.cycles() <= metadata.base_cycles as u64 + 1);
    }

    /// Property: Z is set iff the result is zero, N iff bit 7 is set
    #[test]
    fn prop_zn_follow_result(
        (opcode, mnemonic) in prop::sample::select(immediate_load_or_alu()),
        value in any::<u8>(),
        a in any::<u8>(),
        carry in any::<bool>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, value);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let result = match mnemonic {
            Mnemonic::Ldx => cpu.x(),
            Mnemonic::Ldy => cpu.y(),
            _ => cpu.a(),
        };
        prop_assert_eq!(cpu.flag_z(), result == 0);
        prop_assert_eq!(cpu.flag_n(), result & 0x80 != 0);
    }

    /// Property: binary ADC matches wide arithmetic
    #[test]
    fn prop_adc_binary(a in any::<u8>(), value in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x69);
        cpu.memory_mut().write(0x8001, value);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let sum = a as u16 + value as u16 + carry as u16;
        let signed = a as i8 as i16 + value as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: binary SBC matches wide arithmetic
    #[test]
    fn prop_sbc_binary(a in any::<u8>(), value in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE9);
        cpu.memory_mut().write(0x8001, value);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let borrow = !carry as i16;
        let diff = a as i16 - value as i16 - borrow;
        let signed = a as i8 as i16 - value as i8 as i16 - borrow;
        prop_assert_eq!(cpu.a(), diff as u8);
        prop_assert_eq!(cpu.flag_c(), diff >= 0);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets C iff A >= M, Z iff equal, and keeps A
    #[test]
    fn prop_cmp(a in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xC9);
        cpu.memory_mut().write(0x8001, value);
        cpu.set_a(a);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag_c(), a >= value);
        prop_assert_eq!(cpu.flag_z(), a == value);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(value) & 0x80 != 0);
    }

    /// Property: PHA followed by PLA restores A and SP
    #[test]
    fn prop_pha_pla_round_trip(a in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x48);
        cpu.memory_mut().write(0x8001, 0xA9); // LDA #$00
        cpu.memory_mut().write(0x8002, 0x00);
        cpu.memory_mut().write(0x8003, 0x68);
        cpu.set_a(a);
        cpu.set_sp(sp);

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: word writes read back for every non-wrapping address
    #[test]
    fn prop_write_word_read_word(addr in 0u16..=0xFFFE, value in any::<u16>()) {
        let mut mem = FlatMemory::new();
        mem.write_word(addr, value);
        prop_assert_eq!(mem.read_word(addr), value);
    }

    /// Property: the packed status byte always has bit 5 set and round-trips
    #[test]
    fn prop_status_round_trip(status in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_status(status);
        prop_assert_eq!(cpu.status(), status | 0x20);
    }
}
