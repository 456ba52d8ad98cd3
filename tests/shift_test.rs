//! Tests for ASL, LSR, ROL and ROR on the accumulator and on memory.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    // ASL A
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_asl_absolute_x_read_modify_write() {
    let mut cpu = setup_cpu();

    // ASL $3000,X
    cpu.memory_mut().write(0x8000, 0x1E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x30);
    cpu.memory_mut().write(0x3005, 0x40);
    cpu.set_x(0x05);
    cpu.set_a(0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3005), 0x80);
    assert_eq!(cpu.a(), 0x12);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 7);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator_to_zero() {
    let mut cpu = setup_cpu();

    // LSR A
    cpu.memory_mut().write(0x8000, 0x4A);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_zero_page() {
    let mut cpu = setup_cpu();

    // LSR $10
    cpu.memory_mut().write(0x8000, 0x46);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0010, 0xFE);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x7F);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 5);
}

// ========== ROL ==========

#[test]
fn test_rol_shifts_carry_in() {
    let mut cpu = setup_cpu();

    // ROL A
    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_rol_without_carry_can_reach_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x80);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

// ========== ROR ==========

#[test]
fn test_ror_shifts_carry_into_bit_7() {
    let mut cpu = setup_cpu();

    // ROR A
    cpu.memory_mut().write(0x8000, 0x6A);
    cpu.set_a(0x02);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_absolute() {
    let mut cpu = setup_cpu();

    // ROR $2000
    cpu.memory_mut().write(0x8000, 0x6E);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_flag_c(false);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2000), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles(), 6);
}
