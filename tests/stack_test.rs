//! Tests for PHA, PHP, PLA and PLP.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();

    // PHA
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_pha_pla_restores_a_and_sp() {
    let mut cpu = setup_cpu();

    // PHA; LDA #$00; PLA
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.memory_mut().write(0x8001, 0xA9);
    cpu.memory_mut().write(0x8002, 0x00);
    cpu.memory_mut().write(0x8003, 0x68);
    cpu.set_a(0x99);
    let sp = cpu.sp();

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.sp(), sp);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 3 + 2 + 4);
}

#[test]
fn test_php_sets_break_and_bit_5_in_pushed_byte() {
    let mut cpu = setup_cpu();

    // PHP
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_status(0x00);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0x31);
    assert_eq!(cpu.sp(), 0xFC);
    // The live B flag is untouched
    assert!(!cpu.flag_b());
}

#[test]
fn test_plp_restores_flags() {
    let mut cpu = setup_cpu();

    // PLP
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FE, 0xC3);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0xFE);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.status(), 0xE3);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();

    // PHP; CLC; SEI; PLP
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.memory_mut().write(0x8001, 0x18);
    cpu.memory_mut().write(0x8002, 0x78);
    cpu.memory_mut().write(0x8003, 0x28);
    cpu.set_status(0x00);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_plp_latches_break_from_pushed_byte() {
    let mut cpu = setup_cpu();

    // PHP; PLP
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.memory_mut().write(0x8001, 0x28);
    assert!(!cpu.flag_b());

    cpu.step().unwrap();
    assert!(!cpu.flag_b());

    cpu.step().unwrap();
    assert!(cpu.flag_b());
}

#[test]
fn test_stack_pointer_wraps_within_page_one() {
    let mut cpu = setup_cpu();

    // PHA with SP at the bottom of the page
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_sp(0x00);
    cpu.set_a(0x5A);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x5A);
    assert_eq!(cpu.sp(), 0xFF);
}
