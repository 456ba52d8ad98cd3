//! Tests for LDA, LDX, LDY, STA, STX and STY across addressing modes.

use core6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();

    // LDA #$42
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_sets_z() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_sets_n() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_absolute_y_no_page_cross() {
    let mut cpu = setup_cpu();

    // LDA $2000,Y
    cpu.memory_mut().write(0x8000, 0xB9);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2010, 0x99);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let mut cpu = setup_cpu();

    // LDA ($40),Y
    cpu.memory_mut().write(0x8000, 0xB1);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write_word(0x0040, 0x20F0);
    cpu.memory_mut().write(0x2100, 0x5A);
    cpu.set_y(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    // LDX $10,Y
    cpu.memory_mut().write(0x8000, 0xB6);
    cpu.memory_mut().write(0x8001, 0x10);
    cpu.memory_mut().write(0x0015, 0x77);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x77);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    // LDX $10FF,Y
    cpu.memory_mut().write(0x8000, 0xBE);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x10);
    cpu.memory_mut().write(0x1100, 0x01);
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();

    // LDY $FF,X
    cpu.memory_mut().write(0x8000, 0xB4);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x0001, 0xAB);
    cpu.set_x(0x02);

    cpu.step().unwrap();

    // Effective address wraps to 0x0001
    assert_eq!(cpu.y(), 0xAB);
    assert!(cpu.flag_n());
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    // STA $20
    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.set_a(0x42);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0020), 0x42);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x85);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.set_a(0x00);
    let status = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.status(), status);
}

#[test]
fn test_sta_absolute_x_has_fixed_timing() {
    let mut cpu = setup_cpu();

    // STA $20FF,X
    cpu.memory_mut().write(0x8000, 0x9D);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.set_x(0x01);
    cpu.set_a(0x11);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2100), 0x11);
    // Stores never pay the page-cross cycle
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($80),Y
    cpu.memory_mut().write(0x8000, 0x91);
    cpu.memory_mut().write(0x8001, 0x80);
    cpu.memory_mut().write_word(0x0080, 0x3000);
    cpu.set_y(0x02);
    cpu.set_a(0xEE);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3002), 0xEE);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    // STX $F0,Y
    cpu.memory_mut().write(0x8000, 0x96);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.set_y(0x20);
    cpu.set_x(0x66);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x66);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    // STY $4000
    cpu.memory_mut().write(0x8000, 0x8C);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x40);
    cpu.set_y(0x3C);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x4000), 0x3C);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}
