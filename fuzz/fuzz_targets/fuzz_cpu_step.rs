//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, configuration and memory contents
//! around 0x8000, executes one instruction and checks the invariants every
//! step must keep.

#![no_main]

use arbitrary::Arbitrary;
use core6502::{CpuConfig, DecimalMode, ExecutionError, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC byte
    status: u8,
}

/// Arbitrary behavior switches
#[derive(Debug, Arbitrary)]
struct FuzzConfig {
    indirect_jmp_page_wrap: bool,
    page_cross_penalty: bool,
    ignore_decimal: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    config: FuzzConfig,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector to 0x8000, IRQ vector to 0x9000
    memory.write_word(0xFFFC, 0x8000);
    memory.write_word(0xFFFE, 0x9000);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }

    let decimal_mode = if input.config.ignore_decimal {
        DecimalMode::Ignore
    } else {
        DecimalMode::Bcd
    };
    let config = CpuConfig::nmos()
        .with_indirect_jmp_page_wrap(input.config.indirect_jmp_page_wrap)
        .with_page_cross_penalty(input.config.page_cross_penalty)
        .with_decimal_mode(decimal_mode);

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = input.memory.instruction_bytes[0];
    let metadata = OPCODE_TABLE[opcode as usize];
    let before = cpu.registers();

    match cpu.step() {
        Ok(()) => {
            assert!(cpu.cycles() >= metadata.base_cycles as u64);
            assert!(cpu.cycles() <= metadata.base_cycles as u64 + 2);
            assert_eq!(cpu.status() & 0x20, 0x20);

            if !metadata.mnemonic.is_control_flow() {
                assert_eq!(cpu.pc(), 0x8000 + metadata.size_bytes as u16);
            }
        }
        Err(ExecutionError::IllegalOpcode { opcode: op, address }) => {
            assert!(!metadata.is_implemented());
            assert_eq!(op, opcode);
            assert_eq!(address, 0x8000);
            assert_eq!(cpu.registers(), before);
            assert_eq!(cpu.cycles(), 0);
            assert!(cpu.is_halted());
        }
        Err(other) => panic!("unexpected error on a running CPU: {other}"),
    }
});
