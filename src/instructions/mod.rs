//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU and the operand the
//! addressing mode resolved to. PC has already been advanced past the whole
//! instruction when these run; only control flow instructions touch it.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Mnemonic, Resolved, CPU};

/// Runs the operation for `mnemonic` on an already resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, resolved: Resolved) {
    let operand = resolved.operand;

    match mnemonic {
        // Load/store
        Mnemonic::Lda => load_store::execute_lda(cpu, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, operand),
        Mnemonic::Sta => load_store::execute_sta(cpu, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, operand),
        Mnemonic::Sty => load_store::execute_sty(cpu, operand),

        // ALU
        Mnemonic::Adc => alu::execute_adc(cpu, operand),
        Mnemonic::Sbc => alu::execute_sbc(cpu, operand),
        Mnemonic::And => alu::execute_and(cpu, operand),
        Mnemonic::Ora => alu::execute_ora(cpu, operand),
        Mnemonic::Eor => alu::execute_eor(cpu, operand),
        Mnemonic::Bit => alu::execute_bit(cpu, operand),
        Mnemonic::Cmp => alu::execute_cmp(cpu, operand),
        Mnemonic::Cpx => alu::execute_cpx(cpu, operand),
        Mnemonic::Cpy => alu::execute_cpy(cpu, operand),

        // Shifts
        Mnemonic::Asl => shifts::execute_asl(cpu, operand),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, operand),
        Mnemonic::Rol => shifts::execute_rol(cpu, operand),
        Mnemonic::Ror => shifts::execute_ror(cpu, operand),

        // Increment/decrement
        Mnemonic::Inc => inc_dec::execute_inc(cpu, operand),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, operand),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),

        // Branches
        Mnemonic::Bcc => branches::execute_branch(cpu, resolved, !cpu.regs.flags.c),
        Mnemonic::Bcs => branches::execute_branch(cpu, resolved, cpu.regs.flags.c),
        Mnemonic::Bne => branches::execute_branch(cpu, resolved, !cpu.regs.flags.z),
        Mnemonic::Beq => branches::execute_branch(cpu, resolved, cpu.regs.flags.z),
        Mnemonic::Bpl => branches::execute_branch(cpu, resolved, !cpu.regs.flags.n),
        Mnemonic::Bmi => branches::execute_branch(cpu, resolved, cpu.regs.flags.n),
        Mnemonic::Bvc => branches::execute_branch(cpu, resolved, !cpu.regs.flags.v),
        Mnemonic::Bvs => branches::execute_branch(cpu, resolved, cpu.regs.flags.v),

        // Control flow
        Mnemonic::Jmp => control::execute_jmp(cpu, operand),
        Mnemonic::Jsr => control::execute_jsr(cpu, operand),
        Mnemonic::Rts => control::execute_rts(cpu),
        Mnemonic::Brk => control::execute_brk(cpu),
        Mnemonic::Rti => control::execute_rti(cpu),
        Mnemonic::Nop => {}

        // Stack
        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),

        // Flags
        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),

        // Transfers
        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),

        // The engine halts before dispatching these
        Mnemonic::Illegal => {}
    }
}
