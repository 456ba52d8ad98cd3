//! # Opcode Table
//!
//! The 256-entry opcode table is the single source of truth for decoding: it
//! maps every opcode byte to its operation, addressing mode, base cycle cost
//! and length.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Tagged [`Mnemonic::Illegal`]; fetching one
//!   halts the engine
//!
//! Instruction length is derived from the addressing mode, so the table can
//! never disagree with the number of operand bytes the resolver consumes.

use std::fmt;

use crate::addressing::AddressingMode;

/// Operation tag for an opcode.
///
/// One variant per documented 6502 mnemonic, plus `Illegal` for the opcode
/// bytes that have no documented instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Force interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry flag
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow flag
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X register
    Cpx,
    /// Compare Y register
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X register
    Dex,
    /// Decrement Y register
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X register
    Inx,
    /// Increment Y register
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X register
    Ldx,
    /// Load Y register
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry flag
    Sec,
    /// Set decimal flag
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X register
    Stx,
    /// Store Y register
    Sty,
    /// Transfer accumulator to X
    Tax,
    /// Transfer accumulator to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to accumulator
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to accumulator
    Tya,
    /// Undocumented opcode, not executed
    Illegal,
}

impl Mnemonic {
    /// Three-letter assembler name, `"???"` for illegal opcodes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Illegal => "???",
        }
    }

    /// Whether this operation pays the extra cycle when its indexed address
    /// crosses a page.
    ///
    /// Only pure reads do; stores and read-modify-write instructions always
    /// take the fixed, longer cycle count listed in the table.
    pub const fn has_page_cross_penalty(self) -> bool {
        matches!(
            self,
            Mnemonic::Adc
                | Mnemonic::And
                | Mnemonic::Cmp
                | Mnemonic::Eor
                | Mnemonic::Lda
                | Mnemonic::Ldx
                | Mnemonic::Ldy
                | Mnemonic::Ora
                | Mnemonic::Sbc
        )
    }

    /// Whether the operation sets PC itself instead of falling through to the
    /// next instruction.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
                | Mnemonic::Brk
                | Mnemonic::Jmp
                | Mnemonic::Jsr
                | Mnemonic::Rti
                | Mnemonic::Rts
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed by this opcode.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Illegal opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// Returns true unless this entry is an illegal opcode.
    pub const fn is_implemented(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Illegal)
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

const ILLEGAL: OpcodeMetadata = op(Mnemonic::Illegal, AddressingMode::Implicit, 0);

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use core6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// // Undocumented opcodes are explicitly tagged
/// let illegal = OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, Mnemonic::Illegal);
/// assert!(!illegal.is_implemented());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op(Mnemonic::Brk, AddressingMode::Implicit, 7), // 0x00
    op(Mnemonic::Ora, AddressingMode::IndirectX, 6), // 0x01
    ILLEGAL, // 0x02
    ILLEGAL, // 0x03
    ILLEGAL, // 0x04
    op(Mnemonic::Ora, AddressingMode::ZeroPage, 3), // 0x05
    op(Mnemonic::Asl, AddressingMode::ZeroPage, 5), // 0x06
    ILLEGAL, // 0x07
    op(Mnemonic::Php, AddressingMode::Implicit, 3), // 0x08
    op(Mnemonic::Ora, AddressingMode::Immediate, 2), // 0x09
    op(Mnemonic::Asl, AddressingMode::Accumulator, 2), // 0x0A
    ILLEGAL, // 0x0B
    ILLEGAL, // 0x0C
    op(Mnemonic::Ora, AddressingMode::Absolute, 4), // 0x0D
    op(Mnemonic::Asl, AddressingMode::Absolute, 6), // 0x0E
    ILLEGAL, // 0x0F
    op(Mnemonic::Bpl, AddressingMode::Relative, 2), // 0x10
    op(Mnemonic::Ora, AddressingMode::IndirectY, 5), // 0x11
    ILLEGAL, // 0x12
    ILLEGAL, // 0x13
    ILLEGAL, // 0x14
    op(Mnemonic::Ora, AddressingMode::ZeroPageX, 4), // 0x15
    op(Mnemonic::Asl, AddressingMode::ZeroPageX, 6), // 0x16
    ILLEGAL, // 0x17
    op(Mnemonic::Clc, AddressingMode::Implicit, 2), // 0x18
    op(Mnemonic::Ora, AddressingMode::AbsoluteY, 4), // 0x19
    ILLEGAL, // 0x1A
    ILLEGAL, // 0x1B
    ILLEGAL, // 0x1C
    op(Mnemonic::Ora, AddressingMode::AbsoluteX, 4), // 0x1D
    op(Mnemonic::Asl, AddressingMode::AbsoluteX, 7), // 0x1E
    ILLEGAL, // 0x1F
    op(Mnemonic::Jsr, AddressingMode::Absolute, 6), // 0x20
    op(Mnemonic::And, AddressingMode::IndirectX, 6), // 0x21
    ILLEGAL, // 0x22
    ILLEGAL, // 0x23
    op(Mnemonic::Bit, AddressingMode::ZeroPage, 3), // 0x24
    op(Mnemonic::And, AddressingMode::ZeroPage, 3), // 0x25
    op(Mnemonic::Rol, AddressingMode::ZeroPage, 5), // 0x26
    ILLEGAL, // 0x27
    op(Mnemonic::Plp, AddressingMode::Implicit, 4), // 0x28
    op(Mnemonic::And, AddressingMode::Immediate, 2), // 0x29
    op(Mnemonic::Rol, AddressingMode::Accumulator, 2), // 0x2A
    ILLEGAL, // 0x2B
    op(Mnemonic::Bit, AddressingMode::Absolute, 4), // 0x2C
    op(Mnemonic::And, AddressingMode::Absolute, 4), // 0x2D
    op(Mnemonic::Rol, AddressingMode::Absolute, 6), // 0x2E
    ILLEGAL, // 0x2F
    op(Mnemonic::Bmi, AddressingMode::Relative, 2), // 0x30
    op(Mnemonic::And, AddressingMode::IndirectY, 5), // 0x31
    ILLEGAL, // 0x32
    ILLEGAL, // 0x33
    ILLEGAL, // 0x34
    op(Mnemonic::And, AddressingMode::ZeroPageX, 4), // 0x35
    op(Mnemonic::Rol, AddressingMode::ZeroPageX, 6), // 0x36
    ILLEGAL, // 0x37
    op(Mnemonic::Sec, AddressingMode::Implicit, 2), // 0x38
    op(Mnemonic::And, AddressingMode::AbsoluteY, 4), // 0x39
    ILLEGAL, // 0x3A
    ILLEGAL, // 0x3B
    ILLEGAL, // 0x3C
    op(Mnemonic::And, AddressingMode::AbsoluteX, 4), // 0x3D
    op(Mnemonic::Rol, AddressingMode::AbsoluteX, 7), // 0x3E
    ILLEGAL, // 0x3F
    op(Mnemonic::Rti, AddressingMode::Implicit, 6), // 0x40
    op(Mnemonic::Eor, AddressingMode::IndirectX, 6), // 0x41
    ILLEGAL, // 0x42
    ILLEGAL, // 0x43
    ILLEGAL, // 0x44
    op(Mnemonic::Eor, AddressingMode::ZeroPage, 3), // 0x45
    op(Mnemonic::Lsr, AddressingMode::ZeroPage, 5), // 0x46
    ILLEGAL, // 0x47
    op(Mnemonic::Pha, AddressingMode::Implicit, 3), // 0x48
    op(Mnemonic::Eor, AddressingMode::Immediate, 2), // 0x49
    op(Mnemonic::Lsr, AddressingMode::Accumulator, 2), // 0x4A
    ILLEGAL, // 0x4B
    op(Mnemonic::Jmp, AddressingMode::Absolute, 3), // 0x4C
    op(Mnemonic::Eor, AddressingMode::Absolute, 4), // 0x4D
    op(Mnemonic::Lsr, AddressingMode::Absolute, 6), // 0x4E
    ILLEGAL, // 0x4F
    op(Mnemonic::Bvc, AddressingMode::Relative, 2), // 0x50
    op(Mnemonic::Eor, AddressingMode::IndirectY, 5), // 0x51
    ILLEGAL, // 0x52
    ILLEGAL, // 0x53
    ILLEGAL, // 0x54
    op(Mnemonic::Eor, AddressingMode::ZeroPageX, 4), // 0x55
    op(Mnemonic::Lsr, AddressingMode::ZeroPageX, 6), // 0x56
    ILLEGAL, // 0x57
    op(Mnemonic::Cli, AddressingMode::Implicit, 2), // 0x58
    op(Mnemonic::Eor, AddressingMode::AbsoluteY, 4), // 0x59
    ILLEGAL, // 0x5A
    ILLEGAL, // 0x5B
    ILLEGAL, // 0x5C
    op(Mnemonic::Eor, AddressingMode::AbsoluteX, 4), // 0x5D
    op(Mnemonic::Lsr, AddressingMode::AbsoluteX, 7), // 0x5E
    ILLEGAL, // 0x5F
    op(Mnemonic::Rts, AddressingMode::Implicit, 6), // 0x60
    op(Mnemonic::Adc, AddressingMode::IndirectX, 6), // 0x61
    ILLEGAL, // 0x62
    ILLEGAL, // 0x63
    ILLEGAL, // 0x64
    op(Mnemonic::Adc, AddressingMode::ZeroPage, 3), // 0x65
    op(Mnemonic::Ror, AddressingMode::ZeroPage, 5), // 0x66
    ILLEGAL, // 0x67
    op(Mnemonic::Pla, AddressingMode::Implicit, 4), // 0x68
    op(Mnemonic::Adc, AddressingMode::Immediate, 2), // 0x69
    op(Mnemonic::Ror, AddressingMode::Accumulator, 2), // 0x6A
    ILLEGAL, // 0x6B
    op(Mnemonic::Jmp, AddressingMode::Indirect, 5), // 0x6C
    op(Mnemonic::Adc, AddressingMode::Absolute, 4), // 0x6D
    op(Mnemonic::Ror, AddressingMode::Absolute, 6), // 0x6E
    ILLEGAL, // 0x6F
    op(Mnemonic::Bvs, AddressingMode::Relative, 2), // 0x70
    op(Mnemonic::Adc, AddressingMode::IndirectY, 5), // 0x71
    ILLEGAL, // 0x72
    ILLEGAL, // 0x73
    ILLEGAL, // 0x74
    op(Mnemonic::Adc, AddressingMode::ZeroPageX, 4), // 0x75
    op(Mnemonic::Ror, AddressingMode::ZeroPageX, 6), // 0x76
    ILLEGAL, // 0x77
    op(Mnemonic::Sei, AddressingMode::Implicit, 2), // 0x78
    op(Mnemonic::Adc, AddressingMode::AbsoluteY, 4), // 0x79
    ILLEGAL, // 0x7A
    ILLEGAL, // 0x7B
    ILLEGAL, // 0x7C
    op(Mnemonic::Adc, AddressingMode::AbsoluteX, 4), // 0x7D
    op(Mnemonic::Ror, AddressingMode::AbsoluteX, 7), // 0x7E
    ILLEGAL, // 0x7F
    ILLEGAL, // 0x80
    op(Mnemonic::Sta, AddressingMode::IndirectX, 6), // 0x81
    ILLEGAL, // 0x82
    ILLEGAL, // 0x83
    op(Mnemonic::Sty, AddressingMode::ZeroPage, 3), // 0x84
    op(Mnemonic::Sta, AddressingMode::ZeroPage, 3), // 0x85
    op(Mnemonic::Stx, AddressingMode::ZeroPage, 3), // 0x86
    ILLEGAL, // 0x87
    op(Mnemonic::Dey, AddressingMode::Implicit, 2), // 0x88
    ILLEGAL, // 0x89
    op(Mnemonic::Txa, AddressingMode::Implicit, 2), // 0x8A
    ILLEGAL, // 0x8B
    op(Mnemonic::Sty, AddressingMode::Absolute, 4), // 0x8C
    op(Mnemonic::Sta, AddressingMode::Absolute, 4), // 0x8D
    op(Mnemonic::Stx, AddressingMode::Absolute, 4), // 0x8E
    ILLEGAL, // 0x8F
    op(Mnemonic::Bcc, AddressingMode::Relative, 2), // 0x90
    op(Mnemonic::Sta, AddressingMode::IndirectY, 6), // 0x91
    ILLEGAL, // 0x92
    ILLEGAL, // 0x93
    op(Mnemonic::Sty, AddressingMode::ZeroPageX, 4), // 0x94
    op(Mnemonic::Sta, AddressingMode::ZeroPageX, 4), // 0x95
    op(Mnemonic::Stx, AddressingMode::ZeroPageY, 4), // 0x96
    ILLEGAL, // 0x97
    op(Mnemonic::Tya, AddressingMode::Implicit, 2), // 0x98
    op(Mnemonic::Sta, AddressingMode::AbsoluteY, 5), // 0x99
    op(Mnemonic::Txs, AddressingMode::Implicit, 2), // 0x9A
    ILLEGAL, // 0x9B
    ILLEGAL, // 0x9C
    op(Mnemonic::Sta, AddressingMode::AbsoluteX, 5), // 0x9D
    ILLEGAL, // 0x9E
    ILLEGAL, // 0x9F
    op(Mnemonic::Ldy, AddressingMode::Immediate, 2), // 0xA0
    op(Mnemonic::Lda, AddressingMode::IndirectX, 6), // 0xA1
    op(Mnemonic::Ldx, AddressingMode::Immediate, 2), // 0xA2
    ILLEGAL, // 0xA3
    op(Mnemonic::Ldy, AddressingMode::ZeroPage, 3), // 0xA4
    op(Mnemonic::Lda, AddressingMode::ZeroPage, 3), // 0xA5
    op(Mnemonic::Ldx, AddressingMode::ZeroPage, 3), // 0xA6
    ILLEGAL, // 0xA7
    op(Mnemonic::Tay, AddressingMode::Implicit, 2), // 0xA8
    op(Mnemonic::Lda, AddressingMode::Immediate, 2), // 0xA9
    op(Mnemonic::Tax, AddressingMode::Implicit, 2), // 0xAA
    ILLEGAL, // 0xAB
    op(Mnemonic::Ldy, AddressingMode::Absolute, 4), // 0xAC
    op(Mnemonic::Lda, AddressingMode::Absolute, 4), // 0xAD
    op(Mnemonic::Ldx, AddressingMode::Absolute, 4), // 0xAE
    ILLEGAL, // 0xAF
    op(Mnemonic::Bcs, AddressingMode::Relative, 2), // 0xB0
    op(Mnemonic::Lda, AddressingMode::IndirectY, 5), // 0xB1
    ILLEGAL, // 0xB2
    ILLEGAL, // 0xB3
    op(Mnemonic::Ldy, AddressingMode::ZeroPageX, 4), // 0xB4
    op(Mnemonic::Lda, AddressingMode::ZeroPageX, 4), // 0xB5
    op(Mnemonic::Ldx, AddressingMode::ZeroPageY, 4), // 0xB6
    ILLEGAL, // 0xB7
    op(Mnemonic::Clv, AddressingMode::Implicit, 2), // 0xB8
    op(Mnemonic::Lda, AddressingMode::AbsoluteY, 4), // 0xB9
    op(Mnemonic::Tsx, AddressingMode::Implicit, 2), // 0xBA
    ILLEGAL, // 0xBB
    op(Mnemonic::Ldy, AddressingMode::AbsoluteX, 4), // 0xBC
    op(Mnemonic::Lda, AddressingMode::AbsoluteX, 4), // 0xBD
    op(Mnemonic::Ldx, AddressingMode::AbsoluteY, 4), // 0xBE
    ILLEGAL, // 0xBF
    op(Mnemonic::Cpy, AddressingMode::Immediate, 2), // 0xC0
    op(Mnemonic::Cmp, AddressingMode::IndirectX, 6), // 0xC1
    ILLEGAL, // 0xC2
    ILLEGAL, // 0xC3
    op(Mnemonic::Cpy, AddressingMode::ZeroPage, 3), // 0xC4
    op(Mnemonic::Cmp, AddressingMode::ZeroPage, 3), // 0xC5
    op(Mnemonic::Dec, AddressingMode::ZeroPage, 5), // 0xC6
    ILLEGAL, // 0xC7
    op(Mnemonic::Iny, AddressingMode::Implicit, 2), // 0xC8
    op(Mnemonic::Cmp, AddressingMode::Immediate, 2), // 0xC9
    op(Mnemonic::Dex, AddressingMode::Implicit, 2), // 0xCA
    ILLEGAL, // 0xCB
    op(Mnemonic::Cpy, AddressingMode::Absolute, 4), // 0xCC
    op(Mnemonic::Cmp, AddressingMode::Absolute, 4), // 0xCD
    op(Mnemonic::Dec, AddressingMode::Absolute, 6), // 0xCE
    ILLEGAL, // 0xCF
    op(Mnemonic::Bne, AddressingMode::Relative, 2), // 0xD0
    op(Mnemonic::Cmp, AddressingMode::IndirectY, 5), // 0xD1
    ILLEGAL, // 0xD2
    ILLEGAL, // 0xD3
    ILLEGAL, // 0xD4
    op(Mnemonic::Cmp, AddressingMode::ZeroPageX, 4), // 0xD5
    op(Mnemonic::Dec, AddressingMode::ZeroPageX, 6), // 0xD6
    ILLEGAL, // 0xD7
    op(Mnemonic::Cld, AddressingMode::Implicit, 2), // 0xD8
    op(Mnemonic::Cmp, AddressingMode::AbsoluteY, 4), // 0xD9
    ILLEGAL, // 0xDA
    ILLEGAL, // 0xDB
    ILLEGAL, // 0xDC
    op(Mnemonic::Cmp, AddressingMode::AbsoluteX, 4), // 0xDD
    op(Mnemonic::Dec, AddressingMode::AbsoluteX, 7), // 0xDE
    ILLEGAL, // 0xDF
    op(Mnemonic::Cpx, AddressingMode::Immediate, 2), // 0xE0
    op(Mnemonic::Sbc, AddressingMode::IndirectX, 6), // 0xE1
    ILLEGAL, // 0xE2
    ILLEGAL, // 0xE3
    op(Mnemonic::Cpx, AddressingMode::ZeroPage, 3), // 0xE4
    op(Mnemonic::Sbc, AddressingMode::ZeroPage, 3), // 0xE5
    op(Mnemonic::Inc, AddressingMode::ZeroPage, 5), // 0xE6
    ILLEGAL, // 0xE7
    op(Mnemonic::Inx, AddressingMode::Implicit, 2), // 0xE8
    op(Mnemonic::Sbc, AddressingMode::Immediate, 2), // 0xE9
    op(Mnemonic::Nop, AddressingMode::Implicit, 2), // 0xEA
    ILLEGAL, // 0xEB
    op(Mnemonic::Cpx, AddressingMode::Absolute, 4), // 0xEC
    op(Mnemonic::Sbc, AddressingMode::Absolute, 4), // 0xED
    op(Mnemonic::Inc, AddressingMode::Absolute, 6), // 0xEE
    ILLEGAL, // 0xEF
    op(Mnemonic::Beq, AddressingMode::Relative, 2), // 0xF0
    op(Mnemonic::Sbc, AddressingMode::IndirectY, 5), // 0xF1
    ILLEGAL, // 0xF2
    ILLEGAL, // 0xF3
    ILLEGAL, // 0xF4
    op(Mnemonic::Sbc, AddressingMode::ZeroPageX, 4), // 0xF5
    op(Mnemonic::Inc, AddressingMode::ZeroPageX, 6), // 0xF6
    ILLEGAL, // 0xF7
    op(Mnemonic::Sed, AddressingMode::Implicit, 2), // 0xF8
    op(Mnemonic::Sbc, AddressingMode::AbsoluteY, 4), // 0xF9
    ILLEGAL, // 0xFA
    ILLEGAL, // 0xFB
    ILLEGAL, // 0xFC
    op(Mnemonic::Sbc, AddressingMode::AbsoluteX, 4), // 0xFD
    op(Mnemonic::Inc, AddressingMode::AbsoluteX, 7), // 0xFE
    ILLEGAL, // 0xFF
];
