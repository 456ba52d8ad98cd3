//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns the operand bytes following an opcode into something an
//! instruction can act on.
//!
//! ## PC Advancement
//!
//! The engine advances PC past the opcode byte before resolution. The resolver
//! then advances PC past exactly the operand bytes it reads, and no others, so
//! after resolution PC points at the next instruction.

use crate::{CpuConfig, MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next
    /// instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Resolves the operand for this mode.
    ///
    /// `regs.pc` must point at the first operand byte. On return it has been
    /// advanced by exactly [`operand_bytes`](Self::operand_bytes).
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{AddressingMode, CpuConfig, FlatMemory, MemoryBus, Operand, Registers};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x8001, 0xFF); // LDA $FF,X operand
    ///
    /// let mut regs = Registers::power_on(0x8001);
    /// regs.x = 0x02;
    ///
    /// let resolved = AddressingMode::ZeroPageX.resolve(&mut regs, &mem, &CpuConfig::nmos());
    /// assert_eq!(resolved.operand, Operand::Address(0x0001));
    /// assert_eq!(resolved.bytes, 1);
    /// assert_eq!(regs.pc, 0x8002);
    /// ```
    pub fn resolve<M: MemoryBus>(
        self,
        regs: &mut Registers,
        memory: &M,
        config: &CpuConfig,
    ) -> Resolved {
        let mut page_crossed = false;

        let operand = match self {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(fetch_byte(regs, memory)),
            AddressingMode::ZeroPage => Operand::Address(fetch_byte(regs, memory) as u16),
            AddressingMode::ZeroPageX => {
                let zp = fetch_byte(regs, memory).wrapping_add(regs.x);
                Operand::Address(zp as u16)
            }
            AddressingMode::ZeroPageY => {
                let zp = fetch_byte(regs, memory).wrapping_add(regs.y);
                Operand::Address(zp as u16)
            }
            AddressingMode::Relative => {
                let offset = fetch_byte(regs, memory) as i8;
                // PC now points at the next instruction, the branch origin
                let target = regs.pc.wrapping_add_signed(offset as i16);
                page_crossed = crosses_page(regs.pc, target);
                Operand::Address(target)
            }
            AddressingMode::Absolute => Operand::Address(fetch_word(regs, memory)),
            AddressingMode::AbsoluteX => {
                let base = fetch_word(regs, memory);
                let addr = base.wrapping_add(regs.x as u16);
                page_crossed = crosses_page(base, addr);
                Operand::Address(addr)
            }
            AddressingMode::AbsoluteY => {
                let base = fetch_word(regs, memory);
                let addr = base.wrapping_add(regs.y as u16);
                page_crossed = crosses_page(base, addr);
                Operand::Address(addr)
            }
            AddressingMode::Indirect => {
                let pointer = fetch_word(regs, memory);
                Operand::Address(read_indirect_target(
                    memory,
                    pointer,
                    config.indirect_jmp_page_wrap,
                ))
            }
            AddressingMode::IndirectX => {
                let zp = fetch_byte(regs, memory).wrapping_add(regs.x);
                Operand::Address(memory.read_word_zero_page(zp))
            }
            AddressingMode::IndirectY => {
                let zp = fetch_byte(regs, memory);
                let base = memory.read_word_zero_page(zp);
                let addr = base.wrapping_add(regs.y as u16);
                page_crossed = crosses_page(base, addr);
                Operand::Address(addr)
            }
        };

        Resolved {
            operand,
            bytes: self.operand_bytes(),
            page_crossed,
        }
    }
}

/// What an instruction operates on after address resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implicit mode).
    Implied,

    /// The accumulator register.
    Accumulator,

    /// A constant taken from the instruction stream.
    Immediate(u8),

    /// An effective memory address.
    Address(u16),
}

/// Result of resolving an addressing mode for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// The operand the instruction acts on
    pub operand: Operand,

    /// Operand bytes consumed from the instruction stream
    pub bytes: u8,

    /// Whether indexing (or a branch) moved the address onto another page
    pub page_crossed: bool,
}

fn fetch_byte<M: MemoryBus>(regs: &mut Registers, memory: &M) -> u8 {
    let value = memory.read(regs.pc);
    regs.pc = regs.pc.wrapping_add(1);
    value
}

fn fetch_word<M: MemoryBus>(regs: &mut Registers, memory: &M) -> u16 {
    let value = memory.read_word(regs.pc);
    regs.pc = regs.pc.wrapping_add(2);
    value
}

fn crosses_page(from: u16, to: u16) -> bool {
    (from & 0xFF00) != (to & 0xFF00)
}

/// Reads the JMP target stored at `pointer`.
///
/// With `page_wrap` the high byte comes from the start of the pointer's own
/// page when the pointer sits at `$xxFF`, as on the NMOS part.
fn read_indirect_target<M: MemoryBus>(memory: &M, pointer: u16, page_wrap: bool) -> u16 {
    if !page_wrap {
        return memory.read_word(pointer);
    }

    let lo = memory.read(pointer) as u16;
    let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
    let hi = memory.read(hi_addr) as u16;
    (hi << 8) | lo
}
