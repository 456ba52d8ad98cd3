//! # CPU State and Execution
//!
//! This module contains the CPU struct that owns the register file and memory,
//! and drives the fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! Each call to `step()` runs one complete instruction:
//! 1. Fetch the opcode byte at PC
//! 2. Decode it through `OPCODE_TABLE`
//! 3. Advance PC past the opcode byte
//! 4. Resolve the addressing mode (which advances PC past the operand bytes)
//! 5. Execute the operation and update flags
//!
//! There is no suspension point inside an instruction. An illegal opcode is
//! detected at step 2, before anything is modified, and halts the CPU.
//!
//! ## Run State
//!
//! The CPU is either `Running` or `Halted`. Halting is terminal: once halted,
//! `step()` keeps returning [`ExecutionError::Halted`] until `reset()`.

use log::{debug, trace, warn};

use crate::addressing::Operand;
use crate::instructions;
use crate::registers::STACK_PAGE;
use crate::{CpuConfig, ExecutionError, HaltReason, MemoryBus, Registers, OPCODE_TABLE};

/// Address of the reset vector (little-endian word).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (little-endian word).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Execution state of the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Instructions are being executed.
    Running,

    /// Execution stopped; only `reset()` resumes it.
    Halted(HaltReason),
}

/// 6502 CPU state and execution context.
///
/// The CPU exclusively owns its registers and its memory. Independent machines
/// are independent `CPU` values; nothing is shared between instances.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Behavior switches
    pub(crate) config: CpuConfig,

    /// Running or halted
    pub(crate) state: RunState,

    /// Set by `request_halt()`, observed before the next fetch
    pub(crate) halt_requested: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and NMOS behavior.
    ///
    /// The CPU is initialized to the 6502 power-on reset state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD
    /// - Stack pointer (SP) is set to 0xFD
    /// - Interrupt Disable flag is set, all other flags clear
    /// - A, X and Y are zeroed
    ///
    /// The caller must have populated the reset vector beforehand.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit configuration.
    ///
    /// ```
    /// use core6502::{CPU, CpuConfig, FlatMemory};
    ///
    /// let cpu = CPU::with_config(FlatMemory::new(), CpuConfig::ricoh_2a03());
    /// assert_eq!(cpu.config(), &CpuConfig::ricoh_2a03());
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let pc = memory.read_word(RESET_VECTOR);
        debug!("CPU reset, vector 0x{:04X}", pc);

        Self {
            regs: Registers::power_on(pc),
            cycles: 0,
            config,
            state: RunState::Running,
            halt_requested: false,
            memory,
        }
    }

    /// Returns the CPU to its power-on state, keeping memory.
    ///
    /// PC is re-read from the reset vector and any halt is cleared.
    pub fn reset(&mut self) {
        let pc = self.memory.read_word(RESET_VECTOR);
        debug!("CPU reset, vector 0x{:04X}", pc);

        self.regs = Registers::power_on(pc);
        self.cycles = 0;
        self.state = RunState::Running;
        self.halt_requested = false;
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::IllegalOpcode`] if the fetched byte is not a
    ///   documented opcode. The CPU halts; registers (PC included), memory and
    ///   the cycle counter are left exactly as they were before the fetch.
    /// - [`ExecutionError::Halted`] if the CPU was already halted, or a halt
    ///   had been requested. Nothing is executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // illegal
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(()));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert!(cpu.is_halted());
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if let RunState::Halted(reason) = self.state {
            return Err(ExecutionError::Halted(reason));
        }

        if self.halt_requested {
            debug!("halt requested at 0x{:04X}", self.regs.pc);
            self.halt_requested = false;
            self.state = RunState::Halted(HaltReason::Requested);
            return Err(ExecutionError::Halted(HaltReason::Requested));
        }

        let address = self.regs.pc;
        let opcode = self.memory.read(address);
        let metadata = OPCODE_TABLE[opcode as usize];

        if !metadata.is_implemented() {
            warn!("illegal opcode 0x{:02X} at 0x{:04X}, halting", opcode, address);
            self.state = RunState::Halted(HaltReason::IllegalOpcode { opcode, address });
            return Err(ExecutionError::IllegalOpcode { opcode, address });
        }

        trace!(
            "{:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            address,
            opcode,
            metadata.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.status(),
            self.regs.sp,
            self.cycles
        );

        self.regs.pc = address.wrapping_add(1);
        let resolved =
            metadata
                .addressing_mode
                .resolve(&mut self.regs, &self.memory, &self.config);

        let mut cycles = metadata.base_cycles as u64;
        if resolved.page_crossed
            && self.config.page_cross_penalty
            && metadata.mnemonic.has_page_cross_penalty()
        {
            cycles += 1;
        }
        self.cycles += cycles;

        instructions::execute(self, metadata.mnemonic, resolved);

        Ok(())
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error
    /// occurs. Returns the number of cycles consumed, which may slightly exceed
    /// the budget due to instruction granularity.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Steps until the CPU halts or `max_instructions` have executed.
    ///
    /// Returns the halt reason, or `None` if the instruction budget ran out
    /// while the CPU was still running.
    pub fn run_until_halt(&mut self, max_instructions: u64) -> Option<HaltReason> {
        for _ in 0..max_instructions {
            if self.step().is_err() {
                return self.halt_reason();
            }
        }

        None
    }

    /// Asks the CPU to stop before the next instruction.
    ///
    /// The request never interrupts an instruction in progress; the next
    /// `step()` halts with [`HaltReason::Requested`] instead of fetching.
    pub fn request_halt(&mut self) {
        self.halt_requested = true;
    }

    /// Returns the current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns true once the CPU has halted.
    pub fn is_halted(&self) -> bool {
        matches!(self.state, RunState::Halted(_))
    }

    /// Returns why the CPU halted, if it has.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self.state {
            RunState::Halted(reason) => Some(reason),
            RunState::Running => None,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Useful for loading programs and setting up tests.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters ==========

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV1BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.status()
    }

    /// Returns the total number of CPU cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flags.n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flags.v
    }

    /// Returns true if the Break flag is set.
    ///
    /// B is latched from the status byte pulled by PLP or RTI.
    pub fn flag_b(&self) -> bool {
        self.regs.flags.b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flags.d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flags.i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flags.z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flags.c
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets all seven flags from a packed status byte.
    pub fn set_status(&mut self, value: u8) {
        self.regs.flags = crate::StatusFlags::from_byte(value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.flags.n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.flags.v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.flags.b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.flags.d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.flags.i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.flags.z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.flags.c = value;
    }

    // ========== Instruction Helpers ==========

    /// Reads the value an instruction operates on.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Accumulator | Operand::Implied => self.regs.a,
        }
    }

    /// Writes a read-modify-write result back to where it came from.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Accumulator | Operand::Implied => self.regs.a = value,
            // Constants in the instruction stream are never written
            Operand::Immediate(_) => {}
        }
    }

    /// Writes `value` at the top of the stack, then decrements SP.
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(self.regs.stack_address(), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte it points at.
    pub(crate) fn pull_byte(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.regs.sp as u16)
    }

    /// Pushes a word high byte first, so it sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pulls a word pushed by `push_word`.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull_byte() as u16;
        let hi = self.pull_byte() as u16;
        (hi << 8) | lo
    }
}
