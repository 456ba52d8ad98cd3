//! WASM API for the 6502 engine.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and memory access.

use crate::{ExecutionError, FlatMemory, LoadError, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

impl From<LoadError> for JsError {
    fn from(err: LoadError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator from a raw memory image loaded at address 0.
    ///
    /// The image should contain the reset vector at 0xFFFC/0xFFFD.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &[u8]) -> Result<Emulator6502, JsError> {
        let memory = FlatMemory::from_image(image)?;

        Ok(Emulator6502 {
            cpu: CPU::new(memory),
        })
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Run until the CPU halts or `max_instructions` have executed.
    ///
    /// Returns the halt reason, or `undefined` if the budget ran out first.
    pub fn run(&mut self, max_instructions: u32) -> Option<String> {
        self.cpu
            .run_until_halt(max_instructions as u64)
            .map(|reason| reason.to_string())
    }

    /// Reset the CPU to its power-on state, keeping memory
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Ask the CPU to stop before the next instruction
    pub fn request_halt(&mut self) {
        self.cpu.request_halt();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Run state

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn halt_reason(&self) -> Option<String> {
        self.cpu.halt_reason().map(|reason| reason.to_string())
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy of the full 64KB address space, in address order
    pub fn dump_memory(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.cpu.memory().as_bytes())
    }
}
