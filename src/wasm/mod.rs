//! WebAssembly bindings for the core6502 engine.
//!
//! This module provides a JavaScript-callable wrapper around one CPU over a
//! flat 64KB memory image, for running and inspecting programs in a browser.

pub mod api;

pub use api::{Emulator6502, JsError};
