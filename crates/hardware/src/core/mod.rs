//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! cycle, execution units and architectural state.

/// Architectural state (CSTR, register file, privilege levels, exceptions, process state).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction cycle implementation (stages, latches, signals).
pub mod pipeline;

/// Execution units (ALU, memory protection unit).
pub mod units;

pub use self::cpu::{CoreSnapshot, Cpu};
