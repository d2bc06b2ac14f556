//! Execution units and functional components.
//!
//! This module contains the processor's functional units: the integer ALU and
//! the memory protection unit that fronts every guest memory access.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Memory protection unit and access engine.
pub mod mpu;
