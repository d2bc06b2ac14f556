//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the AruXI encoding tables and the decode logic that turns a raw
//! 32-bit word into a classified instruction.
//!
//! # Tables
//!
//! * `opcodes`: The 256-entry top-byte opcode table.
//! * `system`: The sub-opcode table for the `SYS` group.
//! * `cond`: The twelve branch conditions over the CSTR flags.

/// Application Binary Interface (ABI) register names and indices.
pub mod abi;

/// Branch condition table.
pub mod cond;

/// Instruction classification, immediate extraction and register field selection.
pub mod decode;

/// Instruction field accessors and the decoded-instruction record.
pub mod instruction;

/// Primary opcode enumeration and table.
pub mod opcodes;

/// System (`SYS`) sub-opcode table.
pub mod system;

pub use instruction::{Decoded, InstrType};
pub use opcodes::Opcode;
