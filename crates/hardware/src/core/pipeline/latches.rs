//! Per-cycle stage latches.
//!
//! This module defines the state carried between the four stages of one
//! instruction cycle: Fetch → Decode → Execute → Memory (with write-back).
//!
//! 1. **Instruction Flow:** One latch per stage, owned by a [`CycleContext`].
//! 2. **Lifetime:** A fresh context is built for every cycle and dropped at its end;
//!    the only state that outlives a cycle is the latched `MVCSTR` value in the register file.

use crate::common::reg::ReadPorts;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Decoded;

/// Fetch-stage output.
#[derive(Clone, Copy, Default, Debug)]
pub struct FetchLatch {
    /// Address the word was fetched from.
    pub ir: u32,
    /// Raw instruction word (0 if the fetch faulted).
    pub word: u32,
}

/// Decode-stage output.
#[derive(Clone, Copy, Default, Debug)]
pub struct DecodeLatch {
    /// Decoded instruction.
    pub inst: Decoded,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// Register operands.
    pub ports: ReadPorts,
    /// Outcome of the branch condition for `B`.
    pub cond: bool,
}

/// Execute-stage output.
#[derive(Clone, Copy, Default, Debug)]
pub struct ExecuteLatch {
    /// ALU operand A.
    pub alu_a: u32,
    /// ALU operand B.
    pub alu_b: u32,
    /// ALU result (also the memory address).
    pub alu_result: u32,
    /// Data for a store.
    pub store_value: u32,
}

/// Memory-stage output.
#[derive(Clone, Copy, Default, Debug)]
pub struct MemoryLatch {
    /// Value presented to write-back.
    pub value_out: u32,
}

/// All per-cycle state, threaded by reference through the stages.
#[derive(Clone, Copy, Default, Debug)]
pub struct CycleContext {
    /// IF output.
    pub fetch: FetchLatch,
    /// ID output.
    pub decode: DecodeLatch,
    /// EX output.
    pub execute: ExecuteLatch,
    /// MEM output.
    pub memory: MemoryLatch,
}

impl CycleContext {
    /// Creates an empty context for a new cycle.
    pub fn new() -> Self {
        Self::default()
    }
}
