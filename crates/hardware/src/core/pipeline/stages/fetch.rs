//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction cycle.
//! It clears a previous cycle's EXCEPTION status, reads the word at IR through
//! the fetch validator and advances IR by one instruction.

use crate::common::Fault;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::arch::trap::CoreStatus;
use crate::core::pipeline::latches::CycleContext;

/// Executes the instruction fetch stage.
///
/// IR is advanced even when the fetch faults, so the saved IR of a user
/// fetch abort points past the faulting address.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ctx` - The cycle's stage latches
///
/// # Returns
///
/// The fatal fault for a kernel-mode fetch violation. A user-mode violation
/// raises an access abort and returns `Ok`.
pub fn fetch_stage(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Fault> {
    if cpu.status == CoreStatus::Exception {
        cpu.status = CoreStatus::Running;
    }

    let pc = cpu.ir;
    ctx.fetch.ir = pc;
    cpu.ir = pc.wrapping_add(INSTRUCTION_SIZE);

    if let Some(word) = cpu.fetch_word(pc)? {
        ctx.fetch.word = word;
        if cpu.trace {
            tracing::trace!("IF  ir={pc:#010x} word={word:#010x}");
        }
    } else if cpu.trace {
        tracing::trace!("IF  ir={pc:#010x} # ABORT");
    }
    Ok(())
}
