//! Memory Access (MEM) Stage.
//!
//! This module implements the memory stage of the instruction cycle. It performs:
//! 1. **Loads:** Reads 1, 2 or 4 bytes at the ALU result, extended per the opcode.
//! 2. **Stores:** Writes the low bytes of the destination-indexed register.
//! 3. **Result Selection:** Presents either the loaded value or the ALU result to write-back.

use crate::common::Fault;
use crate::common::data::AccessType;
use crate::core::Cpu;
use crate::core::pipeline::latches::CycleContext;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ctx` - The cycle's stage latches
///
/// # Returns
///
/// A fatal fault for kernel violations or an access without a width. A user
/// violation raises an access abort and returns `Ok`.
pub fn mem_stage(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Fault> {
    let ctrl = ctx.decode.ctrl;
    let addr = ctx.execute.alu_result;
    ctx.memory.value_out = addr;

    if !(ctrl.mem_to_reg || ctrl.mem_write) {
        return Ok(());
    }

    let access = if ctrl.mem_write {
        AccessType::Write
    } else {
        AccessType::Read
    };
    let width = ctrl.mem_width.ok_or(Fault::Internal { addr, access })?;

    if ctrl.mem_write {
        let value = ctx.execute.store_value;
        if cpu.store(addr, width, value)? && cpu.trace {
            tracing::trace!("MEM store [{addr:#010x}] <- {value:#x} ({} bytes)", width.bytes());
        }
    } else if let Some(value) = cpu.load(addr, width, ctrl.zero_extend)? {
        ctx.memory.value_out = value;
        if cpu.trace {
            tracing::trace!("MEM load  [{addr:#010x}] -> {value:#x} ({} bytes)", width.bytes());
        }
    }
    Ok(())
}
