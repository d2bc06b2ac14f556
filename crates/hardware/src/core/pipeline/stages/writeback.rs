//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction cycle. The memory
//! stage's result is routed through the register file, which applies the `x30`
//! drop, the special destinations of `LDIR`/`LDCSTR`/`RESR` and the deferred
//! `MVCSTR` latch. Instructions that write nothing still touch the register file
//! so a pending `MVCSTR` commits on schedule.

use crate::core::Cpu;
use crate::core::pipeline::latches::CycleContext;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ctx` - The cycle's stage latches
pub fn wb_stage(cpu: &mut Cpu, ctx: &CycleContext) {
    let inst = ctx.decode.inst;
    if ctx.decode.ctrl.reg_write {
        cpu.regs
            .write_back(inst.opcode, inst.rd, ctx.memory.value_out, cpu.ir);
        if cpu.trace {
            tracing::trace!(
                "WB  {} x{} <- {:#x}",
                inst.opcode,
                inst.rd,
                ctx.memory.value_out
            );
        }
    } else {
        cpu.regs.sync();
    }
}
