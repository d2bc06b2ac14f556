//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction cycle. It performs:
//! 1. **Opcode Resolution:** Decodes the fetched word; an unassigned opcode aborts (user) or faults (kernel).
//! 2. **Privilege Check:** Rejects system sub-opcodes other than `SYSCALL` in user mode,
//!    before the register file is touched.
//! 3. **Control Generation:** Derives the control signals and evaluates a branch condition.
//! 4. **Operand Fetch:** Reads the three register ports, committing any pending `MVCSTR` first.

use crate::common::Fault;
use crate::core::Cpu;
use crate::core::arch::mode::PrivilegeLevel;
use crate::core::arch::trap::{CoreStatus, Exception};
use crate::core::pipeline::latches::CycleContext;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::InstrType;
use crate::isa::opcodes::Opcode;
use crate::isa::{cond, decode, system};

/// Executes the instruction decode stage.
///
/// Skipped entirely while the core is in EXCEPTION. The first exception raised
/// here ends the stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ctx` - The cycle's stage latches
///
/// # Returns
///
/// `Fault::KernelInvalidInstruction` when kernel code executes an unassigned opcode.
pub fn decode_stage(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Fault> {
    if cpu.status == CoreStatus::Exception {
        return Ok(());
    }

    let inst = decode::decode(ctx.fetch.word);
    let level = cpu.privilege();
    ctx.decode.inst = inst;

    if inst.opcode == Opcode::Error {
        if level == PrivilegeLevel::Kernel {
            return Err(Fault::KernelInvalidInstruction {
                word: inst.raw,
                ir: ctx.fetch.ir,
            });
        }
        tracing::debug!("invalid instruction {:#010x} at {:#010x}", inst.raw, ctx.fetch.ir);
        cpu.raise(Exception::InstructionAbort);
        return Ok(());
    }

    if system::is_privileged(inst.opcode) && level == PrivilegeLevel::User {
        tracing::debug!("privileged {} at {:#010x}", inst.opcode, ctx.fetch.ir);
        cpu.raise(Exception::PrivilegeAbort);
        return Ok(());
    }

    let arithmetic = matches!(inst.itype, InstrType::I | InstrType::R);
    ctx.decode.ctrl = ControlSignals::for_opcode(inst.opcode, arithmetic);
    if inst.opcode == Opcode::B {
        ctx.decode.cond = cond::evaluate(inst.cond, cpu.regs.cstr);
    }
    ctx.decode.ports = cpu.regs.read_ports(inst.rs, inst.rr, inst.rd);

    if cpu.trace {
        tracing::trace!(
            "ID  ir={:#010x} {} type={:?} rd={} rs={} rr={} imm={:#x}",
            ctx.fetch.ir,
            inst.opcode,
            inst.itype,
            inst.rd,
            inst.rs,
            inst.rr,
            inst.imm
        );
    }
    Ok(())
}
