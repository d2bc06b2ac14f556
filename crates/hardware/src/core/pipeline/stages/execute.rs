//! Instruction Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction cycle. It performs:
//! 1. **Syscalls:** Raises the syscall exception numbered by `x0`.
//! 2. **Operand Selection:** Chooses the immediate or the secondary register as ALU operand B.
//! 3. **Control Flow:** Resolves the next IR for branches, calls, returns and `ERET`.
//! 4. **ALU:** Computes the result and, for `ADDS`/`SUBS`/`CMP`, the condition flags.
//! 5. **System Effects:** `HLT`, `SI` and `DI` act on the core state directly.

use crate::common::Fault;
use crate::common::constants::{INSTRUCTION_SIZE, LINK_REGISTER, SYSCALL_REGISTER};
use crate::core::Cpu;
use crate::core::arch::trap::{CoreStatus, Exception};
use crate::core::pipeline::latches::CycleContext;
use crate::core::units::alu::Alu;
use crate::isa::instruction::InstrType;
use crate::isa::opcodes::Opcode;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ctx` - The cycle's stage latches
///
/// # Returns
///
/// `Fault::NoActiveProcess` for an `ERET` with no recorded process.
pub fn execute_stage(cpu: &mut Cpu, ctx: &mut CycleContext) -> Result<(), Fault> {
    if cpu.status == CoreStatus::Exception {
        return Ok(());
    }

    let inst = ctx.decode.inst;
    let ctrl = ctx.decode.ctrl;
    let ports = ctx.decode.ports;

    if inst.opcode == Opcode::Syscall {
        let number = cpu.regs.read(SYSCALL_REGISTER) as u16;
        cpu.raise(Exception::Syscall(number));
        return Ok(());
    }

    let mut alu_a = ports.vala;
    let mut alu_b = match inst.itype {
        InstrType::I => inst.imm as u32,
        InstrType::M if inst.imm != 0 => inst.imm as u32,
        _ => ports.valb,
    };

    let pc = ctx.fetch.ir;
    let offset = (inst.imm as u32).wrapping_mul(INSTRUCTION_SIZE);
    match inst.opcode {
        Opcode::Ub => cpu.ir = pc.wrapping_add(offset),
        Opcode::Call => {
            ctx.decode.inst.rd = LINK_REGISTER;
            alu_a = pc;
            alu_b = INSTRUCTION_SIZE;
            cpu.ir = pc.wrapping_add(offset);
        }
        Opcode::Ubr | Opcode::Ret => cpu.ir = ports.vala,
        Opcode::B if ctx.decode.cond => cpu.ir = pc.wrapping_add(offset),
        Opcode::Eret => cpu.ir = cpu.exception_return_target()?,
        _ => {}
    }

    let (mut result, flags) = Alu::execute_with_flags(ctrl.alu_op, alu_a, alu_b);
    if ctrl.set_cc {
        cpu.regs.cstr = cpu.regs.cstr.with_flags(flags.c, flags.o, flags.n, flags.z);
    }
    if inst.opcode == Opcode::Mvcstr {
        result = ports.vala;
    }

    match inst.opcode {
        Opcode::Hlt => {
            if cpu.regs.cstr.io_halt() {
                cpu.status = CoreStatus::IoWait;
                cpu.stats.io_requests += 1;
                tracing::info!("core waiting on I/O at {:#010x}", pc);
            } else {
                cpu.status = CoreStatus::Halted;
                cpu.stats.halts += 1;
                tracing::info!("core halted at {:#010x}", pc);
            }
        }
        Opcode::Si => cpu.regs.cstr = cpu.regs.cstr.with_interrupts(true),
        Opcode::Di => cpu.regs.cstr = cpu.regs.cstr.with_interrupts(false),
        _ => {}
    }

    ctx.execute.alu_a = alu_a;
    ctx.execute.alu_b = alu_b;
    ctx.execute.alu_result = result;
    ctx.execute.store_value = ports.valex;

    if cpu.trace {
        tracing::trace!(
            "EX  ir={:#010x} {:?} a={:#x} b={:#x} -> {:#x} next={:#010x}",
            pc,
            ctrl.alu_op,
            alu_a,
            alu_b,
            result,
            cpu.ir
        );
    }
    Ok(())
}
