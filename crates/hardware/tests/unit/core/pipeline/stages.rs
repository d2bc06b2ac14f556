//! Individual Stage Tests.
//!
//! Drives the stage functions directly over a hand-built [`CycleContext`] to
//! check what each one latches and which CPU state it is allowed to touch.

use crate::common::builder::instruction::*;
use aruxi_core::common::constants::{
    EXCEPTION_VECTOR, KERN_DATA, KERN_TEXT, LINK_REGISTER, SYSCALL_REGISTER, USER_DATA,
};
use aruxi_core::common::{AccessType, Fault};
use aruxi_core::config::Config;
use aruxi_core::core::Cpu;
use aruxi_core::core::arch::mode::PrivilegeLevel;
use aruxi_core::core::arch::trap::{CoreStatus, EXCPN_ABORT_ACCESS};
use aruxi_core::core::pipeline::latches::CycleContext;
use aruxi_core::core::pipeline::signals::{AluOp, MemWidth};
use aruxi_core::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use aruxi_core::isa::instruction::InstrType;
use aruxi_core::isa::opcodes::Opcode;

fn booted() -> Cpu {
    let mut cpu = Cpu::new(&Config::default());
    cpu.boot(KERN_TEXT);
    cpu
}

/// Fetches and decodes `word` from KERN_TEXT.
fn decoded(cpu: &mut Cpu, word: u32) -> CycleContext {
    cpu.memory.write_u32(cpu.ir, word);
    let mut ctx = CycleContext::new();
    fetch_stage(cpu, &mut ctx).unwrap();
    decode_stage(cpu, &mut ctx).unwrap();
    ctx
}

// ══════════════════════════════════════════════════════════
// Fetch
// ══════════════════════════════════════════════════════════

#[test]
fn fetch_latches_word_and_advances_ir() {
    let mut cpu = booted();
    cpu.memory.write_u32(KERN_TEXT, 0x1234_5678);
    let mut ctx = CycleContext::new();
    fetch_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.fetch.ir, KERN_TEXT);
    assert_eq!(ctx.fetch.word, 0x1234_5678);
    assert_eq!(cpu.ir, KERN_TEXT + 4);
}

#[test]
fn fetch_clears_exception_status() {
    let mut cpu = booted();
    cpu.status = CoreStatus::Exception;
    let mut ctx = CycleContext::new();
    fetch_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(cpu.status, CoreStatus::Running);
}

#[test]
fn user_fetch_violation_raises_abort_and_latches_nothing() {
    let mut cpu = booted();
    cpu.regs.cstr = cpu.regs.cstr.with_privilege(PrivilegeLevel::User);
    cpu.ir = USER_DATA;
    let mut ctx = CycleContext::new();
    fetch_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.fetch.word, 0);
    assert_eq!(cpu.status, CoreStatus::Exception);
    assert_eq!(cpu.regs.esr, EXCPN_ABORT_ACCESS);
    assert_eq!(cpu.ir, EXCEPTION_VECTOR);
}

// ══════════════════════════════════════════════════════════
// Decode
// ══════════════════════════════════════════════════════════

#[test]
fn decode_reads_all_three_ports() {
    let mut cpu = booted();
    cpu.regs.write(1, 11);
    cpu.regs.write(2, 22);
    cpu.regs.write(3, 33);
    let ctx = decoded(&mut cpu, store(OP_STR, 3, 1, 0));
    assert_eq!(ctx.decode.inst.opcode, Opcode::Str);
    assert_eq!(ctx.decode.inst.itype, InstrType::M);
    assert_eq!(ctx.decode.ports.vala, 11);
    assert_eq!(ctx.decode.ports.valex, 33);
    assert!(ctx.decode.ctrl.mem_write);
    assert_eq!(ctx.decode.ctrl.mem_width, Some(MemWidth::Word));
}

#[test]
fn decode_evaluates_branch_condition_against_cstr() {
    let mut cpu = booted();
    cpu.regs.cstr = cpu.regs.cstr.with_flags(false, false, false, true);
    let ctx = decoded(&mut cpu, b(0, 4));
    assert!(ctx.decode.cond);
    let ctx = decoded(&mut cpu, b(1, 4));
    assert!(!ctx.decode.cond);
}

#[test]
fn decode_control_signals() {
    let mut cpu = booted();
    let ctx = decoded(&mut cpu, subs_i(1, 2, 3));
    assert!(ctx.decode.ctrl.set_cc);
    assert!(ctx.decode.ctrl.reg_write);
    assert_eq!(ctx.decode.ctrl.alu_op, AluOp::Minus);

    let ctx = decoded(&mut cpu, load(OP_LDHZ, 1, 2, 0));
    assert!(ctx.decode.ctrl.mem_to_reg);
    assert!(ctx.decode.ctrl.zero_extend);

    let ctx = decoded(&mut cpu, ub(3));
    assert!(!ctx.decode.ctrl.reg_write);
}

#[test]
fn decode_is_skipped_during_exception() {
    let mut cpu = booted();
    let mut ctx = CycleContext::new();
    ctx.fetch.word = add_i(1, 0, 1);
    cpu.status = CoreStatus::Exception;
    decode_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.decode.inst.opcode, Opcode::default());
}

// ══════════════════════════════════════════════════════════
// Execute
// ══════════════════════════════════════════════════════════

#[test]
fn execute_selects_immediate_operand() {
    let mut cpu = booted();
    cpu.regs.write(2, 40);
    let mut ctx = decoded(&mut cpu, add_i(1, 2, 2));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.execute.alu_a, 40);
    assert_eq!(ctx.execute.alu_b, 2);
    assert_eq!(ctx.execute.alu_result, 42);
}

#[test]
fn execute_call_computes_return_address() {
    let mut cpu = booted();
    let mut ctx = decoded(&mut cpu, call(5));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.decode.inst.rd, LINK_REGISTER);
    assert_eq!(ctx.execute.alu_result, KERN_TEXT + 4);
    assert_eq!(cpu.ir, KERN_TEXT + 20);
}

#[test]
fn execute_memory_address_from_base_and_offset() {
    let mut cpu = booted();
    cpu.regs.write(2, KERN_DATA);
    let mut ctx = decoded(&mut cpu, load(OP_LD, 1, 2, -8));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.execute.alu_result, KERN_DATA - 8);
}

#[test]
fn execute_syscall_number_comes_from_syscall_register() {
    let mut cpu = booted();
    cpu.regs.write(SYSCALL_REGISTER, 0xBEEF_0042);
    let mut ctx = decoded(&mut cpu, syscall());
    execute_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(cpu.status, CoreStatus::Exception);
    assert_eq!(cpu.regs.esr, 0x0042);
}

// ══════════════════════════════════════════════════════════
// Memory and write-back
// ══════════════════════════════════════════════════════════

#[test]
fn non_memory_instruction_passes_alu_result() {
    let mut cpu = booted();
    let mut ctx = decoded(&mut cpu, add_i(1, 0, 7));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    mem_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.memory.value_out, 7);
}

#[test]
fn load_presents_loaded_value_to_writeback() {
    let mut cpu = booted();
    cpu.memory.write_u32(KERN_DATA, 0xCAFE_F00D);
    cpu.regs.write(2, KERN_DATA);
    let mut ctx = decoded(&mut cpu, load(OP_LD, 1, 2, 0));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    mem_stage(&mut cpu, &mut ctx).unwrap();
    assert_eq!(ctx.memory.value_out, 0xCAFE_F00D);

    wb_stage(&mut cpu, &ctx);
    assert_eq!(cpu.regs.read(1), 0xCAFE_F00D);
}

#[test]
fn writeback_skips_instructions_without_destination() {
    let mut cpu = booted();
    cpu.regs.write(3, 0x33);
    let mut ctx = decoded(&mut cpu, ub(1));
    ctx.memory.value_out = 0x99;
    wb_stage(&mut cpu, &ctx);
    assert_eq!(cpu.regs.read(3), 0x33);
    assert_eq!(cpu.regs.read(0), 0);
}

#[test]
fn memory_access_without_width_is_fatal() {
    let mut cpu = booted();
    cpu.regs.write(2, KERN_DATA);
    let mut ctx = decoded(&mut cpu, load(OP_LD, 1, 2, 0));
    execute_stage(&mut cpu, &mut ctx).unwrap();
    ctx.decode.ctrl.mem_width = None;
    assert_eq!(
        mem_stage(&mut cpu, &mut ctx),
        Err(Fault::Internal {
            addr: KERN_DATA,
            access: AccessType::Read,
        })
    );
}
