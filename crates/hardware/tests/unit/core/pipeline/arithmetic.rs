//! Arithmetic and Logic Program Tests.
//!
//! Runs short kernel programs through the full instruction cycle and checks:
//!   1. Immediate and register forms write the expected destination
//!   2. Only ADDS and SUBS touch the condition flags
//!   3. Writes to x30 are dropped and index 31 targets SP

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use aruxi_core::common::constants::{KERN_TEXT, SP_INDEX};
use aruxi_core::core::arch::cstr::{CSTR_C, CSTR_N, CSTR_O, CSTR_Z, ControlStatus};
use aruxi_core::sim::IdleReason;

const T: u32 = KERN_TEXT;

fn run(program: &[u32]) -> TestContext {
    let mut tc = TestContext::new().load_program(T, program);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    tc
}

fn flags(tc: &TestContext) -> u16 {
    tc.cpu().regs.cstr.bits() & (CSTR_C | CSTR_O | CSTR_N | CSTR_Z)
}

// ══════════════════════════════════════════════════════════
// Results
// ══════════════════════════════════════════════════════════

#[test]
fn add_immediate_and_register() {
    let tc = run(&[add_i(1, 0, 5), add_r(2, 1, 1), add_i(3, 2, 0x3FFF), hlt()]);
    assert_eq!(tc.get_reg(1), 5);
    assert_eq!(tc.get_reg(2), 10);
    assert_eq!(tc.get_reg(3), 10 + 0x3FFF);
}

#[test]
fn subtract_wraps() {
    let tc = run(&[sub_i(1, 0, 1), hlt()]);
    assert_eq!(tc.get_reg(1), 0xFFFF_FFFF);
}

#[test]
fn multiply_and_divide() {
    let mut tc = TestContext::new().load_program(T, &[mul(3, 1, 2), div(4, 1, 2), div(5, 1, 0), hlt()]);
    tc.set_reg(1, 84);
    tc.set_reg(2, 4);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    assert_eq!(tc.get_reg(3), 336);
    assert_eq!(tc.get_reg(4), 21);
    assert_eq!(tc.get_reg(5), 0xFFFF_FFFF);
}

#[test]
fn logic_and_shifts() {
    let mut tc = TestContext::new().load_program(
        T,
        &[
            InstructionBuilder::new().r_type(OP_AND, 3, 1, 2).build(),
            InstructionBuilder::new().r_type(OP_OR, 4, 1, 2).build(),
            InstructionBuilder::new().r_type(OP_XOR, 5, 1, 2).build(),
            InstructionBuilder::new().i_type(OP_NOT, 6, 1, 0).build(),
            lsl_i(7, 1, 4),
            asr_i(8, 9, 8),
            hlt(),
        ],
    );
    tc.set_reg(1, 0x0000_FF00);
    tc.set_reg(2, 0x0000_0FF0);
    tc.set_reg(9, 0x8000_0000);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    assert_eq!(tc.get_reg(3), 0x0000_0F00);
    assert_eq!(tc.get_reg(4), 0x0000_FFF0);
    assert_eq!(tc.get_reg(5), 0x0000_F0F0);
    assert_eq!(tc.get_reg(6), 0xFFFF_00FF);
    assert_eq!(tc.get_reg(7), 0x000F_F000);
    assert_eq!(tc.get_reg(8), 0xFF80_0000);
}

// ══════════════════════════════════════════════════════════
// Flags
// ══════════════════════════════════════════════════════════

#[test]
fn adds_into_sign_bit_sets_negative_and_overflow() {
    let mut tc = TestContext::new().load_program(T, &[adds_r(3, 1, 2), hlt()]);
    tc.set_reg(1, 0x7FFF_FFFF);
    tc.set_reg(2, 1);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    assert_eq!(tc.get_reg(3), 0x8000_0000);
    assert_eq!(flags(&tc), CSTR_N | CSTR_O);
}

#[test]
fn subs_of_smaller_minus_larger() {
    let mut tc = TestContext::new().load_program(T, &[subs_r(3, 1, 2), hlt()]);
    tc.set_reg(1, 1);
    tc.set_reg(2, 2);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    assert_eq!(tc.get_reg(3), 0xFFFF_FFFF);
    assert_eq!(flags(&tc), CSTR_N);
}

#[test]
fn subs_equal_operands_sets_zero_and_carry() {
    let tc = run(&[add_i(1, 0, 9), subs_i(2, 1, 9), hlt()]);
    assert_eq!(flags(&tc), CSTR_Z | CSTR_C);
}

#[test]
fn plain_add_leaves_flags_alone() {
    let mut tc = TestContext::new().load_program(T, &[add_r(3, 1, 2), hlt()]);
    tc.cpu_mut().regs.cstr = ControlStatus(ControlStatus::KERNEL.bits() | CSTR_Z);
    tc.set_reg(1, 0x7FFF_FFFF);
    tc.set_reg(2, 1);
    assert_eq!(tc.run_to_idle(), IdleReason::Halted);
    assert_eq!(flags(&tc), CSTR_Z);
}

#[test]
fn flag_update_keeps_privilege() {
    let tc = run(&[subs_i(1, 0, 0), hlt()]);
    assert_eq!(tc.cpu().regs.cstr.bits(), ControlStatus::KERNEL.bits() | CSTR_Z | CSTR_C);
}

// ══════════════════════════════════════════════════════════
// Destinations
// ══════════════════════════════════════════════════════════

#[test]
fn x30_is_read_only() {
    let tc = run(&[add_i(30, 0, 77), add_i(1, 30, 1), hlt()]);
    assert_eq!(tc.get_reg(30), 0);
    assert_eq!(tc.get_reg(1), 1);
}

#[test]
fn index_31_writes_stack_pointer() {
    let tc = run(&[add_i(SP_INDEX as u32, 0, 0x100), hlt()]);
    assert_eq!(tc.cpu().regs.sp(), 0x100);
}

#[test]
fn retired_instructions_are_counted() {
    let tc = run(&[add_i(1, 0, 1), add_i(1, 1, 1), hlt()]);
    let stats = &tc.cpu().stats;
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.cycles_kernel, 3);
    assert_eq!(stats.halts, 1);
}
